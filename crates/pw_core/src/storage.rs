use async_trait::async_trait;

use crate::{Article, Result};

#[async_trait]
pub trait ArticleStorage: Send + Sync {
    /// Persist `articles`, fully replacing any previous contents
    async fn replace_all(&self, articles: &[Article]) -> Result<()>;

    /// Read back the persisted articles
    async fn load_all(&self) -> Result<Vec<Article>>;
}
