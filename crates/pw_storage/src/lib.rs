use std::path::PathBuf;

use async_trait::async_trait;
use pw_core::{Article, ArticleStorage, Result};
use tracing::info;

/// Stores the run's articles as one pretty-printed JSON array, fully
/// replacing the previous file.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub const DEFAULT_PATH: &'static str = "data/input.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for JsonFileStorage {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATH)
    }
}

#[async_trait]
impl ArticleStorage for JsonFileStorage {
    async fn replace_all(&self, articles: &[Article]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let json = serde_json::to_vec_pretty(articles)?;
        tokio::fs::write(&self.path, json).await?;
        info!(
            "✅ Saved {} research articles to {}",
            articles.len(),
            self.path.display()
        );
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<Article>> {
        let raw = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&raw)?)
    }
}
