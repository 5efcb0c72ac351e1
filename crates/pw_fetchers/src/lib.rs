use async_trait::async_trait;
use pw_core::{Article, ArticleSource, Result};

pub mod api;
pub mod enrich;
pub mod pipeline;
pub mod rss;

pub use api::ApiFetcher;
pub use pipeline::FetchPipeline;
pub use self::rss::RssFetcher;

#[async_trait]
pub trait ArticleFetcher: Send + Sync {
    /// Which retrieval path this fetcher implements
    fn source(&self) -> ArticleSource;

    /// Fetches recent articles, already filtered and enriched
    async fn fetch_articles(&self) -> Result<Vec<Article>>;
}
