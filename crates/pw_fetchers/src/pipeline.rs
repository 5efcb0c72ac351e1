use pw_core::{Article, ArticleStorage, Result};
use tracing::{info, warn};

use crate::ArticleFetcher;

/// Runs the two-stage fetch: primary first, fallback only when the primary
/// succeeds with zero results. A primary error propagates untouched.
pub struct FetchPipeline {
    primary: Box<dyn ArticleFetcher>,
    fallback: Box<dyn ArticleFetcher>,
    storage: Box<dyn ArticleStorage>,
    top_n: usize,
}

impl FetchPipeline {
    pub fn new(
        primary: Box<dyn ArticleFetcher>,
        fallback: Box<dyn ArticleFetcher>,
        storage: Box<dyn ArticleStorage>,
    ) -> Self {
        Self {
            primary,
            fallback,
            storage,
            top_n: 3,
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Fetch, rank by matched-keyword count, keep the top entries and persist
    /// them. Returns the persisted records.
    pub async fn run(&self) -> Result<Vec<Article>> {
        let mut articles = self.primary.fetch_articles().await?;
        if articles.is_empty() {
            warn!("⚠️ arXiv API returned no articles — falling back to RSS...");
            articles = self.fallback.fetch_articles().await?;
        }

        // Stable sort: ties keep their fetch order.
        articles.sort_by_key(|a| std::cmp::Reverse(a.matched_keywords.len()));
        articles.truncate(self.top_n);

        self.storage.replace_all(&articles).await?;
        info!("🧾 Kept top {} of ranked articles", articles.len());
        Ok(articles)
    }
}
