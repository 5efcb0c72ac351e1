use std::sync::Arc;

use async_trait::async_trait;
use atom_syndication::Feed;
use chrono::{DateTime, Utc};
use pw_core::{
    keywords::matched_keywords, Article, ArticleSource, DocumentExtractor, Error, FetchConfig,
    Result,
};
use reqwest::Url;
use tracing::info;

use crate::{enrich::best_effort_full_text, ArticleFetcher};

/// Primary path: one query against the arXiv search API.
pub struct ApiFetcher {
    config: FetchConfig,
    extractor: Arc<dyn DocumentExtractor>,
    client: reqwest::Client,
}

impl ApiFetcher {
    const BASE_URL: &'static str = "https://export.arxiv.org/api/query";

    pub fn new(config: FetchConfig, extractor: Arc<dyn DocumentExtractor>) -> Self {
        Self {
            config,
            extractor,
            client: reqwest::Client::new(),
        }
    }

    /// Boolean-OR query over all keywords; phrases with spaces are quoted.
    fn search_query(&self) -> String {
        let terms = self
            .config
            .keywords
            .iter()
            .map(|kw| {
                if kw.contains(' ') {
                    format!("\"{}\"", kw)
                } else {
                    kw.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" OR ");
        format!("all:({})", terms)
    }

    fn query_url(&self) -> Result<Url> {
        Url::parse_with_params(
            Self::BASE_URL,
            &[
                ("search_query", self.search_query()),
                ("start", "0".to_string()),
                ("max_results", self.config.max_results.to_string()),
                ("sortBy", "submittedDate".to_string()),
                ("sortOrder", "descending".to_string()),
            ],
        )
        .map_err(|e| Error::InvalidUrl(e.to_string()))
    }

    /// Converts Atom entries into records, applying the recency filter.
    /// Entries without a parseable publication timestamp are never retained.
    fn parse_feed(&self, feed: &Feed, cutoff: DateTime<Utc>) -> Vec<Article> {
        let mut articles = Vec::new();
        for entry in feed.entries() {
            let pub_date = match entry.published() {
                Some(date) => date.with_timezone(&Utc),
                None => continue,
            };
            if pub_date < cutoff {
                continue;
            }

            let title = entry.title().trim().to_string();
            let summary = entry
                .summary()
                .map(|s| s.trim().to_string())
                .unwrap_or_default();
            let arxiv_id = entry
                .id()
                .rsplit('/')
                .next()
                .unwrap_or_default()
                .to_string();
            let link = entry
                .links()
                .iter()
                .find(|l| l.rel() == "alternate")
                .or_else(|| entry.links().first())
                .map(|l| l.href().to_string())
                .unwrap_or_else(|| entry.id().to_string());
            let authors = if entry.authors().is_empty() {
                "Unknown".to_string()
            } else {
                entry
                    .authors()
                    .iter()
                    .map(|a| a.name().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let content = format!("{} {}", title, summary);

            articles.push(Article {
                matched_keywords: matched_keywords(&content, &self.config.keywords),
                pdf_link: Article::pdf_link_for(&arxiv_id),
                title,
                summary,
                link,
                authors,
                arxiv_id,
                announce_type: None,
                pub_date: Some(pub_date),
                source: ArticleSource::Api,
                full_text: String::new(),
            });
        }
        articles
    }
}

#[async_trait]
impl ArticleFetcher for ApiFetcher {
    fn source(&self) -> ArticleSource {
        ArticleSource::Api
    }

    async fn fetch_articles(&self) -> Result<Vec<Article>> {
        info!("🔍 Fetching from arXiv API...");
        let url = self.query_url()?;
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let feed = Feed::read_from(body.as_bytes()).map_err(|e| Error::Feed(e.to_string()))?;

        let mut articles = self.parse_feed(&feed, self.config.cutoff());
        for article in &mut articles {
            article.full_text =
                best_effort_full_text(self.extractor.as_ref(), &article.pdf_link).await;
        }
        Ok(articles)
    }
}
