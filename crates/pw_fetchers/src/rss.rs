use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use pw_core::{
    keywords::matched_keywords, Article, ArticleSource, DocumentExtractor, Error, FetchConfig,
    Result,
};
use ::rss::Channel;
use regex::Regex;
use tracing::info;

use crate::{enrich::best_effort_full_text, ArticleFetcher};

lazy_static! {
    // arXiv RSS packs identifier, announce type and abstract into one field:
    // "arXiv:2401.00001v1 Announce Type: new \nAbstract: ..."
    static ref DESCRIPTION_RE: Regex =
        Regex::new(r"(?s)arXiv:(\S+)\s+Announce Type:\s*(\S+)\s+Abstract:\s*(.*)").unwrap();
    static ref HTML_TAG_RE: Regex = Regex::new(r"<[^>]+>").unwrap();
}

fn clean_html(text: &str) -> String {
    HTML_TAG_RE
        .replace_all(text, "")
        .replace('\n', " ")
        .trim()
        .to_string()
}

/// Splits a feed description into (identifier, announce type, abstract).
///
/// A description that does not match the structured pattern yields no
/// identifier/type and the HTML-stripped raw text as the abstract.
fn parse_description(raw: &str) -> (Option<String>, Option<String>, String) {
    match DESCRIPTION_RE.captures(raw) {
        Some(caps) => (
            Some(caps[1].to_string()),
            Some(caps[2].to_lowercase()),
            clean_html(&caps[3]),
        ),
        None => (None, None, clean_html(raw)),
    }
}

/// Fallback path: polls the topic-partitioned arXiv RSS feeds.
pub struct RssFetcher {
    config: FetchConfig,
    extractor: Arc<dyn DocumentExtractor>,
    client: reqwest::Client,
}

impl RssFetcher {
    pub fn new(config: FetchConfig, extractor: Arc<dyn DocumentExtractor>) -> Self {
        Self {
            config,
            extractor,
            client: reqwest::Client::new(),
        }
    }

    /// Converts channel items into records. Only newly announced submissions
    /// survive; a parseable publication date older than the window drops the
    /// item, while an absent or unparseable date retains it.
    fn parse_channel(&self, channel: &Channel, cutoff: DateTime<Utc>) -> Vec<Article> {
        let mut articles = Vec::new();
        for item in channel.items() {
            let raw_description = item.description().unwrap_or_default();
            let (arxiv_id, announce_type, abstract_text) = parse_description(raw_description);
            if announce_type.as_deref() != Some("new") {
                continue;
            }
            // The pattern captures identifier and type together, so a "new"
            // announce type implies an identifier.
            let arxiv_id = arxiv_id.unwrap_or_default();

            let pub_date = item
                .pub_date()
                .and_then(|d| DateTime::parse_from_rfc2822(d).ok())
                .map(|d| d.with_timezone(&Utc));
            if let Some(date) = pub_date {
                if date < cutoff {
                    continue;
                }
            }

            let title = item.title().unwrap_or_default().trim().to_string();
            let link = item.link().unwrap_or_default().to_string();
            let authors = item
                .dublin_core_ext()
                .map(|dc| dc.creators().join(", "))
                .filter(|creators| !creators.is_empty())
                .unwrap_or_else(|| "Unknown author(s)".to_string());
            let content = format!("{} {}", title, abstract_text);

            articles.push(Article {
                matched_keywords: matched_keywords(&content, &self.config.keywords),
                pdf_link: Article::pdf_link_for(&arxiv_id),
                title,
                summary: abstract_text,
                link,
                authors,
                arxiv_id,
                announce_type,
                pub_date,
                source: ArticleSource::Rss,
                full_text: String::new(),
            });
        }
        articles
    }
}

#[async_trait]
impl ArticleFetcher for RssFetcher {
    fn source(&self) -> ArticleSource {
        ArticleSource::Rss
    }

    async fn fetch_articles(&self) -> Result<Vec<Article>> {
        let cutoff = self.config.cutoff();
        let mut articles = Vec::new();
        for feed_url in &self.config.feeds {
            info!("📡 Fetching arXiv RSS feed {}", feed_url);
            let bytes = self
                .client
                .get(feed_url)
                .send()
                .await?
                .error_for_status()?
                .bytes()
                .await?;
            let channel =
                Channel::read_from(&bytes[..]).map_err(|e| Error::Feed(e.to_string()))?;
            let mut batch = self.parse_channel(&channel, cutoff);
            for article in &mut batch {
                article.full_text =
                    best_effort_full_text(self.extractor.as_ref(), &article.pdf_link).await;
            }
            articles.extend(batch);
        }
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    struct NoopExtractor;

    #[async_trait]
    impl DocumentExtractor for NoopExtractor {
        fn name(&self) -> &str {
            "noop"
        }

        async fn extract_text(&self, _pdf_url: &str) -> Result<String> {
            Ok(String::new())
        }
    }

    fn fetcher_with_keywords(keywords: &[&str]) -> RssFetcher {
        let config = FetchConfig {
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            ..FetchConfig::default()
        };
        RssFetcher::new(config, Arc::new(NoopExtractor))
    }

    fn channel(items: &str) -> Channel {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
            <rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/">
              <channel>
                <title>cs.AI updates on arXiv.org</title>
                <link>http://rss.arxiv.org/rss/cs.AI</link>
                <description>cs.AI updates</description>
                {items}
              </channel>
            </rss>"#
        );
        Channel::read_from(xml.as_bytes()).unwrap()
    }

    fn item(id: &str, announce: &str, title: &str, abstract_text: &str, pub_date: &str) -> String {
        format!(
            r#"<item>
              <title>{title}</title>
              <link>https://arxiv.org/abs/{id}</link>
              <description>arXiv:{id} Announce Type: {announce}
Abstract: {abstract_text}</description>
              <dc:creator>Jane Doe, John Roe</dc:creator>
              <pubDate>{pub_date}</pubDate>
            </item>"#
        )
    }

    #[test]
    fn description_pattern_splits_structured_fields() {
        let (id, announce, abstract_text) = parse_description(
            "arXiv:2401.00001v1 Announce Type: new \nAbstract: We study <b>agents</b>.",
        );
        assert_eq!(id.as_deref(), Some("2401.00001v1"));
        assert_eq!(announce.as_deref(), Some("new"));
        assert_eq!(abstract_text, "We study agents.");
    }

    #[test]
    fn description_announce_type_is_lowercased() {
        let (_, announce, _) =
            parse_description("arXiv:2401.00001v1 Announce Type: New \nAbstract: text");
        assert_eq!(announce.as_deref(), Some("new"));
    }

    #[test]
    fn unstructured_description_degrades_to_stripped_text() {
        let (id, announce, abstract_text) =
            parse_description("<p>Just a plain\nblurb</p>");
        assert_eq!(id, None);
        assert_eq!(announce, None);
        assert_eq!(abstract_text, "Just a plain blurb");
    }

    #[test]
    fn clean_html_strips_tags_and_newlines() {
        assert_eq!(clean_html("<p>a<br/>b</p>\nc "), "ab c");
    }

    #[test]
    fn only_new_announcements_are_retained() {
        let recent = (Utc::now() - Duration::days(1)).to_rfc2822();
        let items = format!(
            "{}{}",
            item("2401.00001v1", "new", "Kept", "about AI Agents", &recent),
            item("2401.00002v1", "cross", "Dropped", "also AI Agents", &recent),
        );
        let fetcher = fetcher_with_keywords(&["AI Agents"]);
        let articles = fetcher.parse_channel(&channel(&items), fetcher.config.cutoff());
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Kept");
        assert_eq!(articles[0].announce_type.as_deref(), Some("new"));
    }

    #[test]
    fn unstructured_items_are_excluded_by_the_announce_filter() {
        let recent = (Utc::now() - Duration::days(1)).to_rfc2822();
        let items = format!(
            r#"<item>
              <title>Opaque</title>
              <link>https://example.org/x</link>
              <description>no recognizable pattern here</description>
              <pubDate>{recent}</pubDate>
            </item>"#
        );
        let fetcher = fetcher_with_keywords(&["AI Agents"]);
        let articles = fetcher.parse_channel(&channel(&items), fetcher.config.cutoff());
        assert!(articles.is_empty());
    }

    #[test]
    fn stale_items_are_dropped_but_undated_items_survive() {
        let stale = (Utc::now() - Duration::days(60)).to_rfc2822();
        let undated = r#"<item>
          <title>Undated</title>
          <link>https://arxiv.org/abs/2401.00004v1</link>
          <description>arXiv:2401.00004v1 Announce Type: new
Abstract: timeless work</description>
        </item>"#;
        let items = format!(
            "{}{}",
            item("2401.00003v1", "new", "Stale", "old work", &stale),
            undated,
        );
        let fetcher = fetcher_with_keywords(&["AI Agents"]);
        let articles = fetcher.parse_channel(&channel(&items), fetcher.config.cutoff());
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Undated");
        assert_eq!(articles[0].pub_date, None);
    }

    #[test]
    fn records_carry_rss_source_and_derived_fields() {
        let recent = (Utc::now() - Duration::days(1)).to_rfc2822();
        let items = item(
            "2401.00005v1",
            "new",
            "Pair Programming with AI in practice",
            "A look at &lt;i&gt;Copilot&lt;/i&gt; workflows.",
            &recent,
        );
        let fetcher = fetcher_with_keywords(&["Copilot", "Pair Programming with AI"]);
        let articles = fetcher.parse_channel(&channel(&items), fetcher.config.cutoff());
        assert_eq!(articles.len(), 1);
        let article = &articles[0];
        assert_eq!(article.source, ArticleSource::Rss);
        assert_eq!(article.arxiv_id, "2401.00005v1");
        assert_eq!(article.pdf_link, "https://arxiv.org/pdf/2401.00005v1.pdf");
        assert_eq!(article.authors, "Jane Doe, John Roe");
        assert_eq!(article.summary, "A look at Copilot workflows.");
        assert_eq!(
            article.matched_keywords,
            vec!["Copilot", "Pair Programming with AI"]
        );
    }

    #[test]
    fn missing_creator_defaults_to_unknown_authors() {
        let recent = (Utc::now() - Duration::days(1)).to_rfc2822();
        let items = format!(
            r#"<item>
              <title>Anonymous</title>
              <link>https://arxiv.org/abs/2401.00006v1</link>
              <description>arXiv:2401.00006v1 Announce Type: new
Abstract: some text</description>
              <pubDate>{recent}</pubDate>
            </item>"#
        );
        let fetcher = fetcher_with_keywords(&["AI Agents"]);
        let articles = fetcher.parse_channel(&channel(&items), fetcher.config.cutoff());
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].authors, "Unknown author(s)");
    }
}
