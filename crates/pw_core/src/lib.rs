pub mod config;
pub mod error;
pub mod extract;
pub mod keywords;
pub mod storage;

pub use config::FetchConfig;
pub use error::Error;
pub use extract::DocumentExtractor;
pub use storage::ArticleStorage;
pub type Result<T> = std::result::Result<T, Error>;

/// Which retrieval path produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ArticleSource {
    #[serde(rename = "arXiv (API)")]
    Api,
    #[serde(rename = "arXiv (RSS)")]
    Rss,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Article {
    pub title: String,
    pub summary: String,
    pub link: String,
    pub authors: String,
    pub arxiv_id: String,
    /// arXiv announcement classification ("new", "cross", ...); RSS entries only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announce_type: Option<String>,
    pub pdf_link: String,
    pub pub_date: Option<chrono::DateTime<chrono::Utc>>,
    pub source: ArticleSource,
    pub matched_keywords: Vec<String>,
    pub full_text: String,
}

impl Article {
    /// The PDF location is always derived from the identifier, never supplied.
    pub fn pdf_link_for(arxiv_id: &str) -> String {
        format!("https://arxiv.org/pdf/{}.pdf", arxiv_id)
    }
}
