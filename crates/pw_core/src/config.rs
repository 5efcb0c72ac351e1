use chrono::{DateTime, Duration, Utc};

/// Topical keywords the pipeline scores articles against, in ranking order.
const DEFAULT_KEYWORDS: &[&str] = &[
    "Copilot",
    "AI Code Review",
    "Pair Programming with AI",
    "LLM in IDEs",
    "AI Developer Tools",
    "Developer Productivity AI",
    "Human-in-the-loop",
    "AI trust",
    "Education AI",
    "Responsible AI",
    "AI Alignment",
    "Fairness in AI",
    "AI open source",
    "AI Agents",
    "AI Assistants",
    "Autonomous Software Agents",
    "AI in APIs",
    "Developer Workflows",
    "Future of work",
];

/// Topic-partitioned arXiv RSS endpoints used by the fallback path.
const DEFAULT_FEEDS: &[&str] = &[
    "http://rss.arxiv.org/rss/cs.AI",
    "http://rss.arxiv.org/rss/cs.CL",
    "http://rss.arxiv.org/rss/cs.LG",
    "http://rss.arxiv.org/rss/stat.ML",
];

/// Immutable fetch configuration, injected into each fetcher at construction.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub keywords: Vec<String>,
    pub feeds: Vec<String>,
    /// Page size requested from the arXiv query API.
    pub max_results: usize,
    /// Articles older than this many days are dropped.
    pub recency_days: i64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            feeds: DEFAULT_FEEDS.iter().map(|s| s.to_string()).collect(),
            max_results: 25,
            recency_days: 30,
        }
    }
}

impl FetchConfig {
    /// The oldest publication timestamp still retained, relative to now (UTC).
    pub fn cutoff(&self) -> DateTime<Utc> {
        Utc::now() - Duration::days(self.recency_days)
    }
}
