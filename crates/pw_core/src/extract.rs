use async_trait::async_trait;

use crate::Result;

/// Retrieves a document and extracts its plain-text layer.
///
/// Callers treat extraction as best effort: a failure is downgraded to empty
/// text and the article record is still produced.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    /// Returns the name of the extractor implementation
    fn name(&self) -> &str;

    /// Downloads the document at `pdf_url` and returns its extracted text
    async fn extract_text(&self, pdf_url: &str) -> Result<String>;
}
