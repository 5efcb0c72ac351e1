use async_trait::async_trait;
use pw_core::{DocumentExtractor, Error, Result};

/// Downloads a PDF over HTTP and extracts its text layer.
pub struct PdfExtractor {
    client: reqwest::Client,
}

impl PdfExtractor {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentExtractor for PdfExtractor {
    fn name(&self) -> &str {
        "pdf"
    }

    async fn extract_text(&self, pdf_url: &str) -> Result<String> {
        let response = self.client.get(pdf_url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        let text = pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| Error::Extraction(format!("Failed to parse PDF from {}: {}", pdf_url, e)))?;
        Ok(text.trim().to_string())
    }
}

/// Extractor that skips document retrieval entirely.
///
/// Selected by `--skip-pdf`; also the natural test double.
pub struct NoopExtractor;

#[async_trait]
impl DocumentExtractor for NoopExtractor {
    fn name(&self) -> &str {
        "noop"
    }

    async fn extract_text(&self, _pdf_url: &str) -> Result<String> {
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn noop_extractor_returns_empty_text() {
        let text = NoopExtractor.extract_text("https://arxiv.org/pdf/2401.00001.pdf").await.unwrap();
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn pdf_extractor_fails_on_unreachable_host() {
        let extractor = PdfExtractor::new();
        let result = extractor
            .extract_text("http://127.0.0.1:1/never-there.pdf")
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    #[ignore = "network test against arxiv.org"]
    async fn pdf_extractor_reads_a_real_paper() {
        let extractor = PdfExtractor::new();
        let text = extractor
            .extract_text("https://arxiv.org/pdf/1706.03762.pdf")
            .await
            .unwrap();
        assert!(!text.is_empty());
    }
}
