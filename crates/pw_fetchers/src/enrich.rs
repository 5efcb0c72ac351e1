use pw_core::DocumentExtractor;
use tracing::warn;

/// Best-effort full-text retrieval: an extractor failure is logged and
/// downgraded to empty text so the record is still produced.
pub async fn best_effort_full_text(extractor: &dyn DocumentExtractor, pdf_url: &str) -> String {
    match extractor.extract_text(pdf_url).await {
        Ok(text) => text,
        Err(e) => {
            warn!("❌ Failed to read PDF from {}: {}", pdf_url, e);
            String::new()
        }
    }
}
