/// Returns the keywords present in `text`, preserving keyword-list order.
///
/// Matching is case-insensitive substring containment; no word-boundary
/// awareness, no fuzziness.
pub fn matched_keywords(text: &str, keywords: &[String]) -> Vec<String> {
    let text = text.to_lowercase();
    keywords
        .iter()
        .filter(|kw| text.contains(&kw.to_lowercase()))
        .cloned()
        .collect()
}
