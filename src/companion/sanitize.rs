use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref THINK_SPAN: Regex = Regex::new(r"(?s)<think>.*?</think>").unwrap();
    static ref STRAY_THINK_TAG: Regex = Regex::new(r"</?think>").unwrap();
}

/// Removes `<think>` reasoning spans, tags included, then any unmatched tag,
/// then surrounding whitespace.
pub fn strip_think_tags(text: &str) -> String {
    let without_spans = THINK_SPAN.replace_all(text, "");
    let without_tags = STRAY_THINK_TAG.replace_all(&without_spans, "");
    without_tags.trim().to_string()
}
