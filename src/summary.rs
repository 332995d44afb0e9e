//! Summary extraction for history previews.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum summary length in characters.
pub const SUMMARY_MAX_CHARS: usize = 150;

const ELLIPSIS: &str = "...";

static SUMMARY_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^## Summary[ \t\r]*$").expect("summary heading pattern is valid")
});

static NEXT_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^##").expect("heading pattern is valid"));

/// Build a short plain-text preview of a response.
///
/// Uses the body of the `## Summary` section when there is a non-empty one,
/// truncated to [`SUMMARY_MAX_CHARS`] with a trailing `...`. Otherwise the
/// first [`SUMMARY_MAX_CHARS`] characters of the raw response are used as-is,
/// with no ellipsis.
#[must_use]
pub fn extract_summary(response: &str) -> String {
    match summary_section(response) {
        Some(section) if section.chars().count() > SUMMARY_MAX_CHARS => {
            let keep = SUMMARY_MAX_CHARS - ELLIPSIS.len();
            let mut truncated: String = section.chars().take(keep).collect();
            truncated.push_str(ELLIPSIS);
            truncated
        }
        Some(section) => section.to_string(),
        None => response.chars().take(SUMMARY_MAX_CHARS).collect(),
    }
}

/// Trimmed body between `## Summary` and the next `##` heading (or the end).
fn summary_section(response: &str) -> Option<&str> {
    let heading = SUMMARY_HEADING.find(response)?;
    let rest = &response[heading.end()..];
    let body = NEXT_HEADING
        .find(rest)
        .map_or(rest, |next| &rest[..next.start()])
        .trim();
    (!body.is_empty()).then_some(body)
}
