//! Bold-run splitting.

use super::block::{Inline, InlineRun};
use regex::Regex;
use std::sync::LazyLock;

/// Non-greedy `**...**` span. `.` stops at line breaks, so spans never cross lines.
static BOLD_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*.*?\*\*").expect("bold pattern is valid")
});

/// Split text into plain and bold runs in a single flat pass.
///
/// Empty plain fragments between adjacent spans (or at either edge) are
/// dropped; they carry nothing to display.
#[must_use]
pub fn parse_inline(text: &str) -> Inline {
    let mut runs = Vec::new();
    let mut last = 0;

    for span in BOLD_SPAN.find_iter(text) {
        push_plain(&mut runs, &text[last..span.start()]);
        let inner = &span.as_str()[2..span.as_str().len() - 2];
        runs.push(InlineRun::Bold(inner.to_string()));
        last = span.end();
    }
    push_plain(&mut runs, &text[last..]);

    runs
}

fn push_plain(runs: &mut Inline, fragment: &str) {
    if !fragment.is_empty() {
        runs.push(InlineRun::Plain(fragment.to_string()));
    }
}
