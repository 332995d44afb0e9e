//! Terminal formatting for rendered responses and history listings.

use crate::history::HistoryEntry;
use crate::markdown::{ContentBlock, InlineRun, plain_text};
use chrono::{DateTime, Local, Utc};
use owo_colors::OwoColorize;
use std::fmt::Write;

/// Format rendered blocks for the terminal.
///
/// With `styled`, bold runs and headings use ANSI bold.
#[must_use]
pub fn format_blocks(blocks: &[ContentBlock], styled: bool) -> String {
    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        format_block(&mut out, block, styled);
    }
    out
}

fn format_block(out: &mut String, block: &ContentBlock, styled: bool) {
    match block {
        ContentBlock::Heading { level, text } => {
            let title = plain_text(text);
            out.push_str(&emphasize(&title, styled));
            out.push('\n');
            if *level == 2 {
                out.push_str(&"─".repeat(title.chars().count()));
                out.push('\n');
            }
        }
        ContentBlock::Paragraph(runs) => {
            out.push_str(&format_runs(runs, styled));
            out.push('\n');
        }
        ContentBlock::BulletList(items) => {
            for item in items {
                let _ = writeln!(out, "  • {}", format_runs(item, styled));
            }
        }
        ContentBlock::OrderedList(items) => {
            for (n, item) in items.iter().enumerate() {
                let _ = writeln!(out, "  {}. {}", n + 1, format_runs(item, styled));
            }
        }
        ContentBlock::Blockquote(lines) => {
            for line in lines {
                let _ = writeln!(out, "  │ {}", format_runs(line, styled));
            }
        }
        ContentBlock::CodeBlock(code) => {
            for line in code.lines() {
                let _ = writeln!(out, "    {line}");
            }
        }
    }
}

fn format_runs(runs: &[InlineRun], styled: bool) -> String {
    runs.iter()
        .map(|run| match run {
            InlineRun::Plain(text) => text.clone(),
            InlineRun::Bold(text) => emphasize(text, styled),
        })
        .collect()
}

fn emphasize(text: &str, styled: bool) -> String {
    if styled {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Date as shown in history listings, e.g. `Jun 5, 2024`.
#[must_use]
pub fn format_date(utc: DateTime<Utc>) -> String {
    let local: DateTime<Local> = utc.into();
    local.format("%b %-d, %Y").to_string()
}

/// Format a history listing.
///
/// `term` is the search term that produced `entries`, used for the
/// no-results message; `total` is the size of the unfiltered history.
#[must_use]
pub fn format_history(entries: &[&HistoryEntry], term: Option<&str>, total: usize) -> String {
    if total == 0 {
        return "Your analysis history will appear here.\n".to_string();
    }
    if entries.is_empty() {
        return format!("No results found for \"{}\".\n", term.unwrap_or_default());
    }

    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "{:<38} {:<14} {}",
            entry.id,
            format_date(entry.timestamp),
            first_line(&entry.topic)
        );
        if !entry.summary.is_empty() {
            let _ = writeln!(out, "    {}", first_line(&entry.summary));
        }
    }
    let _ = writeln!(out, "{}", "─".repeat(70));
    let _ = writeln!(out, "Showing {} of {} entries", entries.len(), total);
    out
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::render;

    #[test]
    fn formats_each_block_kind() {
        let text = "## Summary\n\nPlain **key** text\n\n* a\n* b\n\n1. x\n2. y\n\n> quoted\n\n```\ncode line\n```";
        let out = format_blocks(&render(text), false);

        assert!(out.starts_with("Summary\n───────\n"));
        assert!(out.contains("Plain key text\n"));
        assert!(out.contains("  • a\n  • b\n"));
        assert!(out.contains("  1. x\n  2. y\n"));
        assert!(out.contains("  │ quoted\n"));
        assert!(out.contains("    code line\n"));
    }

    #[test]
    fn ordered_numbers_are_positional() {
        let out = format_blocks(&render("5. first\n9. second"), false);
        assert_eq!(out, "  1. first\n  2. second\n");
    }

    #[test]
    fn styled_bold_uses_ansi() {
        let out = format_blocks(&render("**x**"), true);
        assert!(out.contains("\u{1b}[1m"));
    }

    #[test]
    fn unstyled_has_no_ansi() {
        let out = format_blocks(&render("## H\n\n**x**"), false);
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn empty_blocks_format_to_nothing() {
        assert_eq!(format_blocks(&[], false), "");
    }

    #[test]
    fn format_date_shape() {
        let utc = DateTime::from_timestamp(1_717_000_000, 0).unwrap();
        let date = format_date(utc);
        assert!(date.ends_with(", 2024"));
    }

    #[test]
    fn history_empty_message() {
        assert_eq!(
            format_history(&[], None, 0),
            "Your analysis history will appear here.\n"
        );
    }

    #[test]
    fn history_no_results_message() {
        assert_eq!(
            format_history(&[], Some("zzz"), 3),
            "No results found for \"zzz\".\n"
        );
    }

    #[test]
    fn history_lists_entries() {
        let entry = HistoryEntry::new("Design thinking", "## Summary\nA method.\n## More");
        let out = format_history(&[&entry], None, 1);
        assert!(out.contains(&entry.id));
        assert!(out.contains("Design thinking"));
        assert!(out.contains("    A method."));
        assert!(out.contains("Showing 1 of 1"));
    }
}
