//! Block classification.
//!
//! Text is split into chunks on blank lines, and each chunk is matched
//! against [`RULES`] in order. The first rule whose predicate accepts the
//! chunk builds its block, so a chunk is never two kinds at once.

use super::block::ContentBlock;
use super::inline::parse_inline;
use regex::Regex;
use std::sync::LazyLock;

/// A line break followed by one or more whitespace-only lines.
static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[^\S\n]*\n)+").expect("blank line pattern is valid"));

/// ASCII digits only; other Unicode digits do not start a list.
static ORDERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s").expect("ordered marker pattern is valid"));

static LANGUAGE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+\n").expect("language tag pattern is valid"));

const FENCE: &str = "```";

/// A predicate paired with the block it builds.
struct Rule {
    matches: fn(&str) -> bool,
    build: fn(&str) -> ContentBlock,
}

/// Classification precedence, first match wins.
const RULES: [Rule; 7] = [
    Rule {
        matches: is_code_block,
        build: code_block,
    },
    Rule {
        matches: is_blockquote,
        build: blockquote,
    },
    Rule {
        matches: is_heading2,
        build: heading2,
    },
    Rule {
        matches: is_heading3,
        build: heading3,
    },
    Rule {
        matches: is_ordered_list,
        build: ordered_list,
    },
    Rule {
        matches: is_bullet_list,
        build: bullet_list,
    },
    Rule {
        matches: is_paragraph,
        build: paragraph,
    },
];

/// Render markdown text into an ordered sequence of blocks.
///
/// Never fails: anything unrecognized degrades to a paragraph and empty
/// chunks are skipped, so `""` yields no blocks.
#[must_use]
pub fn render(text: &str) -> Vec<ContentBlock> {
    let normalized = normalize_line_endings(text);
    BLANK_LINES
        .split(&normalized)
        .filter_map(classify)
        .collect()
}

/// Classify a single chunk, or `None` if it is blank.
#[must_use]
pub fn classify(chunk: &str) -> Option<ContentBlock> {
    let chunk = chunk.trim();
    RULES
        .iter()
        .find(|rule| (rule.matches)(chunk))
        .map(|rule| (rule.build)(chunk))
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn is_code_block(chunk: &str) -> bool {
    chunk.starts_with(FENCE) && chunk.ends_with(FENCE)
}

fn code_block(chunk: &str) -> ContentBlock {
    // A lone fence (or two overlapping ones) has no payload
    let payload = if chunk.len() >= FENCE.len() * 2 {
        &chunk[FENCE.len()..chunk.len() - FENCE.len()]
    } else {
        ""
    };
    let payload = LANGUAGE_TAG.replace(payload, "");
    ContentBlock::CodeBlock(payload.trim_matches('\n').to_string())
}

fn is_blockquote(chunk: &str) -> bool {
    chunk.starts_with("> ")
}

fn blockquote(chunk: &str) -> ContentBlock {
    let lines = chunk
        .split('\n')
        .map(|line| {
            let line = line.strip_prefix('>').unwrap_or(line);
            parse_inline(line.strip_prefix(' ').unwrap_or(line))
        })
        .collect();
    ContentBlock::Blockquote(lines)
}

fn is_heading2(chunk: &str) -> bool {
    chunk.starts_with("## ")
}

fn heading2(chunk: &str) -> ContentBlock {
    ContentBlock::Heading {
        level: 2,
        text: parse_inline(&chunk[3..]),
    }
}

fn is_heading3(chunk: &str) -> bool {
    chunk.starts_with("### ")
}

fn heading3(chunk: &str) -> ContentBlock {
    ContentBlock::Heading {
        level: 3,
        text: parse_inline(&chunk[4..]),
    }
}

fn is_ordered_list(chunk: &str) -> bool {
    ORDERED_MARKER.is_match(chunk)
}

fn ordered_list(chunk: &str) -> ContentBlock {
    let items = list_lines(chunk)
        .map(|line| parse_inline(&ORDERED_MARKER.replace(line, "")))
        .collect();
    ContentBlock::OrderedList(items)
}

fn is_bullet_list(chunk: &str) -> bool {
    chunk.starts_with("* ") || chunk.starts_with("- ")
}

fn bullet_list(chunk: &str) -> ContentBlock {
    let items = list_lines(chunk)
        .map(|line| parse_inline(skip_chars(line, 2)))
        .collect();
    ContentBlock::BulletList(items)
}

fn is_paragraph(chunk: &str) -> bool {
    !chunk.is_empty()
}

fn paragraph(chunk: &str) -> ContentBlock {
    ContentBlock::Paragraph(parse_inline(chunk))
}

/// Non-blank lines of a list chunk. Markers are handled per line.
fn list_lines(chunk: &str) -> impl Iterator<Item = &str> {
    chunk.split('\n').filter(|line| !line.trim().is_empty())
}

fn skip_chars(line: &str, n: usize) -> &str {
    line.char_indices().nth(n).map_or("", |(i, _)| &line[i..])
}
