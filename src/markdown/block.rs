//! Rendered content types.

/// A plain or bold text segment within a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineRun {
    /// Unstyled text.
    Plain(String),

    /// Text that was wrapped in `**`.
    Bold(String),
}

impl InlineRun {
    /// The text carried by this run, without markers.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Bold(text) => text,
        }
    }
}

/// A sequence of inline runs.
pub type Inline = Vec<InlineRun>;

/// One structural unit of rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    /// `## ` or `### ` heading.
    Heading {
        /// Heading level (2 or 3).
        level: u8,

        /// Heading text.
        text: Inline,
    },

    /// Any chunk not matching another block kind.
    Paragraph(Inline),

    /// `* ` or `- ` list.
    BulletList(Vec<Inline>),

    /// `1. ` list. Numbering is positional.
    OrderedList(Vec<Inline>),

    /// `> ` quote, one inline sequence per source line.
    Blockquote(Vec<Inline>),

    /// Fenced code, kept verbatim.
    CodeBlock(String),
}

impl ContentBlock {
    /// Short name of the block kind, mostly for logs and tests.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Heading { .. } => "heading",
            Self::Paragraph(_) => "paragraph",
            Self::BulletList(_) => "bullet_list",
            Self::OrderedList(_) => "ordered_list",
            Self::Blockquote(_) => "blockquote",
            Self::CodeBlock(_) => "code_block",
        }
    }
}

/// Concatenate the text of a run sequence, dropping styling.
#[must_use]
pub fn plain_text(runs: &[InlineRun]) -> String {
    runs.iter().map(InlineRun::text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_joins_runs() {
        let runs = vec![
            InlineRun::Bold("Key".to_string()),
            InlineRun::Plain(" term".to_string()),
        ];
        assert_eq!(plain_text(&runs), "Key term");
    }

    #[test]
    fn kind_names() {
        assert_eq!(ContentBlock::CodeBlock(String::new()).kind(), "code_block");
        assert_eq!(ContentBlock::Paragraph(Vec::new()).kind(), "paragraph");
    }
}
