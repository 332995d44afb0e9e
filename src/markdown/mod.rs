//! Renderer for the markdown subset used in analysis responses.
//!
//! Supported: `##`/`###` headings, paragraphs, `*`/`-` bullet lists,
//! numbered lists, `>` quotes, fenced code and `**bold**` runs. Nothing
//! else is recognized; unknown syntax renders as plain text.

pub mod block;
pub mod inline;
pub mod parser;

pub use block::{ContentBlock, Inline, InlineRun, plain_text};
pub use inline::parse_inline;
pub use parser::{classify, render};
