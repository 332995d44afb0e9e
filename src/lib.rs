//! eduframe - Academic topic breakdown assistant.
//!
//! Sends a topic to a hosted model, renders the structured markdown answer
//! and keeps a local, searchable history of past analyses.

pub mod analysis;
pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod history;
pub mod markdown;
pub mod storage;
pub mod summary;

pub use analysis::Analyzer;
pub use config::Config;
pub use error::{Error, Result};
