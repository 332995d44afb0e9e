//! `eduframe analyze` command implementation.

use crate::analysis::Analyzer;
use crate::cli::display::format_blocks;
use crate::cli::{open_history, styled_stdout};
use crate::completion::GeminiClient;
use crate::config::load_config;
use crate::error::Result;
use crate::markdown::render;
use tracing::info;

/// Run the analyze command.
///
/// Sends the topic to the model, prints the rendered analysis and
/// records it in history.
///
/// # Errors
///
/// Returns an error if the topic is blank, the config cannot be loaded,
/// or the completion request fails.
pub async fn run(topic: &str) -> Result<()> {
    let config = load_config()?;
    let history = open_history(&config)?;
    let client = GeminiClient::new(&config.model);
    info!(model = %config.model.model, "analyzing topic");

    let mut analyzer = Analyzer::new(client, history);
    let id = analyzer.analyze(topic).await?;

    print!("{}", format_blocks(&render(analyzer.response()), styled_stdout()));
    println!("\nSaved to history as {id}");
    Ok(())
}
