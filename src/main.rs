//! eduframe CLI - structured academic analysis from the terminal.

use clap::{Parser, Subcommand};
use eduframe::cli;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Get the version string.
///
/// - Release builds (on a git tag): "0.1.0"
/// - Development builds: "0.1.0-dev (abc1234)"
fn version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("EDUFRAME_GIT_HASH");
    const IS_RELEASE: &str = env!("EDUFRAME_IS_RELEASE");

    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" {
            VERSION.to_string()
        } else {
            format!("{VERSION}-dev ({GIT_HASH})")
        }
    })
}

#[derive(Parser)]
#[command(name = "eduframe")]
#[command(author, version = version(), about = "Academic topic analysis with saved history", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a topic and save the result to history.
    Analyze {
        /// Topic to analyze. Multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        topic: Vec<String>,
    },

    /// List saved analyses, newest first.
    History {
        /// Case-insensitive filter on the topic.
        #[arg(short, long)]
        search: Option<String>,

        /// Maximum number of entries to show, at least 1. Defaults to 20.
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        limit: Option<u64>,
    },

    /// Print a saved analysis.
    Show {
        /// Entry ID.
        id: String,
    },

    /// Delete a saved analysis.
    Delete {
        /// Entry ID.
        id: String,
    },

    /// Delete every saved analysis.
    Clear,

    /// Render markdown from a file or stdin.
    Render {
        /// Input file. Reads stdin when omitted.
        file: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze { topic } => cli::analyze::run(&topic.join(" ")).await,
        Commands::History { search, limit } => cli::history::run(
            search.as_deref(),
            limit.map(|n| usize::try_from(n).unwrap_or(usize::MAX)),
        ),
        Commands::Show { id } => cli::show::run(&id),
        Commands::Delete { id } => cli::delete::run(&id),
        Commands::Clear => cli::clear::run(),
        Commands::Render { file } => cli::render::run(file.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("eduframe: error: {e}");
            ExitCode::FAILURE
        }
    }
}
