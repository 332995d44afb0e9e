//! `eduframe render` command implementation.

use crate::cli::display::format_blocks;
use crate::cli::styled_stdout;
use crate::error::Result;
use crate::markdown::render;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Run the render command.
///
/// Renders markdown from a file, or from stdin when no path is given.
///
/// # Errors
///
/// Returns an error if the input cannot be read.
pub fn run(path: Option<&Path>) -> Result<()> {
    let text = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    print!("{}", format_blocks(&render(&text), styled_stdout()));
    Ok(())
}
