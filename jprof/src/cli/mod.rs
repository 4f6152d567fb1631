//! Command-line interface: argument parsing and configuration loading

mod args;

pub use args::{Args, OutputFormat};

use anyhow::{Context, Result};
use jprof_common::Arguments;
use log::info;
use std::path::Path;

use crate::invocation::shell_quote;

/// Load the configuration file, or the defaults when no file is given
///
/// # Errors
///
/// Fails when the file cannot be read or parsed.
pub fn load_options(path: Option<&Path>) -> Result<Arguments> {
    match path {
        Some(path) => Arguments::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => {
            info!("No configuration file given, using defaults");
            Ok(Arguments::default())
        }
    }
}

/// Render `program argv...` as a single shell-safe line
#[must_use]
pub fn command_line(program: &Path, argv: &[String]) -> String {
    let mut line = shell_quote(&program.to_string_lossy());
    for arg in argv {
        line.push(' ');
        line.push_str(&shell_quote(arg));
    }
    line
}
