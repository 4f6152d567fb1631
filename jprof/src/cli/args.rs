//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "jprof",
    about = "Validate Java profiling options and print the async-profiler invocation",
    after_help = "\
EXAMPLES:
    jprof                                    Invocation for the default options
    jprof profiling.toml --strict            Strictly validate a config file
    jprof profiling.json --pid 1234          Full asprof start command for PID 1234
    jprof profiling.toml --check             Validate only"
)]
pub struct Args {
    /// Configuration file (.json or .toml); defaults apply when omitted
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the asprof start and stop commands for this process ID
    #[arg(short, long)]
    pub pid: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also check enumerations, ranges, literals and option dependencies
    #[arg(long)]
    pub strict: bool,

    /// Validate only, print nothing but the verdict
    #[arg(long)]
    pub check: bool,

    /// Print the effective configuration with defaults merged in
    #[arg(long, conflicts_with_all = ["check", "pid"])]
    pub show_config: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Shell-style command line
    Text,
    /// JSON document
    Json,
}
