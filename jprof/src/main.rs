//! # jprof - Main Entry Point
//!
//! Loads a profiling configuration, validates it and prints the resulting
//! async-profiler invocation:
//! - **Flags** (default): the ordered profiler flags on one line
//! - **Command** (`--pid <PID>`): full `asprof` start and stop commands
//! - **Check** (`--check`): validation verdict only

use anyhow::{Context, Result};
use clap::Parser;
use jprof::cli::{command_line, load_options, Args, OutputFormat};
use jprof::domain::ValidationError;
use jprof::invocation::{asprof_binary, synthesize};
use jprof::validation::{validate, validate_strict};
use jprof_common::LoadError;
use log::info;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_DATAERR: i32 = 65;
const EXIT_NOINPUT: i32 = 66;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let code = exit_code_for(&e);
            eprintln!("error: {e:#}");
            code
        }
    });
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ValidationError>().is_some() {
        return EXIT_DATAERR;
    }
    match err.downcast_ref::<LoadError>() {
        Some(LoadError::Io { .. }) => EXIT_NOINPUT,
        Some(_) => EXIT_DATAERR,
        None => EXIT_ERROR,
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let options = load_options(args.config.as_deref())?;

    if args.strict {
        validate_strict(&options)?;
    } else {
        validate(&options)?;
    }

    if args.check {
        if !args.quiet {
            println!("ok: configuration is valid");
        }
        return Ok(());
    }

    if args.show_config {
        let rendered = match args.format {
            OutputFormat::Json => serde_json::to_string_pretty(&options)?,
            OutputFormat::Text => format!("{options:#?}"),
        };
        println!("{rendered}");
        return Ok(());
    }

    let spec = synthesize(&options);
    info!("{} profiler flags, interval {:?}", spec.flags.len(), spec.interval);

    match (args.pid, args.format) {
        (None, OutputFormat::Text) => println!("{spec}"),
        (None, OutputFormat::Json) => {
            println!("{}", serde_json::to_string_pretty(&spec).context("Failed to render invocation")?);
        }
        (Some(pid), OutputFormat::Text) => {
            let binary = asprof_binary(&options);
            if !args.quiet {
                println!("# jfr: {}", spec.jfr_path(pid).display());
            }
            println!("{}", command_line(&binary, &spec.start_argv(pid)));
            println!("{}", command_line(&binary, &spec.stop_argv(pid)));
        }
        (Some(pid), OutputFormat::Json) => {
            let document = serde_json::json!({
                "binary": asprof_binary(&options),
                "jfr": spec.jfr_path(pid),
                "start": spec.start_argv(pid),
                "stop": spec.stop_argv(pid),
                "invocation": spec,
            });
            println!("{}", serde_json::to_string_pretty(&document).context("Failed to render invocation")?);
        }
    }

    Ok(())
}
