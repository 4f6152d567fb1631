//! # jprof - async-profiler Invocation Synthesizer
//!
//! jprof turns the configuration of a Java continuous-profiling component into
//! the exact argument list handed to async-profiler's `asprof` launcher. It
//! does not attach to processes or read profiles; the collector that runs
//! `asprof` consumes what this crate produces.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────┐
//! │  raw config payload  │  JSON / TOML / serde_json::Value
//! └──────────┬───────────┘
//!            ▼
//! ┌──────────────────────┐
//! │   jprof-common       │  Arguments::default() + overlay
//! │   (Options Model)    │
//! └──────────┬───────────┘
//!            ▼
//! ┌──────────────────────┐
//! │   validation         │  validate / validate_strict
//! └──────────┬───────────┘
//!            ▼
//! ┌──────────────────────┐
//! │   invocation         │  EnabledSet (`all` expansion) → ordered flags
//! └──────────┬───────────┘
//!            ▼
//!      InvocationSpec  ──▶  external asprof launcher
//! ```
//!
//! ## Module Structure
//!
//! - [`validation`]: The narrow `event` check, plus opt-in strict checks
//! - [`invocation`]: Effective feature set, flag encoding, `asprof` command lines
//! - [`domain`]: [`ValidationError`](domain::ValidationError)
//! - [`cli`]: Command-line argument parsing and configuration file loading
//!
//! ## Typical Usage
//!
//! ```
//! use jprof::invocation::synthesize;
//! use jprof::validation::validate;
//! use jprof_common::Arguments;
//!
//! let args = Arguments::from_json_str(r#"{"profiling_config": {"target_cpu": 3}}"#).unwrap();
//! validate(&args).unwrap();
//! let spec = synthesize(&args);
//! assert_eq!(spec.value_of("--target-cpu"), Some("3"));
//! ```

pub mod cli;
pub mod domain;
pub mod invocation;
pub mod validation;
