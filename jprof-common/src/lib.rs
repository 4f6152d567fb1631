//! # Options Model for async-profiler driven Java profiling
//!
//! Declares every option understood by the `jprof` invocation synthesizer,
//! together with its default value. This crate owns storage and defaulting
//! only; validation and the encoding into `asprof` arguments live in the
//! `jprof` crate.
//!
//! ## Key Types
//!
//! - [`Arguments`] - Top-level component configuration (`tmp_dir`, `dist`, profiling block)
//! - [`ProfilingConfig`] - Flat record of CPU, memory, lock and miscellaneous knobs
//! - [`SamplingEvent`] - The three sampling events accepted for `event`
//! - [`LoadError`] - Failure to turn a raw payload into [`Arguments`]
//!
//! ## Loading
//!
//! ```
//! use jprof_common::Arguments;
//!
//! let args = Arguments::from_json_str(r#"{"profiling_config": {"event": "wall"}}"#).unwrap();
//! assert_eq!(args.profiling_config.event, "wall");
//! // Omitted fields keep their defaults, not the zero value of their type
//! assert_eq!(args.profiling_config.target_cpu, -1);
//! ```

pub mod duration;
pub mod error;
pub mod options;
pub mod types;

pub use error::LoadError;
pub use options::{default_arguments, Arguments, ProfilingConfig};
pub use types::{SamplingEvent, CLOCK_SOURCES, CSTACK_MODES, LOG_LEVELS};
