//! Options Model and defaults
//!
//! [`Arguments`] mirrors the configuration block of the Java profiling
//! component. Each loader first materializes [`Arguments::default`] and then
//! overlays the fields present in the raw payload, so an omitted field keeps
//! its default rather than the zero value of its type.

use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::LoadError;

/// Default collection interval
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

/// Default CPU sample rate in Hz
pub const DEFAULT_SAMPLE_RATE: u32 = 100;

/// Default maximum Java stack depth
pub const DEFAULT_JSTACKDEPTH: u32 = 2048;

/// Sentinel for `target_cpu`: sample threads on every CPU
pub const NO_TARGET_CPU: i32 = -1;

/// Top-level component configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Arguments {
    /// Directory receiving the profiler's JFR output
    pub tmp_dir: PathBuf,

    pub profiling_config: ProfilingConfig,

    /// async-profiler distribution directory holding `bin/asprof`
    ///
    /// Undocumented; when unset the launcher is looked up on `PATH`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dist: Option<PathBuf>,
}

/// Every profiling knob, grouped as CPU, memory, lock and miscellaneous
///
/// Duration and size literals (`alloc`, `lock`, `wall`, ...) are passed to
/// the profiler verbatim; an empty string disables the feature.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfilingConfig {
    /// How often the surrounding collector rotates a recording
    #[serde(with = "crate::duration")]
    pub interval: Duration,

    // ========================================================================
    // CPU Profiling Options
    // ========================================================================
    /// Enable CPU profiling
    pub cpu: bool,
    /// `-e`: sampling event (`itimer`, `cpu` or `wall`)
    pub event: String,
    /// Samples per second, encoded as the `-i` interval in nanoseconds
    pub sample_rate: u32,
    /// `--wall`: wall clock profiling interval
    pub wall: String,
    /// `--all-user`: include only user-mode events
    pub all_user: bool,
    /// `-t`: profile threads separately
    pub per_thread: bool,
    /// `--filter`: profile only threads with the given ids
    pub filter: String,
    /// `--sched`: group threads by scheduling policy
    pub sched: bool,
    /// `--ttsp`: time-to-safepoint profiling
    pub ttsp: bool,
    /// `--begin`: auto-start profiling when this function is executed
    pub begin: String,
    /// `--end`: auto-stop profiling when this function is executed
    pub end: String,
    /// `--nostop`: keep profiling outside the `--begin`/`--end` window
    pub nostop: bool,
    /// `--proc`: process statistics collection interval
    pub proc: String,
    /// `--target-cpu`: sample only threads running on this CPU, `-1` for all
    pub target_cpu: i32,
    /// `--record-cpu`: record which CPU each sample was taken on
    pub record_cpu: bool,

    // ========================================================================
    // Memory Profiling Options
    // ========================================================================
    /// `--alloc`: allocation profiling interval
    pub alloc: String,
    /// `--live`: retain only objects that were not collected
    pub live: bool,
    /// `--nativemem`: native memory allocation profiling interval
    pub native_mem: String,
    /// `--nofree`: do not record free calls in native memory profiling
    pub no_free: bool,

    // ========================================================================
    // Lock Profiling Options
    // ========================================================================
    /// `--lock`: Java lock contention threshold
    pub lock: String,
    /// `--nativelock`: pthread lock contention threshold
    pub native_lock: String,

    // ========================================================================
    // Miscellaneous Options
    // ========================================================================
    /// `--all`: cpu, wall, alloc, live, nativemem and lock at once
    pub all: bool,
    /// `-L`: profiler log level
    pub log_level: String,
    /// Suppress profiler output
    pub quiet: bool,
    /// `-I`: include only stacks matching these patterns
    pub include: Vec<String>,
    /// `-X`: exclude stacks matching these patterns
    pub exclude: Vec<String>,
    /// `-j`: maximum Java stack depth
    pub jstackdepth: u32,
    /// `--cstack`: C stack walking mode
    pub cstack: String,
    /// `-F`: stack walking features (`stats`, `vtable`, `comptask`, `pcaddr`)
    pub features: Vec<String>,
    /// `--trace`: Java methods to trace, with optional latency threshold
    pub trace: Vec<String>,
    /// `--jfrsync`: synchronize with a Java Flight Recording configuration
    pub jfrsync: String,
    /// `--signal`: alternative signal for profiling
    pub signal: String,
    /// `--clock`: clock source for JFR timestamps
    pub clock: String,
}

/// Fresh default configuration, equivalent to [`Arguments::default`]
#[must_use]
pub fn default_arguments() -> Arguments {
    Arguments::default()
}

impl Default for Arguments {
    fn default() -> Self {
        Self {
            tmp_dir: std::env::temp_dir(),
            profiling_config: ProfilingConfig::default(),
            dist: None,
        }
    }
}

impl Default for ProfilingConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,

            cpu: true,
            event: "itimer".to_string(),
            sample_rate: DEFAULT_SAMPLE_RATE,
            wall: String::new(),
            all_user: false,
            per_thread: false,
            filter: String::new(),
            sched: false,
            ttsp: false,
            begin: String::new(),
            end: String::new(),
            nostop: false,
            proc: String::new(),
            target_cpu: NO_TARGET_CPU,
            record_cpu: false,

            alloc: "512k".to_string(),
            live: false,
            native_mem: String::new(),
            no_free: false,

            lock: "10ms".to_string(),
            native_lock: String::new(),

            all: false,
            log_level: "INFO".to_string(),
            quiet: false,
            include: Vec::new(),
            exclude: Vec::new(),
            jstackdepth: DEFAULT_JSTACKDEPTH,
            cstack: String::new(),
            features: Vec::new(),
            trace: Vec::new(),
            jfrsync: String::new(),
            signal: String::new(),
            clock: "tsc".to_string(),
        }
    }
}

impl Arguments {
    /// Load from a JSON document; blank input yields the defaults
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Json`] on malformed JSON, unknown keys or
    /// mistyped values.
    pub fn from_json_str(raw: &str) -> Result<Self, LoadError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Load from an already parsed JSON value; `null` yields the defaults
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Json`] if the value does not describe `Arguments`.
    pub fn from_value(raw: serde_json::Value) -> Result<Self, LoadError> {
        if raw.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(raw)?)
    }

    /// Load from a TOML document with a `[profiling_config]` table
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Toml`] on malformed TOML, unknown keys or
    /// mistyped values.
    pub fn from_toml_str(raw: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(raw)?)
    }

    /// Load a `.json` or `.toml` file, chosen by extension
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, has another extension, or does
    /// not parse.
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let loader: fn(&str) -> Result<Self, LoadError> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("toml") => Self::from_toml_str,
            _ => return Err(LoadError::UnsupportedFormat(path.to_path_buf())),
        };

        let raw = std::fs::read_to_string(path)
            .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
        debug!("Loaded {} bytes of configuration from {}", raw.len(), path.display());
        loader(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = default_arguments();
        let cfg = &args.profiling_config;
        assert_eq!(args.tmp_dir, std::env::temp_dir());
        assert_eq!(cfg.interval, Duration::from_secs(60));
        assert!(cfg.cpu);
        assert_eq!(cfg.event, "itimer");
        assert_eq!(cfg.sample_rate, 100);
        assert_eq!(cfg.lock, "10ms");
        assert_eq!(cfg.alloc, "512k");
        assert_eq!(cfg.log_level, "INFO");
        assert_eq!(cfg.clock, "tsc");
        assert_eq!(cfg.target_cpu, NO_TARGET_CPU);
        assert_eq!(cfg.jstackdepth, 2048);
        assert!(cfg.include.is_empty() && cfg.trace.is_empty());
        assert!(!cfg.all);
    }

    #[test]
    fn test_empty_payload_is_default() {
        assert_eq!(Arguments::from_json_str("").unwrap(), Arguments::default());
        assert_eq!(Arguments::from_json_str("{}").unwrap(), Arguments::default());
        assert_eq!(Arguments::from_toml_str("").unwrap(), Arguments::default());
        assert_eq!(Arguments::from_value(serde_json::Value::Null).unwrap(), Arguments::default());
    }

    #[test]
    fn test_overlay_keeps_unsupplied_defaults() {
        let args = Arguments::from_json_str(
            r#"{"profiling_config": {"event": "wall", "wall": "10ms", "cpu": false}}"#,
        )
        .unwrap();
        let cfg = &args.profiling_config;
        assert_eq!(cfg.event, "wall");
        assert_eq!(cfg.wall, "10ms");
        assert!(!cfg.cpu);
        assert_eq!(cfg.target_cpu, -1);
        assert_eq!(cfg.sample_rate, 100);
        assert_eq!(cfg.lock, "10ms");
    }

    #[test]
    fn test_toml_matches_json() {
        let from_toml = Arguments::from_toml_str(
            r#"
            tmp_dir = "/var/lib/jprof"

            [profiling_config]
            interval = "30s"
            event = "cpu"
            include = ["com/acme/*", "org/app/*"]
            target_cpu = 3
            "#,
        )
        .unwrap();
        let from_json = Arguments::from_json_str(
            r#"{
                "tmp_dir": "/var/lib/jprof",
                "profiling_config": {
                    "interval": 30,
                    "event": "cpu",
                    "include": ["com/acme/*", "org/app/*"],
                    "target_cpu": 3
                }
            }"#,
        )
        .unwrap();
        assert_eq!(from_toml, from_json);
        assert_eq!(from_toml.profiling_config.interval, Duration::from_secs(30));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Arguments::from_json_str(r#"{"profiling_config": {"evnt": "cpu"}}"#).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
        assert!(err.to_string().contains("evnt"));
    }

    #[test]
    fn test_negative_sample_rate_rejected() {
        let err = Arguments::from_json_str(r#"{"profiling_config": {"sample_rate": -5}}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_invalid_event_survives_loading() {
        let args = Arguments::from_json_str(r#"{"profiling_config": {"event": "alloc"}}"#).unwrap();
        assert_eq!(args.profiling_config.event, "alloc");
    }

    #[test]
    fn test_from_file_extension() {
        let err = Arguments::from_file(Path::new("/nonexistent/jprof.yaml")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(_)));

        let err = Arguments::from_file(Path::new("/nonexistent/jprof.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
