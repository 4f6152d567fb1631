//! `asprof` command lines built around an invocation
//!
//! The collection loop that runs these commands lives outside this crate.
//! It starts a recording into a JFR file under `tmp_dir`, lets it run for
//! one interval, then stops it and ships the file.

use jprof_common::Arguments;
use std::path::PathBuf;

use super::spec::InvocationSpec;

/// Launcher name looked up on `PATH` when no distribution is configured
pub const ASPROF_BINARY: &str = "asprof";

/// Path of the `asprof` launcher for this configuration
#[must_use]
pub fn asprof_binary(args: &Arguments) -> PathBuf {
    match args.dist {
        Some(ref dist) => dist.join("bin").join(ASPROF_BINARY),
        None => PathBuf::from(ASPROF_BINARY),
    }
}

impl InvocationSpec {
    /// JFR output file for a recording of `pid` started by this process
    #[must_use]
    pub fn jfr_path(&self, pid: u32) -> PathBuf {
        self.tmp_dir.join(format!("asprof-{}-{pid}.jfr", std::process::id()))
    }

    /// Arguments that start a recording of `pid`
    ///
    /// `--timeout` stops the recording by itself if the collector never
    /// issues the matching stop.
    #[must_use]
    pub fn start_argv(&self, pid: u32) -> Vec<String> {
        let mut argv = vec![
            "-f".to_string(),
            self.jfr_path(pid).to_string_lossy().into_owned(),
            "-o".to_string(),
            "jfr".to_string(),
        ];
        argv.extend(self.argv());
        argv.push("start".to_string());
        argv.push("--timeout".to_string());
        argv.push(self.interval.as_secs().max(1).to_string());
        argv.push(pid.to_string());
        argv
    }

    /// Arguments that stop the recording of `pid` and flush the JFR file
    #[must_use]
    pub fn stop_argv(&self, pid: u32) -> Vec<String> {
        vec![
            "stop".to_string(),
            "-o".to_string(),
            "jfr".to_string(),
            "-f".to_string(),
            self.jfr_path(pid).to_string_lossy().into_owned(),
            pid.to_string(),
        ]
    }
}
