//! Invocation specification data types

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// One profiler argument: a bare switch or a flag with its value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flag {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Flag {
    #[must_use]
    pub fn switch(name: &'static str) -> Self {
        Self { name, value: None }
    }

    pub fn with_value(name: &'static str, value: impl Into<String>) -> Self {
        Self { name, value: Some(value.into()) }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {}", self.name, shell_quote(value)),
            None => f.write_str(self.name),
        }
    }
}

/// Canonical, ordered profiler invocation derived from [`jprof_common::Arguments`]
///
/// `interval` and `tmp_dir` drive the surrounding collection loop and are not
/// part of `flags`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvocationSpec {
    #[serde(serialize_with = "jprof_common::duration::serialize")]
    pub interval: Duration,
    pub tmp_dir: PathBuf,
    pub flags: Vec<Flag>,
}

impl InvocationSpec {
    /// Flatten the flags into argument strings, in order
    #[must_use]
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.flags.len() * 2);
        for flag in &self.flags {
            argv.push(flag.name.to_string());
            if let Some(ref value) = flag.value {
                argv.push(value.clone());
            }
        }
        argv
    }

    #[must_use]
    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.iter().any(|flag| flag.name == name)
    }

    /// Values of every occurrence of `name`, in order
    #[must_use]
    pub fn values_of(&self, name: &str) -> Vec<&str> {
        self.flags
            .iter()
            .filter(|flag| flag.name == name)
            .filter_map(|flag| flag.value.as_deref())
            .collect()
    }

    /// Value of the first occurrence of `name`
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.values_of(name).into_iter().next()
    }
}

impl fmt::Display for InvocationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for flag in &self.flags {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{flag}")?;
            first = false;
        }
        Ok(())
    }
}

/// Quote an argument for log output if it would not survive a shell split
pub fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg.chars().all(|c| c.is_ascii_alphanumeric() || "-_./:=,+@%*".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InvocationSpec {
        InvocationSpec {
            interval: Duration::from_secs(60),
            tmp_dir: PathBuf::from("/tmp"),
            flags: vec![
                Flag::with_value("-e", "itimer"),
                Flag::switch("--live"),
                Flag::with_value("-I", "com/acme/*"),
                Flag::with_value("-I", "java/util/*"),
            ],
        }
    }

    #[test]
    fn test_argv_flattening() {
        assert_eq!(
            sample().argv(),
            vec!["-e", "itimer", "--live", "-I", "com/acme/*", "-I", "java/util/*"]
        );
    }

    #[test]
    fn test_lookup_helpers() {
        let spec = sample();
        assert!(spec.has_flag("--live"));
        assert!(!spec.has_flag("--lock"));
        assert_eq!(spec.value_of("-e"), Some("itimer"));
        assert_eq!(spec.values_of("-I"), vec!["com/acme/*", "java/util/*"]);
        assert_eq!(spec.value_of("--live"), None);
    }

    #[test]
    fn test_display_quotes_spaces() {
        let spec = InvocationSpec {
            interval: Duration::from_secs(1),
            tmp_dir: PathBuf::from("/tmp"),
            flags: vec![Flag::with_value("--trace", "my.Class.run 50ms"), Flag::switch("-t")],
        };
        assert_eq!(spec.to_string(), "--trace 'my.Class.run 50ms' -t");
    }

    #[test]
    fn test_serializes_interval_as_literal() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["interval"], "60s");
        assert_eq!(json["flags"][1], serde_json::json!({"name": "--live"}));
        assert_eq!(json["flags"][0]["value"], "itimer");
    }
}
