//! Structured error types for jprof
//!
//! Using thiserror for automatic Display implementation. Every validation
//! message starts with `invalid <field>: '<value>'.` so that callers can
//! match on the text.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid {field}: '{value}'. {} must be one of {}", label(.field), one_of(.allowed))]
    NotAllowed { field: &'static str, value: String, allowed: &'static [&'static str] },

    #[error("invalid {field}: '{value}'. {} must be {expected}", label(.field))]
    OutOfRange { field: &'static str, value: String, expected: &'static str },

    #[error("invalid {field}: '{value}'. {} must be empty or a number with an optional unit, like '10ms' or '512k'", label(.field))]
    MalformedLiteral { field: &'static str, value: String },

    #[error("invalid {field}: '{value}'. {} requires {requires}", label(.field))]
    Requires { field: &'static str, value: String, requires: &'static str },
}

impl ValidationError {
    /// Name of the offending option
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NotAllowed { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::MalformedLiteral { field, .. }
            | ValidationError::Requires { field, .. } => *field,
        }
    }

    /// The rejected value, rendered as text
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            ValidationError::NotAllowed { value, .. }
            | ValidationError::OutOfRange { value, .. }
            | ValidationError::MalformedLiteral { value, .. }
            | ValidationError::Requires { value, .. } => value,
        }
    }
}

/// `native_mem` -> `Native mem`
fn label(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `["a", "b", "c"]` -> `'a', 'b' or 'c'`
fn one_of(allowed: &[&str]) -> String {
    let quoted: Vec<String> = allowed.iter().map(|name| format!("'{name}'")).collect();
    match quoted.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {last}", rest.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_error_display() {
        let err = ValidationError::NotAllowed {
            field: "event",
            value: "alloc".to_string(),
            allowed: &["itimer", "cpu", "wall"],
        };
        assert_eq!(
            err.to_string(),
            "invalid event: 'alloc'. Event must be one of 'itimer', 'cpu' or 'wall'"
        );
        assert_eq!(err.field(), "event");
        assert_eq!(err.value(), "alloc");
    }

    #[test]
    fn test_label_formatting() {
        assert_eq!(label("native_mem"), "Native mem");
        assert_eq!(label("event"), "Event");
        assert_eq!(one_of(&["tsc"]), "'tsc'");
        assert_eq!(one_of(&["tsc", "monotonic"]), "'tsc' or 'monotonic'");
    }

    #[test]
    fn test_requires_display() {
        let err = ValidationError::Requires {
            field: "live",
            value: "true".to_string(),
            requires: "allocation profiling (alloc or all)",
        };
        assert!(err.to_string().starts_with("invalid live: 'true'."));
        assert!(err.to_string().contains("requires allocation profiling"));
    }
}
