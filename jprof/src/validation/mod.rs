//! Configuration validation
//!
//! [`validate`] is the contract every loaded configuration goes through and
//! only enforces the sampling event. [`validate_strict`] is opt-in and adds
//! enumeration, range, literal-shape and dependency checks. Both stop at the
//! first problem found.

use jprof_common::duration::format_interval;
use jprof_common::{Arguments, SamplingEvent, CLOCK_SOURCES, CSTACK_MODES, LOG_LEVELS};
use log::warn;

use crate::domain::ValidationError;
use crate::invocation::EnabledSet;

/// Units accepted after the number in a duration or size literal
const LITERAL_UNITS: [&str; 13] = ["", "ns", "us", "ms", "s", "m", "h", "b", "k", "K", "M", "g", "G"];

/// Check that `event` is one of `itimer`, `cpu` or `wall`
///
/// # Errors
///
/// Returns [`ValidationError::NotAllowed`] naming the offending event.
pub fn validate(args: &Arguments) -> Result<(), ValidationError> {
    let event = &args.profiling_config.event;
    if event.parse::<SamplingEvent>().is_err() {
        return Err(ValidationError::NotAllowed {
            field: "event",
            value: event.clone(),
            allowed: &SamplingEvent::NAMES,
        });
    }
    Ok(())
}

/// [`validate`] plus the checks a stricter deployment may want
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate_strict(args: &Arguments) -> Result<(), ValidationError> {
    validate(args)?;

    let cfg = &args.profiling_config;
    let enabled = EnabledSet::resolve(cfg);

    // Enumerations; empty means "profiler default"
    check_one_of("log_level", &cfg.log_level, &LOG_LEVELS, true)?;
    check_one_of("cstack", &cfg.cstack, &CSTACK_MODES, false)?;
    check_one_of("clock", &cfg.clock, &CLOCK_SOURCES, false)?;

    // Numeric ranges
    if cfg.interval.is_zero() {
        return Err(ValidationError::OutOfRange {
            field: "interval",
            value: format_interval(cfg.interval),
            expected: "greater than zero",
        });
    }
    if enabled.cpu && cfg.sample_rate == 0 {
        return Err(ValidationError::OutOfRange {
            field: "sample_rate",
            value: cfg.sample_rate.to_string(),
            expected: "greater than 0 while CPU profiling is enabled",
        });
    }
    if cfg.target_cpu < -1 {
        return Err(ValidationError::OutOfRange {
            field: "target_cpu",
            value: cfg.target_cpu.to_string(),
            expected: "-1 (any CPU) or a CPU index",
        });
    }
    if cfg.jstackdepth == 0 {
        return Err(ValidationError::OutOfRange {
            field: "jstackdepth",
            value: cfg.jstackdepth.to_string(),
            expected: "greater than 0",
        });
    }

    // Duration and size literals
    for (field, value) in [
        ("wall", &cfg.wall),
        ("proc", &cfg.proc),
        ("alloc", &cfg.alloc),
        ("native_mem", &cfg.native_mem),
        ("lock", &cfg.lock),
        ("native_lock", &cfg.native_lock),
    ] {
        if !value.is_empty() && !is_profiler_literal(value) {
            return Err(ValidationError::MalformedLiteral { field, value: value.clone() });
        }
    }

    // Options that only mean something next to another one
    if cfg.live && !enabled.alloc {
        return Err(ValidationError::Requires {
            field: "live",
            value: cfg.live.to_string(),
            requires: "allocation profiling (alloc or all)",
        });
    }
    if cfg.no_free && !enabled.native_mem {
        return Err(ValidationError::Requires {
            field: "no_free",
            value: cfg.no_free.to_string(),
            requires: "native memory profiling (native_mem or all)",
        });
    }
    if cfg.nostop && cfg.begin.is_empty() && cfg.end.is_empty() {
        return Err(ValidationError::Requires {
            field: "nostop",
            value: cfg.nostop.to_string(),
            requires: "begin or end",
        });
    }

    if !enabled.cpu && cfg.event != SamplingEvent::Itimer.as_str() {
        warn!("event '{}' has no effect while CPU profiling is disabled", cfg.event);
    }

    Ok(())
}

fn check_one_of(
    field: &'static str,
    value: &str,
    allowed: &'static [&'static str],
    ignore_case: bool,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    let known = allowed
        .iter()
        .any(|name| if ignore_case { name.eq_ignore_ascii_case(value) } else { *name == value });
    if known {
        Ok(())
    } else {
        Err(ValidationError::NotAllowed { field, value: value.to_string(), allowed })
    }
}

/// `10ms`, `512k`, `1.5s`, `2048`
fn is_profiler_literal(value: &str) -> bool {
    let split = value.find(|c: char| !(c.is_ascii_digit() || c == '.')).unwrap_or(value.len());
    let (number, unit) = value.split_at(split);

    let mut parts = number.split('.');
    let whole_ok = parts.next().is_some_and(|whole| !whole.is_empty());
    let fraction_ok = parts.next().is_none_or(|fraction| !fraction.is_empty());
    let no_more = parts.next().is_none();

    whole_ok && fraction_ok && no_more && LITERAL_UNITS.contains(&unit)
}
