//! Enumerated option values
//!
//! Enumerated fields are stored as plain strings in [`crate::ProfilingConfig`]
//! so that a bad value survives loading and can be reported by the validator
//! with the offending text. These tables are the allowed sets.

use std::fmt;
use std::str::FromStr;

/// Sampling event used for CPU profiling (`-e`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplingEvent {
    /// `setitimer(ITIMER_PROF)` based sampling, works without `perf_events`
    Itimer,
    /// `perf_events` hardware/software CPU clock
    Cpu,
    /// Wall-clock sampling of all threads regardless of state
    Wall,
}

impl SamplingEvent {
    /// Accepted spellings, in the order used by error messages
    pub const NAMES: [&'static str; 3] = ["itimer", "cpu", "wall"];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SamplingEvent::Itimer => "itimer",
            SamplingEvent::Cpu => "cpu",
            SamplingEvent::Wall => "wall",
        }
    }
}

impl fmt::Display for SamplingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known sampling event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEvent(pub String);

impl FromStr for SamplingEvent {
    type Err = UnknownEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Case-sensitive: the profiler itself only accepts lowercase names
        match s {
            "itimer" => Ok(SamplingEvent::Itimer),
            "cpu" => Ok(SamplingEvent::Cpu),
            "wall" => Ok(SamplingEvent::Wall),
            other => Err(UnknownEvent(other.to_string())),
        }
    }
}

/// Profiler log levels (`-L`), matched case-insensitively
pub const LOG_LEVELS: [&str; 6] = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR", "NONE"];

/// C stack walking modes (`--cstack`)
pub const CSTACK_MODES: [&str; 6] = ["fp", "dwarf", "lbr", "vm", "vmx", "no"];

/// JFR timestamp clock sources (`--clock`)
pub const CLOCK_SOURCES: [&str; 2] = ["tsc", "monotonic"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_parse() {
        assert_eq!("wall".parse::<SamplingEvent>(), Ok(SamplingEvent::Wall));
        assert_eq!("itimer".parse::<SamplingEvent>(), Ok(SamplingEvent::Itimer));
        assert_eq!("WALL".parse::<SamplingEvent>(), Err(UnknownEvent("WALL".to_string())));
    }

    #[test]
    fn test_names_match_variants() {
        for name in SamplingEvent::NAMES {
            let event: SamplingEvent = name.parse().unwrap();
            assert_eq!(event.as_str(), name);
        }
    }
}
