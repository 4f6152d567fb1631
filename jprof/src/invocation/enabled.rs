//! Effective feature set
//!
//! `all` is shorthand for cpu, wall, alloc, live, nativemem and lock. The
//! expansion happens here, once, so the encoders and the validator never
//! look at `all` themselves. The stored configuration is never modified.

use jprof_common::ProfilingConfig;

/// Which sampling features a configuration actually turns on
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnabledSet {
    pub cpu: bool,
    pub wall: bool,
    pub alloc: bool,
    pub live: bool,
    pub native_mem: bool,
    pub lock: bool,
}

impl EnabledSet {
    /// Resolve the effective set from the individual options and `all`
    #[must_use]
    pub fn resolve(cfg: &ProfilingConfig) -> Self {
        if cfg.all {
            return Self::everything();
        }
        Self {
            cpu: cfg.cpu,
            wall: !cfg.wall.is_empty(),
            alloc: !cfg.alloc.is_empty(),
            live: cfg.live,
            native_mem: !cfg.native_mem.is_empty(),
            lock: !cfg.lock.is_empty(),
        }
    }

    /// The set implied by `all = true`
    #[must_use]
    pub fn everything() -> Self {
        Self { cpu: true, wall: true, alloc: true, live: true, native_mem: true, lock: true }
    }
}
