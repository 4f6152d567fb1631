//! Invocation synthesis
//!
//! Encodes a validated [`Arguments`] into async-profiler command syntax.
//! Tokens are emitted group by group (CPU, memory, lock, miscellaneous) and
//! in declaration order inside each group, so equal inputs always produce
//! identical output.
//!
//! Flag names and value formatting follow the `asprof` command line and are
//! a compatibility surface:
//!
//! ```text
//! -e itimer -i 10000000 --alloc 512k --lock 10ms -L INFO -j 2048 --clock tsc
//! ```

mod enabled;
mod launch;
mod spec;

pub use enabled::EnabledSet;
pub use launch::{asprof_binary, ASPROF_BINARY};
pub use spec::{shell_quote, Flag, InvocationSpec};

use jprof_common::{Arguments, ProfilingConfig};
use log::debug;

/// Wall clock interval used when only `all` enables wall profiling
pub const ALL_WALL_INTERVAL: &str = "50ms";

/// Allocation interval used when only `all` enables allocation profiling
pub const ALL_ALLOC_INTERVAL: &str = "512k";

/// Native memory interval used when only `all` enables it
pub const ALL_NATIVE_MEM_INTERVAL: &str = "512k";

/// Lock threshold used when only `all` enables lock profiling
pub const ALL_LOCK_THRESHOLD: &str = "10ms";

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Build the canonical invocation for `args`
///
/// Total over configurations accepted by [`crate::validation::validate`].
#[must_use]
pub fn synthesize(args: &Arguments) -> InvocationSpec {
    let cfg = &args.profiling_config;
    let enabled = EnabledSet::resolve(cfg);

    let mut flags = Vec::new();
    cpu_flags(cfg, enabled, &mut flags);
    memory_flags(cfg, enabled, &mut flags);
    lock_flags(cfg, enabled, &mut flags);
    misc_flags(cfg, &mut flags);

    let spec = InvocationSpec { interval: cfg.interval, tmp_dir: args.tmp_dir.clone(), flags };
    debug!("Synthesized profiler invocation: {spec}");
    spec
}

/// `value` if set, otherwise `fallback` when `all` is what enabled the feature
fn literal_or(value: &str, fallback: &'static str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn push_str(flags: &mut Vec<Flag>, name: &'static str, value: &str) {
    if !value.is_empty() {
        flags.push(Flag::with_value(name, value));
    }
}

fn push_switch(flags: &mut Vec<Flag>, name: &'static str, on: bool) {
    if on {
        flags.push(Flag::switch(name));
    }
}

fn push_each(flags: &mut Vec<Flag>, name: &'static str, values: &[String]) {
    flags.extend(values.iter().map(|value| Flag::with_value(name, value.as_str())));
}

fn cpu_flags(cfg: &ProfilingConfig, enabled: EnabledSet, flags: &mut Vec<Flag>) {
    if enabled.cpu {
        flags.push(Flag::with_value("-e", cfg.event.as_str()));
        // Validation is narrow, so a zero rate leaves the profiler default in place
        if cfg.sample_rate > 0 {
            let interval_ns = NANOS_PER_SEC / u64::from(cfg.sample_rate);
            flags.push(Flag::with_value("-i", interval_ns.to_string()));
        }
    }
    if enabled.wall {
        flags.push(Flag::with_value("--wall", literal_or(&cfg.wall, ALL_WALL_INTERVAL)));
    }
    push_switch(flags, "--all-user", cfg.all_user);
    push_switch(flags, "-t", cfg.per_thread);
    push_str(flags, "--filter", &cfg.filter);
    push_switch(flags, "--sched", cfg.sched);
    push_switch(flags, "--ttsp", cfg.ttsp);
    push_str(flags, "--begin", &cfg.begin);
    push_str(flags, "--end", &cfg.end);
    push_switch(flags, "--nostop", cfg.nostop);
    push_str(flags, "--proc", &cfg.proc);
    if cfg.target_cpu >= 0 {
        flags.push(Flag::with_value("--target-cpu", cfg.target_cpu.to_string()));
    }
    push_switch(flags, "--record-cpu", cfg.record_cpu);
}

fn memory_flags(cfg: &ProfilingConfig, enabled: EnabledSet, flags: &mut Vec<Flag>) {
    if enabled.alloc {
        flags.push(Flag::with_value("--alloc", literal_or(&cfg.alloc, ALL_ALLOC_INTERVAL)));
    }
    push_switch(flags, "--live", enabled.live);
    if enabled.native_mem {
        flags.push(Flag::with_value(
            "--nativemem",
            literal_or(&cfg.native_mem, ALL_NATIVE_MEM_INTERVAL),
        ));
    }
    push_switch(flags, "--nofree", cfg.no_free);
}

fn lock_flags(cfg: &ProfilingConfig, enabled: EnabledSet, flags: &mut Vec<Flag>) {
    if enabled.lock {
        flags.push(Flag::with_value("--lock", literal_or(&cfg.lock, ALL_LOCK_THRESHOLD)));
    }
    push_str(flags, "--nativelock", &cfg.native_lock);
}

fn misc_flags(cfg: &ProfilingConfig, flags: &mut Vec<Flag>) {
    push_str(flags, "-L", &cfg.log_level);
    push_switch(flags, "--quiet", cfg.quiet);
    push_each(flags, "-I", &cfg.include);
    push_each(flags, "-X", &cfg.exclude);
    if cfg.jstackdepth > 0 {
        flags.push(Flag::with_value("-j", cfg.jstackdepth.to_string()));
    }
    push_str(flags, "--cstack", &cfg.cstack);
    push_each(flags, "-F", &cfg.features);
    push_each(flags, "--trace", &cfg.trace);
    push_str(flags, "--jfrsync", &cfg.jfrsync);
    push_str(flags, "--signal", &cfg.signal);
    push_str(flags, "--clock", &cfg.clock);
}
