//! Collectors for the per-CPU `/proc` sources.
//!
//! Each collector reads one file and appends properties to the CPU
//! records; an unreadable or empty source contributes nothing and is
//! never an error.

use std::path::Path;

use crate::collector::parser::{
    parse_cpu_id_blocks, parse_cpu_times, parse_interrupt_totals, parse_rt_cache, parse_softnet,
};
use crate::collector::traits::FileSystem;
use crate::model::Cpu;

/// Collects per-CPU counters from a proc filesystem tree.
pub struct ProcfsCollector<F: FileSystem> {
    fs: F,
    proc_path: String,
}

impl<F: FileSystem> ProcfsCollector<F> {
    /// Creates a new procfs collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to the proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<String>) -> Self {
        Self {
            fs,
            proc_path: proc_path.into(),
        }
    }

    fn read(&self, file: &str) -> Option<String> {
        self.fs
            .read_optional(Path::new(&format!("{}/{}", self.proc_path, file)))
    }

    /// `/proc/net/softnet_stat`: first hex field of line `i` becomes the
    /// `softnet_stat` property of the `i`-th CPU in registry order.
    pub fn collect_softnet(&self, cpus: &mut [Cpu]) {
        let Some(content) = self.read("net/softnet_stat") else {
            return;
        };
        let values = parse_softnet(&content, cpus.len());
        for (cpu, value) in cpus.iter_mut().zip(values) {
            cpu.set("softnet_stat", value);
        }
    }

    /// `/proc/interrupts`: accumulates the per-CPU running sum across all
    /// rows, then finalizes one `irqs` property per CPU. The finalization
    /// only happens when the table was readable.
    pub fn collect_interrupts(&self, cpus: &mut [Cpu]) {
        let Some(content) = self.read("interrupts") else {
            return;
        };
        let totals = parse_interrupt_totals(&content, cpus.len());
        for (cpu, total) in cpus.iter_mut().zip(totals) {
            cpu.irqs += total;
        }
        for cpu in cpus {
            cpu.set("irqs", cpu.irqs);
        }
    }

    /// `/proc/cpuinfo`: identification blocks map positionally onto the
    /// registry; blocks past the last CPU are dropped.
    pub fn collect_cpu_id(&self, cpus: &mut [Cpu]) {
        let Some(content) = self.read("cpuinfo") else {
            return;
        };
        for (cpu, block) in cpus.iter_mut().zip(parse_cpu_id_blocks(&content)) {
            for (key, value) in block {
                cpu.set_str(key, value);
            }
        }
    }

    /// `/proc/net/stat/rt_cache`: one row per CPU after the header, three
    /// leading hex fields per row.
    pub fn collect_rt_cache(&self, cpus: &mut [Cpu]) {
        let Some(content) = self.read("net/stat/rt_cache") else {
            return;
        };
        let rows = parse_rt_cache(&content, cpus.len());
        for (cpu, row) in cpus.iter_mut().zip(rows) {
            cpu.set("rt_cache_entries", row.entries);
            if let Some(in_hit) = row.in_hit {
                cpu.set("rt_cache_in_hit", in_hit);
            }
            if let Some(in_slow_tot) = row.in_slow_tot {
                cpu.set("rt_cache_in_slow_tot", in_slow_tot);
            }
        }
    }

    /// `/proc/stat` `cpu[N]` rows: unlike the other tables these carry an
    /// explicit CPU index, looked up by value against the registry.
    pub fn collect_cpu_times(&self, cpus: &mut [Cpu]) {
        let Some(content) = self.read("stat") else {
            return;
        };
        for (index, times) in parse_cpu_times(&content) {
            if let Some(cpu) = cpus.iter_mut().find(|c| c.index == index) {
                for (key, value) in times {
                    cpu.set(key, value);
                }
            }
        }
    }
}
