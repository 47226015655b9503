//! Collector for the `/sys/devices/system` CPU and node topology.
//!
//! Handles node discovery (`node[N]/numastat`, `node[N]/meminfo`), CPU
//! discovery, CPU-to-node assignment, and the static per-CPU property
//! block (frequencies, package id, sibling lists, cache levels).

use std::path::Path;

use tracing::debug;

use crate::collector::parser::{first_line, parse_node, parse_u64};
use crate::collector::traits::FileSystem;
use crate::model::{Cpu, Node};

/// Single-value sysfs sources read per CPU, with the property key and
/// whether the value is decimal or taken verbatim from the first line.
const CPU_NUMERIC_SOURCES: [(&str, &str); 3] = [
    ("cpufreq/cpuinfo_cur_freq", "cur_freq"),
    ("cpufreq/cpuinfo_max_freq", "max_freq"),
    ("topology/physical_package_id", "physical_package_id"),
];

const CPU_TEXT_SOURCES: [(&str, &str); 2] = [
    ("topology/core_siblings_list", "core_siblings_list"),
    ("topology/thread_siblings_list", "thread_siblings_list"),
];

/// Collects CPU/node topology from a sysfs tree.
pub struct SysfsCollector<F: FileSystem> {
    fs: F,
    sys_path: String,
}

impl<F: FileSystem> SysfsCollector<F> {
    /// Creates a new sysfs collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `sys_path` - Base path to the sysfs tree (usually "/sys")
    pub fn new(fs: F, sys_path: impl Into<String>) -> Self {
        Self {
            fs,
            sys_path: sys_path.into(),
        }
    }

    fn node_path(&self, node: usize, file: &str) -> String {
        format!("{}/devices/system/node/node{}/{}", self.sys_path, node, file)
    }

    fn cpu_path(&self, cpu: usize) -> String {
        format!("{}/devices/system/cpu/cpu{}", self.sys_path, cpu)
    }

    /// Discovers NUMA nodes by probing `node[N]/numastat` from index 0.
    ///
    /// Discovery stops at the first index whose `numastat` is unreadable or
    /// empty. A failed `meminfo` read does not stop discovery, it only
    /// leaves the memory figures at 0.
    pub fn scan_nodes(&self) -> Vec<Node> {
        let mut nodes = Vec::new();
        for index in 0.. {
            let Some(numastat) = self
                .fs
                .read_optional(Path::new(&self.node_path(index, "numastat")))
            else {
                break;
            };
            let meminfo = self
                .fs
                .read_optional(Path::new(&self.node_path(index, "meminfo")));
            nodes.push(parse_node(index, &numastat, meminfo.as_deref()));
        }
        debug!(nodes = nodes.len(), "node scan complete");
        nodes
    }

    /// Discovers logical CPUs by probing `cpu[N]` directory existence
    /// from index 0. Existence only, no content is read.
    pub fn scan_cpus(&self) -> Vec<Cpu> {
        let count = probe_sequential(|index| self.fs.exists(Path::new(&self.cpu_path(index))));
        debug!(cpus = count, "cpu scan complete");
        (0..count).map(Cpu::new).collect()
    }

    /// Picks the node for one CPU: the first node index (in registry
    /// order) whose `cpu[C]/node[N]` marker exists wins, whether or not it
    /// is the topologically closest one. Kept as a standalone strategy
    /// function so the tie-break stays visible and testable.
    pub fn assign_node(&self, cpu: usize, node_count: usize) -> Option<usize> {
        (0..node_count).find(|node| {
            let marker = format!("{}/node{}", self.cpu_path(cpu), node);
            self.fs.exists(Path::new(&marker))
        })
    }

    /// Binds each CPU to a node via `assign_node`. CPUs with no marker for
    /// any node keep their node reference absent.
    pub fn assign_nodes(&self, cpus: &mut [Cpu], nodes: &[Node]) {
        for cpu in cpus {
            cpu.node = self.assign_node(cpu.index, nodes.len());
        }
    }

    /// Fills each CPU with its static property block: the node-derived
    /// values when a node is assigned, then frequency/topology/cache
    /// sources, each independently optional.
    pub fn collect_cpu_props(&self, cpus: &mut [Cpu], nodes: &[Node]) {
        for cpu in cpus {
            if let Some(node) = cpu.node.and_then(|n| nodes.get(n)) {
                cpu.set("node", node.index as u64);
                cpu.set("numa_hit", node.numa_hit);
                cpu.set("numa_miss", node.numa_miss);
                cpu.set("memtotal", node.mem_total);
                cpu.set("memused", node.mem_used);
            }

            let base = self.cpu_path(cpu.index);
            for (file, key) in CPU_NUMERIC_SOURCES {
                if let Some(content) = self.fs.read_optional(Path::new(&format!("{base}/{file}")))
                {
                    cpu.set(key, parse_u64(&content));
                }
            }
            for (file, key) in CPU_TEXT_SOURCES {
                if let Some(content) = self.fs.read_optional(Path::new(&format!("{base}/{file}")))
                {
                    cpu.set_str(key, first_line(&content));
                }
            }
            for (level, (size_key, type_key)) in CACHE_KEYS.into_iter().enumerate() {
                let size = format!("{base}/cache/index{level}/size");
                if let Some(content) = self.fs.read_optional(Path::new(&size)) {
                    cpu.set_str(size_key, first_line(&content));
                }
                let cache_type = format!("{base}/cache/index{level}/type");
                if let Some(content) = self.fs.read_optional(Path::new(&cache_type)) {
                    cpu.set_str(type_key, first_line(&content));
                }
            }
        }
    }
}

/// Cache levels 0..=3, `(size_key, type_key)` per level.
const CACHE_KEYS: [(&str, &str); 4] = [
    ("cache0_size", "cache0_type"),
    ("cache1_size", "cache1_type"),
    ("cache2_size", "cache2_type"),
    ("cache3_size", "cache3_type"),
];

/// Probes indices from 0 and returns the count of consecutive present
/// ones. Enumeration is gap-terminated: sparse numbering (e.g. after CPU
/// hot-unplug) is under-enumerated, which matches the contiguous-from-0
/// assumption of the rest of the pipeline.
pub fn probe_sequential(mut present: impl FnMut(usize) -> bool) -> usize {
    let mut count = 0;
    while present(count) {
        count += 1;
    }
    count
}
