//! Record types for the per-run telemetry snapshot.
//!
//! A run discovers a sequence of NUMA nodes and a sequence of logical CPUs,
//! then fills each CPU with an ordered bag of string properties. Everything
//! is vector-backed and lives for the duration of one snapshot.

use tracing::debug;

/// A NUMA node discovered from `/sys/devices/system/node/node[N]/`.
///
/// All counters default to 0 when the source field is absent. Immutable
/// after discovery.
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub index: usize,
    /// Counters from `numastat`.
    pub numa_hit: u64,
    pub numa_miss: u64,
    pub numa_foreign: u64,
    pub interleave_hit: u64,
    pub local_node: u64,
    pub other_node: u64,
    /// Memory figures from the node `meminfo`, in kB.
    pub mem_total: u64,
    pub mem_used: u64,
}

impl Node {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }
}

/// A single named attribute attached to a CPU.
///
/// Values are raw strings; numeric sources are formatted as unsigned
/// decimal on insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub key: &'static str,
    pub value: String,
}

/// A logical CPU and its accumulated properties.
///
/// `node` is a plain index into the discovered node sequence; the CPU never
/// owns node lifetime. Property insertion order is preserved and duplicate
/// keys are retained, so default output order equals insertion order.
#[derive(Debug, Clone)]
pub struct Cpu {
    pub index: usize,
    pub node: Option<usize>,
    /// Running interrupt total, finalized into an `irqs` property by the
    /// interrupt collector.
    pub irqs: u64,
    pub props: Vec<Property>,
}

impl Cpu {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            node: None,
            irqs: 0,
            props: Vec::new(),
        }
    }

    /// Appends a string-valued property.
    pub fn set_str(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        debug!(cpu = self.index, key, value = %value, "new prop");
        self.props.push(Property { key, value });
    }

    /// Appends a numeric property, formatted as unsigned decimal.
    pub fn set(&mut self, key: &'static str, value: u64) {
        self.set_str(key, value.to_string());
    }
}
