//! Main collector that runs all phases in their fixed order.
//!
//! The per-CPU sources have ordering dependencies: the positional tables
//! (`softnet_stat`, `interrupts`, `cpuinfo`, `rt_cache`) and the
//! by-value `stat` rows all assume the registry already holds its final,
//! ordered CPU set, and the interrupt sum must be finalized before any
//! output happens.

use tracing::debug;

use crate::collector::procfs::ProcfsCollector;
use crate::collector::sysfs::SysfsCollector;
use crate::collector::traits::FileSystem;
use crate::model::Cpu;

/// One-shot snapshot collector over a sysfs and a procfs tree.
pub struct Collector<F: FileSystem + Clone> {
    sysfs: SysfsCollector<F>,
    procfs: ProcfsCollector<F>,
}

impl<F: FileSystem + Clone> Collector<F> {
    /// Creates a new collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `sys_path` - Base path to the sysfs tree (usually "/sys")
    /// * `proc_path` - Base path to the proc filesystem (usually "/proc")
    pub fn new(fs: F, sys_path: impl Into<String>, proc_path: impl Into<String>) -> Self {
        Self {
            sysfs: SysfsCollector::new(fs.clone(), sys_path),
            procfs: ProcfsCollector::new(fs, proc_path),
        }
    }

    /// Takes one snapshot: discovers topology, then runs every property
    /// collector in sequence. Missing sources never fail the run; the
    /// affected properties are simply absent.
    pub fn collect(&self) -> Vec<Cpu> {
        let nodes = self.sysfs.scan_nodes();
        let mut cpus = self.sysfs.scan_cpus();
        self.sysfs.assign_nodes(&mut cpus, &nodes);
        self.sysfs.collect_cpu_props(&mut cpus, &nodes);
        self.procfs.collect_softnet(&mut cpus);
        self.procfs.collect_interrupts(&mut cpus);
        self.procfs.collect_cpu_id(&mut cpus);
        self.procfs.collect_rt_cache(&mut cpus);
        self.procfs.collect_cpu_times(&mut cpus);
        debug!(cpus = cpus.len(), nodes = nodes.len(), "snapshot complete");
        cpus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;

    fn value_of(cpu: &Cpu, key: &str) -> Option<String> {
        cpu.props
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.clone())
    }

    #[test]
    fn test_collect_two_node_system() {
        let collector = Collector::new(MockFs::two_node_system(), "/sys", "/proc");
        let cpus = collector.collect();

        assert_eq!(cpus.len(), 4);
        let indexes: Vec<usize> = cpus.iter().map(|c| c.index).collect();
        assert_eq!(indexes, vec![0, 1, 2, 3]);

        // Node binding and node-derived block.
        assert_eq!(cpus[0].node, Some(0));
        assert_eq!(cpus[3].node, Some(1));
        assert_eq!(value_of(&cpus[0], "node").as_deref(), Some("0"));
        assert_eq!(value_of(&cpus[0], "numa_hit").as_deref(), Some("1000"));
        assert_eq!(value_of(&cpus[2], "numa_hit").as_deref(), Some("2000"));
        assert_eq!(value_of(&cpus[0], "memtotal").as_deref(), Some("16384000"));
        assert_eq!(value_of(&cpus[1], "memused").as_deref(), Some("8192000"));

        // Static sysfs sources.
        assert_eq!(value_of(&cpus[0], "cur_freq").as_deref(), Some("2400000"));
        assert_eq!(value_of(&cpus[0], "cache3_size").as_deref(), Some("8192K"));

        // Positional tables.
        assert_eq!(value_of(&cpus[0], "softnet_stat").as_deref(), Some("161"));
        assert_eq!(value_of(&cpus[0], "irqs").as_deref(), Some("16"));
        assert_eq!(value_of(&cpus[3], "irqs").as_deref(), Some("49"));
        assert_eq!(
            value_of(&cpus[2], "model_name").as_deref(),
            Some("Fake CPU @ 2.40GHz")
        );
        assert_eq!(value_of(&cpus[1], "rt_cache_in_hit").as_deref(), Some("254"));

        // By-value scheduler times.
        assert_eq!(value_of(&cpus[2], "user").as_deref(), Some("2500"));
        assert_eq!(value_of(&cpus[2], "guest").as_deref(), Some("0"));
    }

    #[test]
    fn test_collect_phase_order_in_property_bag() {
        let collector = Collector::new(MockFs::two_node_system(), "/sys", "/proc");
        let cpus = collector.collect();

        let keys: Vec<&str> = cpus[0].props.iter().map(|p| p.key).collect();
        let pos = |key: &str| keys.iter().position(|k| *k == key).unwrap();

        // Insertion order follows the phase sequence.
        assert!(pos("node") < pos("cur_freq"));
        assert!(pos("cur_freq") < pos("softnet_stat"));
        assert!(pos("softnet_stat") < pos("irqs"));
        assert!(pos("irqs") < pos("model_name"));
        assert!(pos("model_name") < pos("rt_cache_entries"));
        assert!(pos("rt_cache_entries") < pos("user"));
    }

    #[test]
    fn test_collect_single_cpu_minimal_sources() {
        let collector = Collector::new(MockFs::single_cpu(), "/sys", "/proc");
        let cpus = collector.collect();

        assert_eq!(cpus.len(), 1);
        assert_eq!(cpus[0].node, None);
        // Only /proc/stat was available.
        let keys: Vec<&str> = cpus[0].props.iter().map(|p| p.key).collect();
        assert_eq!(
            keys,
            vec!["user", "nice", "system", "idle", "iowait", "irqtime", "softirqtime", "steal"]
        );
    }

    #[test]
    fn test_collect_empty_filesystem() {
        let collector = Collector::new(MockFs::new(), "/sys", "/proc");
        assert!(collector.collect().is_empty());
    }
}
