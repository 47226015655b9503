//! Selection of CPU properties for output.
//!
//! A `Query` is an immutable value built once from the CLI arguments and
//! threaded explicitly into selection and rendering; there is no global
//! state. Mode precedence: explicit keys > all-properties flag > default
//! bare-index listing.

use crate::model::Cpu;

/// What the caller asked for.
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// Requested property keys. Empty means no key filter.
    pub keys: Vec<String>,
    /// Emit every property of every CPU.
    pub all: bool,
    /// Restrict the whole selection to this CPU index. Also disables the
    /// per-CPU index listing mode.
    pub cpu: Option<usize>,
}

impl Query {
    /// Builds a query, applying the precedence rule: any explicit key
    /// overrides the all-properties flag.
    pub fn new(keys: Vec<String>, all: bool, cpu: Option<usize>) -> Self {
        let all = all && keys.is_empty();
        Self { keys, all, cpu }
    }

    /// List mode: iterate every CPU and prefix property lines with the
    /// CPU index. Off when a single CPU was selected.
    pub fn list(&self) -> bool {
        self.cpu.is_none()
    }
}

/// One selected output item, in final emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emit<'a> {
    /// A bare CPU index (default mode).
    Index(usize),
    /// A property of a CPU.
    Prop {
        cpu: usize,
        key: &'a str,
        value: &'a str,
    },
}

/// Selects properties per the query, in CPU registry order and, within a
/// CPU, in property insertion order. Duplicate keys are emitted as often
/// as they occur.
pub fn select<'a>(cpus: &'a [Cpu], query: &Query) -> Vec<Emit<'a>> {
    let mut out = Vec::new();
    for cpu in cpus {
        if let Some(selected) = query.cpu {
            if cpu.index != selected {
                continue;
            }
        } else if query.keys.is_empty() && !query.all {
            out.push(Emit::Index(cpu.index));
            continue;
        }

        if !query.keys.is_empty() {
            for prop in &cpu.props {
                if query.keys.iter().any(|k| k == prop.key) {
                    out.push(Emit::Prop {
                        cpu: cpu.index,
                        key: prop.key,
                        value: &prop.value,
                    });
                }
            }
        } else if query.all {
            for prop in &cpu.props {
                out.push(Emit::Prop {
                    cpu: cpu.index,
                    key: prop.key,
                    value: &prop.value,
                });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<Cpu> {
        let mut cpu0 = Cpu::new(0);
        cpu0.set("node", 0);
        cpu0.set("cur_freq", 2400000);
        let mut cpu1 = Cpu::new(1);
        cpu1.set("node", 1);
        cpu1.set("cur_freq", 1200000);
        cpu1.set("node", 2); // duplicate key
        vec![cpu0, cpu1]
    }

    #[test]
    fn test_default_mode_emits_bare_indices() {
        let cpus = fixture();
        let emits = select(&cpus, &Query::new(vec![], false, None));
        assert_eq!(emits, vec![Emit::Index(0), Emit::Index(1)]);
    }

    #[test]
    fn test_keys_override_all_flag() {
        let query = Query::new(vec!["node".into()], true, None);
        assert!(!query.all);
        let cpus = fixture();
        let emits = select(&cpus, &query);
        // Only node properties, duplicates included.
        assert_eq!(
            emits,
            vec![
                Emit::Prop { cpu: 0, key: "node", value: "0" },
                Emit::Prop { cpu: 1, key: "node", value: "1" },
                Emit::Prop { cpu: 1, key: "node", value: "2" },
            ]
        );
    }

    #[test]
    fn test_all_mode_emits_everything_in_insertion_order() {
        let cpus = fixture();
        let emits = select(&cpus, &Query::new(vec![], true, None));
        assert_eq!(emits.len(), 5);
        assert_eq!(
            emits[1],
            Emit::Prop { cpu: 0, key: "cur_freq", value: "2400000" }
        );
    }

    #[test]
    fn test_unknown_key_yields_nothing() {
        let cpus = fixture();
        let emits = select(&cpus, &Query::new(vec!["doesnotexist".into()], false, None));
        assert!(emits.is_empty());
    }

    #[test]
    fn test_single_cpu_restriction() {
        let cpus = fixture();
        let emits = select(&cpus, &Query::new(vec!["cur_freq".into()], false, Some(1)));
        assert_eq!(
            emits,
            vec![Emit::Prop { cpu: 1, key: "cur_freq", value: "1200000" }]
        );
    }

    #[test]
    fn test_single_cpu_without_keys_or_all_emits_nothing() {
        let cpus = fixture();
        let emits = select(&cpus, &Query::new(vec![], false, Some(0)));
        assert!(emits.is_empty());
    }

    #[test]
    fn test_roundtrip_single_property() {
        let mut cpu = Cpu::new(0);
        cpu.set_str("model_name", "Fake CPU @ 2.40GHz");
        cpu.set("irqs", 7);
        let cpus = vec![cpu];
        let emits = select(&cpus, &Query::new(vec!["model_name".into()], false, None));
        assert_eq!(
            emits,
            vec![Emit::Prop { cpu: 0, key: "model_name", value: "Fake CPU @ 2.40GHz" }]
        );
    }
}
