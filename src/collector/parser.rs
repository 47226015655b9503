//! Parsers for the sysfs/procfs text formats consumed by the collectors.
//!
//! These are pure functions over string content, designed to be easily
//! testable without any filesystem. Conversion is best-effort throughout:
//! an unparseable numeric token yields 0 rather than an error, because a
//! missing value and a garbled value are treated the same downstream.

use crate::model::Node;

/// Parses a leading unsigned decimal after optional whitespace.
///
/// Stops at the first non-digit character; no digits means 0. This mirrors
/// how the kernel's single-value sysfs files are read (`"2400000\n"`).
pub fn parse_u64(s: &str) -> u64 {
    let s = s.trim_start();
    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Parses a leading unsigned hexadecimal after optional whitespace.
///
/// Stops at the first non-hex character; no hex digits means 0.
pub fn parse_hex_u64(s: &str) -> u64 {
    let s = s.trim_start();
    let digits: String = s.chars().take_while(|c| c.is_ascii_hexdigit()).collect();
    u64::from_str_radix(&digits, 16).unwrap_or(0)
}

/// Returns the content up to the first line terminator.
pub fn first_line(s: &str) -> &str {
    s.lines().next().unwrap_or("")
}

/// Counters parsed from a node `numastat` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumaStat {
    pub numa_hit: u64,
    pub numa_miss: u64,
    pub numa_foreign: u64,
    pub interleave_hit: u64,
    pub local_node: u64,
    pub other_node: u64,
}

/// Parses `node[N]/numastat` content: `key value` lines in any order.
///
/// Unknown keys are ignored and missing keys stay 0.
pub fn parse_numastat(content: &str) -> NumaStat {
    let mut stat = NumaStat::default();
    for line in content.lines() {
        let Some((key, value)) = line.split_once(char::is_whitespace) else {
            continue;
        };
        let value = parse_u64(value);
        match key {
            "numa_hit" => stat.numa_hit = value,
            "numa_miss" => stat.numa_miss = value,
            "numa_foreign" => stat.numa_foreign = value,
            "interleave_hit" => stat.interleave_hit = value,
            "local_node" => stat.local_node = value,
            "other_node" => stat.other_node = value,
            _ => {}
        }
    }
    stat
}

/// Extracts the number following `label` anywhere in `content`, or 0.
///
/// Node meminfo lines carry a `Node N` prefix (`"Node 0 MemTotal: 16384 kB"`),
/// so this searches by substring rather than splitting lines.
fn value_after(content: &str, label: &str) -> u64 {
    content
        .find(label)
        .map(|pos| parse_u64(&content[pos + label.len()..]))
        .unwrap_or(0)
}

/// Parses `node[N]/meminfo` content into `(mem_total, mem_used)` in kB.
pub fn parse_node_meminfo(content: &str) -> (u64, u64) {
    (
        value_after(content, "MemTotal: "),
        value_after(content, "MemUsed: "),
    )
}

/// Builds a `Node` record from its `numastat` and optional `meminfo` text.
pub fn parse_node(index: usize, numastat: &str, meminfo: Option<&str>) -> Node {
    let stat = parse_numastat(numastat);
    let mut node = Node::new(index);
    node.numa_hit = stat.numa_hit;
    node.numa_miss = stat.numa_miss;
    node.numa_foreign = stat.numa_foreign;
    node.interleave_hit = stat.interleave_hit;
    node.local_node = stat.local_node;
    node.other_node = stat.other_node;
    if let Some(meminfo) = meminfo {
        (node.mem_total, node.mem_used) = parse_node_meminfo(meminfo);
    }
    node
}

/// Parses `/proc/net/softnet_stat`: one line per CPU in registry order,
/// first field hexadecimal. Returns at most `ncpus` values; CPUs beyond
/// the available lines get nothing.
pub fn parse_softnet(content: &str, ncpus: usize) -> Vec<u64> {
    content.lines().take(ncpus).map(parse_hex_u64).collect()
}

/// One data row of `/proc/net/stat/rt_cache`.
///
/// The first three fields are entries, in_hit and in_slow_tot; a short row
/// contributes only the fields it has (entries is always emitted, matching
/// the positional scan of the source).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RtCacheRow {
    pub entries: u64,
    pub in_hit: Option<u64>,
    pub in_slow_tot: Option<u64>,
}

/// Parses `/proc/net/stat/rt_cache`: header line skipped, then one
/// hexadecimal row per CPU in registry order.
pub fn parse_rt_cache(content: &str, ncpus: usize) -> Vec<RtCacheRow> {
    content
        .lines()
        .skip(1)
        .take(ncpus)
        .map(|line| {
            let mut fields = line.split_whitespace();
            RtCacheRow {
                entries: fields.next().map(parse_hex_u64).unwrap_or(0),
                in_hit: fields.next().map(parse_hex_u64),
                in_slow_tot: fields.next().map(parse_hex_u64),
            }
        })
        .collect()
}

/// Sums `/proc/interrupts` count columns per CPU.
///
/// Each row is `ident: c0 c1 ...` with one decimal column per CPU in
/// registry iteration order (not by CPU index label); lines without the
/// colon delimiter are skipped. Rows with fewer columns than CPUs simply
/// contribute nothing to the missing positions.
pub fn parse_interrupt_totals(content: &str, ncpus: usize) -> Vec<u64> {
    let mut totals = vec![0u64; ncpus];
    for line in content.lines() {
        let Some((_, counts)) = line.split_once(':') else {
            continue;
        };
        for (total, field) in totals.iter_mut().zip(counts.split_whitespace()) {
            *total += parse_u64(field);
        }
    }
    totals
}

/// Label prefixes recognized inside a `/proc/cpuinfo` block, with the
/// property key each maps to. `model\t` requires the tab so it cannot
/// shadow `model name`.
const CPU_ID_LABELS: [(&str, &str); 6] = [
    ("model name", "model_name"),
    ("flags", "flags"),
    ("cpu cores", "cpu_cores"),
    ("vendor_id", "vendor_id"),
    ("model\t", "model"),
    ("cpu family", "cpu_family"),
];

/// Parses `/proc/cpuinfo` into one property list per processor block.
///
/// A line starting with `processor` advances to the next block; the
/// marker's own numeric value is ignored, so blocks map positionally onto
/// the CPU registry. Lines before the first marker are ignored. Within a
/// block, the value starts two characters after the first colon (skipping
/// `": "`) and runs to end of line.
pub fn parse_cpu_id_blocks(content: &str) -> Vec<Vec<(&'static str, String)>> {
    let mut blocks: Vec<Vec<(&'static str, String)>> = Vec::new();
    for line in content.lines() {
        if line.starts_with("processor") {
            blocks.push(Vec::new());
        }
        let Some(block) = blocks.last_mut() else {
            continue;
        };
        for (label, key) in CPU_ID_LABELS {
            if line.starts_with(label)
                && let Some(colon) = line.find(':')
            {
                let value = line.get(colon + 2..).unwrap_or("");
                block.push((key, value.to_string()));
            }
        }
    }
    blocks
}

/// Property keys for the per-CPU counters of a `/proc/stat` `cpu[N]` row,
/// in column order. The first eight are mandatory, `guest` is optional.
pub const CPU_TIME_KEYS: [&str; 9] = [
    "user",
    "nice",
    "system",
    "idle",
    "iowait",
    "irqtime",
    "softirqtime",
    "steal",
    "guest",
];

/// Parses the `cpu[N]` rows of `/proc/stat`.
///
/// Returns `(cpu_index, [(key, value)])` per row; the index is explicit in
/// the row and must be looked up by value against the registry. The
/// aggregate `cpu ` row is skipped, and a row with fewer than eight
/// counters contributes nothing.
pub fn parse_cpu_times(content: &str) -> Vec<(usize, Vec<(&'static str, u64)>)> {
    let mut rows = Vec::new();
    for line in content.lines() {
        if !line.starts_with("cpu") || line.starts_with("cpu ") {
            continue;
        }
        let index = parse_u64(&line[3..]) as usize;
        let counters: Vec<u64> = line.split_whitespace().skip(1).map(parse_u64).collect();
        if counters.len() < 8 {
            continue;
        }
        let times = CPU_TIME_KEYS
            .iter()
            .zip(counters)
            .map(|(key, value)| (*key, value))
            .collect();
        rows.push((index, times));
    }
    rows
}
