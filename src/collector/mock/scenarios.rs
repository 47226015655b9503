//! Pre-built mock filesystem scenarios for testing.
//!
//! These provide realistic `/sys` + `/proc` states so tests (and the
//! non-Linux fallback build) can exercise the whole pipeline.

use super::filesystem::MockFs;

impl MockFs {
    /// A two-node, four-CPU system with every source populated.
    ///
    /// CPUs 0-1 sit on node 0, CPUs 2-3 on node 1.
    pub fn two_node_system() -> Self {
        let mut fs = Self::new();

        fs.add_file(
            "/sys/devices/system/node/node0/numastat",
            "\
numa_hit 1000
numa_miss 10
numa_foreign 2
interleave_hit 3
local_node 900
other_node 100
",
        );
        fs.add_file(
            "/sys/devices/system/node/node0/meminfo",
            "\
Node 0 MemTotal:       16384000 kB
Node 0 MemFree:         8192000 kB
Node 0 MemUsed:         8192000 kB
",
        );
        fs.add_file(
            "/sys/devices/system/node/node1/numastat",
            "\
numa_hit 2000
numa_miss 20
numa_foreign 4
interleave_hit 6
local_node 1800
other_node 200
",
        );
        fs.add_file(
            "/sys/devices/system/node/node1/meminfo",
            "\
Node 1 MemTotal:       16384000 kB
Node 1 MemFree:        12288000 kB
Node 1 MemUsed:         4096000 kB
",
        );

        for cpu in 0..4 {
            let node = cpu / 2;
            let base = format!("/sys/devices/system/cpu/cpu{cpu}");
            fs.add_dir(&base);
            fs.add_dir(format!("{base}/node{node}"));
            fs.add_file(format!("{base}/cpufreq/cpuinfo_cur_freq"), "2400000\n");
            fs.add_file(format!("{base}/cpufreq/cpuinfo_max_freq"), "3200000\n");
            fs.add_file(format!("{base}/topology/physical_package_id"), format!("{node}\n"));
            fs.add_file(
                format!("{base}/topology/core_siblings_list"),
                if node == 0 { "0-1\n" } else { "2-3\n" },
            );
            fs.add_file(format!("{base}/topology/thread_siblings_list"), format!("{cpu}\n"));
            fs.add_file(format!("{base}/cache/index0/size"), "32K\n");
            fs.add_file(format!("{base}/cache/index0/type"), "Data\n");
            fs.add_file(format!("{base}/cache/index1/size"), "32K\n");
            fs.add_file(format!("{base}/cache/index1/type"), "Instruction\n");
            fs.add_file(format!("{base}/cache/index2/size"), "256K\n");
            fs.add_file(format!("{base}/cache/index2/type"), "Unified\n");
            fs.add_file(format!("{base}/cache/index3/size"), "8192K\n");
            fs.add_file(format!("{base}/cache/index3/type"), "Unified\n");
        }

        fs.add_file(
            "/proc/net/softnet_stat",
            "\
000000a1 00000000 00000001 00000000 00000000 00000000 00000000 00000000 00000000 00000000
000000a2 00000000 00000000 00000000 00000000 00000000 00000000 00000000 00000000 00000000
000000a3 00000000 00000002 00000000 00000000 00000000 00000000 00000000 00000000 00000000
000000a4 00000000 00000000 00000000 00000000 00000000 00000000 00000000 00000000 00000000
",
        );

        fs.add_file(
            "/proc/interrupts",
            "\
           CPU0       CPU1       CPU2       CPU3
  0:         10         20         30         40   IO-APIC-edge      timer
  1:          1          2          3          4   IO-APIC-edge      i8042
NMI:          5          5          5          5   Non-maskable interrupts
",
        );

        fs.add_file(
            "/proc/cpuinfo",
            "\
processor\t: 0
vendor_id\t: TestVendor
cpu family\t: 6
model\t\t: 42
model name\t: Fake CPU @ 2.40GHz
cpu cores\t: 2
flags\t\t: fpu vme de pse

processor\t: 1
vendor_id\t: TestVendor
cpu family\t: 6
model\t\t: 42
model name\t: Fake CPU @ 2.40GHz
cpu cores\t: 2
flags\t\t: fpu vme de pse

processor\t: 2
vendor_id\t: TestVendor
cpu family\t: 6
model\t\t: 42
model name\t: Fake CPU @ 2.40GHz
cpu cores\t: 2
flags\t\t: fpu vme de pse

processor\t: 3
vendor_id\t: TestVendor
cpu family\t: 6
model\t\t: 42
model name\t: Fake CPU @ 2.40GHz
cpu cores\t: 2
flags\t\t: fpu vme de pse
",
        );

        fs.add_file(
            "/proc/net/stat/rt_cache",
            "\
entries  in_hit in_slow_tot in_slow_mc in_no_route in_brd in_martian_dst in_martian_src
00000014 000000ff 00000001 00000000 00000000 00000000 00000000 00000000
00000014 000000fe 00000002 00000000 00000000 00000000 00000000 00000000
00000014 000000fd 00000003 00000000 00000000 00000000 00000000 00000000
00000014 000000fc 00000004 00000000 00000000 00000000 00000000 00000000
",
        );

        fs.add_file(
            "/proc/stat",
            "\
cpu  10000 500 3000 80000 1000 200 100 0 0 0
cpu0 2500 125 750 20000 250 50 25 0 0 0
cpu1 2500 125 750 20000 250 50 25 0 0 0
cpu2 2500 125 750 20000 250 50 25 0 0 0
cpu3 2500 125 750 20000 250 50 25 0 0 0
intr 1000000 50 0 0
ctxt 500000
btime 1700000000
",
        );

        fs
    }

    /// A single CPU with no NUMA nodes and only `/proc/stat` available.
    /// Useful for minimal-source behavior tests.
    pub fn single_cpu() -> Self {
        let mut fs = Self::new();
        fs.add_dir("/sys/devices/system/cpu/cpu0");
        fs.add_file("/proc/stat", "cpu  1 2 3 4 5 6 7 8\ncpu0 1 2 3 4 5 6 7 8\n");
        fs
    }
}
