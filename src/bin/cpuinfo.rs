//! cpuinfo - script friendly CPU information retrieval.
//!
//! Usage:
//!   cpuinfo                  # list CPU indices
//!   cpuinfo cur_freq         # one value per CPU, "N:VALUE"
//!   cpuinfo -n 2 cur_freq    # value for CPU 2 only
//!   cpuinfo -a               # every property, "N:key=VALUE"
//!   cpuinfo -w flags         # whitespace in values replaced with _

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[cfg(target_os = "linux")]
use cpuinfo::collector::RealFs;
#[cfg(not(target_os = "linux"))]
use cpuinfo::collector::MockFs;

use cpuinfo::collector::Collector;
use cpuinfo::fmt::{Output, render};
use cpuinfo::query::{Query, select};

/// Script friendly CPU information retrieval.
#[derive(Parser)]
#[command(name = "cpuinfo", about = "Script friendly CPU information", version)]
struct Args {
    /// Output all keys found.
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Output info for this cpu only.
    #[arg(short = 'n', long = "cpu", value_name = "CPU")]
    cpu: Option<usize>,

    /// Do not output whitespace in values.
    #[arg(short = 'w', long = "nowhite")]
    nowhite: bool,

    /// Prefix values with string S.
    #[arg(short = 'p', long = "prefix", value_name = "S", default_value = "")]
    prefix: String,

    /// Append string S to values.
    #[arg(short = 's', long = "suffix", value_name = "S", default_value = "")]
    suffix: String,

    /// Trace property insertions to stderr.
    #[arg(long)]
    debug: bool,

    /// Path to the sysfs tree (for testing/mocking).
    #[arg(long, default_value = "/sys")]
    sys_path: String,

    /// Path to the proc filesystem (for testing/mocking).
    #[arg(long, default_value = "/proc")]
    proc_path: String,

    /// Property keys to query (e.g. cur_freq, node, irqs).
    /// Any key given here overrides --all.
    #[arg(value_name = "KEY")]
    keys: Vec<String>,
}

/// Initializes the tracing subscriber. Property-insertion traces show up
/// at DEBUG when --debug is given; otherwise only errors surface.
fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::ERROR };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("cpuinfo={}", level).parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    #[cfg(target_os = "linux")]
    let collector = Collector::new(RealFs::new(), &args.sys_path, &args.proc_path);
    #[cfg(not(target_os = "linux"))]
    let collector = Collector::new(MockFs::two_node_system(), &args.sys_path, &args.proc_path);

    let cpus = collector.collect();

    let query = Query::new(args.keys, args.all, args.cpu);
    let output = Output {
        nowhite: args.nowhite,
        prefix: args.prefix,
        suffix: args.suffix,
    };

    let emits = select(&cpus, &query);
    let stdout = std::io::stdout();
    let mut w = stdout.lock();
    // A failed stdout write (closed pipe) still exits 0; missing data is
    // never an error either.
    let _ = render(&emits, &query, &output, &mut w);
}
