use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use sched_sim::scheduler::Policy;
use sched_sim::sim::driver::{self, Report};
use sched_sim::sim::workload;

/// Simulate a CPU scheduling policy over a process set and report the
/// Gantt trace and aggregate metrics.
#[derive(Parser, Debug)]
#[command(name = "sched-sim")]
struct Args {
    /// Policy selector: fcfs, sjf, srtf, priority, rr, mlq, mlfq, lottery,
    /// cfs, edf
    #[arg(short, long)]
    policy: String,

    /// Process list file, one `ID arrival burst priority [deadline]` per line
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Round-robin quantum in ticks
    #[arg(short, long, default_value_t = 4)]
    quantum: u64,

    /// Generate a random process set instead of reading a file
    #[arg(long)]
    random: bool,

    /// Number of random processes
    #[arg(long, default_value_t = 10)]
    num: usize,

    /// Seed for the random process set
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Also write the report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let policy = Policy::from_name(&args.policy, args.quantum)?;
    let processes = if args.random {
        workload::random(args.num, args.seed)
    } else if let Some(path) = &args.input {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        workload::parse(&text).with_context(|| format!("parsing {}", path.display()))?
    } else {
        workload::reference_set()
    };
    if processes.is_empty() {
        bail!("no processes loaded");
    }

    let report = driver::run(&policy, &processes);
    let text = render_report(&policy, &report);
    print!("{text}");

    if let Some(path) = &args.output {
        fs::write(path, &text).with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

fn render_report(policy: &Policy, report: &Report) -> String {
    let m = &report.metrics;
    let mut out = String::new();
    let _ = writeln!(out, "Scheduler: {}", policy.name());
    let _ = writeln!(out, "Gantt Chart: {}", report.result.trace.render());
    let _ = writeln!(out, "Average Waiting Time: {}", m.avg_waiting);
    let _ = writeln!(out, "Average Turnaround Time: {}", m.avg_turnaround);
    let _ = writeln!(out, "CPU Utilization: {}%", m.cpu_utilization);
    let _ = writeln!(out, "Throughput: {} processes/unit time", m.throughput);
    out
}
