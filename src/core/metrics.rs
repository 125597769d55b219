use average::{Estimate, Mean};

use super::process::{SimResult, Ticks};

/// Aggregate performance figures derived from a finished simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    /// Busy ticks over total ticks, as a percentage.
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
}

impl Metrics {
    pub fn from_result(result: &SimResult) -> Self {
        if result.processes.is_empty() || result.total_time == 0 {
            return Self {
                avg_waiting: 0.0,
                avg_turnaround: 0.0,
                cpu_utilization: 0.0,
                throughput: 0.0,
            };
        }

        let busy: Ticks = result.processes.iter().map(|p| p.burst_time).sum();
        let total = result.total_time as f64;
        Self {
            avg_waiting: mean(result.processes.iter().map(|p| p.waiting_time as f64)),
            avg_turnaround: mean(result.processes.iter().map(|p| p.turnaround_time as f64)),
            cpu_utilization: busy as f64 / total * 100.0,
            throughput: result.processes.len() as f64 / total,
        }
    }
}

fn mean(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<Mean>().estimate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::process::Process;
    use crate::core::trace::Trace;

    #[test]
    fn empty_result_yields_zero_metrics() {
        let result = SimResult {
            processes: Vec::new(),
            trace: Trace::new(),
            total_time: 0,
        };
        let m = Metrics::from_result(&result);
        assert_eq!(m.avg_waiting, 0.0);
        assert_eq!(m.avg_turnaround, 0.0);
        assert_eq!(m.cpu_utilization, 0.0);
        assert_eq!(m.throughput, 0.0);
    }

    #[test]
    fn metrics_follow_the_finalized_processes() {
        let mut a = Process::new("A", 0, 4, 1, None).unwrap();
        let mut b = Process::new("B", 0, 6, 1, None).unwrap();
        a.remaining_time = 0;
        b.remaining_time = 0;
        a.finalize(4);
        b.finalize(10);
        let mut trace = Trace::new();
        trace.push("A", 4);
        trace.push("B", 6);
        let result = SimResult {
            processes: vec![a, b],
            trace,
            total_time: 10,
        };
        let m = Metrics::from_result(&result);
        assert_eq!(m.avg_waiting, 2.0);
        assert_eq!(m.avg_turnaround, 7.0);
        assert_eq!(m.cpu_utilization, 100.0);
        assert_eq!(m.throughput, 0.2);
    }
}
