use log::{debug, info};

use crate::core::{Metrics, Observer, Process};
use crate::core::SimResult;
use crate::scheduler::Policy;

/// A finished simulation: the raw result plus the derived metrics.
#[derive(Debug, Clone)]
pub struct Report {
    pub result: SimResult,
    pub metrics: Metrics,
}

/// Runs `policy` over `processes`, checks the result invariants, and
/// derives the aggregate metrics.
pub fn run(policy: &Policy, processes: &[Process]) -> Report {
    info!(
        "running {} over {} processes",
        policy.name(),
        processes.len()
    );
    let result = policy.run(processes);
    Observer::new().observe(&result);
    debug!("gantt: {}", result.trace.render());
    let metrics = Metrics::from_result(&result);
    Report { result, metrics }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::workload;

    #[test]
    fn report_carries_result_and_metrics() {
        let report = run(&Policy::Fcfs, &workload::reference_set());
        assert_eq!(report.result.total_time, 26);
        assert!((report.metrics.avg_waiting - 8.75).abs() < 1e-9);
    }
}
