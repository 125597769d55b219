use rustc_hash::FxHashMap;

use super::process::{SimResult, Ticks};
use super::trace::IDLE;

/// Checks the structural invariants of a finished simulation. A violation
/// is a policy defect, never a runtime condition, so every check is a
/// debug_assert.
#[derive(Debug, Default)]
pub struct Observer;

impl Observer {
    pub fn new() -> Self {
        Self
    }

    pub fn observe(&self, result: &SimResult) {
        let mut ran_for: FxHashMap<&str, Ticks> = FxHashMap::default();
        let mut sum: Ticks = 0;
        let mut prev: Option<&str> = None;

        for seg in result.trace.segments() {
            debug_assert!(seg.duration > 0, "zero-duration segment {:?}", seg.label);
            debug_assert_ne!(
                prev,
                Some(seg.label.as_str()),
                "adjacent segments share label {}",
                seg.label
            );
            prev = Some(seg.label.as_str());
            sum += seg.duration;
            if seg.label != IDLE {
                *ran_for.entry(seg.label.as_str()).or_default() += seg.duration;
            }
        }
        debug_assert_eq!(sum, result.total_time, "trace durations must sum to total_time");

        for p in &result.processes {
            debug_assert!(p.is_complete(), "process {} left incomplete", p.id);
            debug_assert_eq!(
                ran_for.get(p.id.as_str()).copied().unwrap_or(0),
                p.burst_time,
                "process {} ran for a duration other than its burst",
                p.id
            );
            debug_assert_eq!(
                p.waiting_time,
                p.turnaround_time.saturating_sub(p.burst_time),
                "process {} timing fields disagree",
                p.id
            );
        }
    }
}
