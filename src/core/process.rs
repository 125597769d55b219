use std::fmt;

use super::trace::Trace;

pub type Ticks = u64;

/// One simulated task: immutable input facts plus the run-state the active
/// policy mutates while scheduling it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub id: String,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    /// Lower number means more urgent; only priority-aware policies read it.
    pub priority: i32,
    /// Policies that need a deadline and find none derive
    /// `arrival_time + 2 * burst_time`.
    pub deadline: Option<Ticks>,
    pub remaining_time: Ticks,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    ZeroBurst { id: String },
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::ZeroBurst { id } => {
                write!(f, "process {id} has a zero burst time")
            }
        }
    }
}

impl std::error::Error for ProcessError {}

impl Process {
    pub fn new(
        id: impl Into<String>,
        arrival_time: Ticks,
        burst_time: Ticks,
        priority: i32,
        deadline: Option<Ticks>,
    ) -> Result<Self, ProcessError> {
        let id = id.into();
        if burst_time == 0 {
            return Err(ProcessError::ZeroBurst { id });
        }
        Ok(Self {
            id,
            arrival_time,
            burst_time,
            priority,
            deadline,
            remaining_time: burst_time,
            waiting_time: 0,
            turnaround_time: 0,
        })
    }

    /// Restores the initial run-state. Policies call this up front and must
    /// not assume a previous run left clean state.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.waiting_time = 0;
        self.turnaround_time = 0;
    }

    /// The explicit deadline when one was supplied, the derived one
    /// otherwise. A stored zero counts as unset.
    pub fn effective_deadline(&self) -> Ticks {
        match self.deadline {
            Some(d) if d > 0 => d,
            _ => self.arrival_time + 2 * self.burst_time,
        }
    }

    /// Fixes the timing fields at completion tick `completion`. The
    /// arrival-blind policies can complete a process before
    /// `arrival + burst`, so both fields saturate at zero.
    pub fn finalize(&mut self, completion: Ticks) {
        self.turnaround_time = completion.saturating_sub(self.arrival_time);
        self.waiting_time = self.turnaround_time.saturating_sub(self.burst_time);
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }
}

/// The sole output contract of a policy invocation: the finalized process
/// collection, the Gantt trace, and the tick at which the last segment
/// ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimResult {
    pub processes: Vec<Process>,
    pub trace: Trace,
    pub total_time: Ticks,
}
