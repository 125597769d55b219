pub mod cfs;
pub mod edf;
pub mod lottery;
pub mod mlfq;
pub mod mlq;
pub mod nonpreemptive;
pub mod rr;
pub mod srtf;

use std::fmt;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::{Process, SimResult, Ticks, Trace};

/// Seed the lottery generator defaults to, chosen for reproducible runs.
pub const DEFAULT_LOTTERY_SEED: u64 = 42;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    UnknownPolicy(String),
    InvalidQuantum,
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyError::UnknownPolicy(name) => write!(f, "unknown scheduling policy: {name}"),
            PolicyError::InvalidQuantum => write!(f, "round robin requires a quantum > 0"),
        }
    }
}

impl std::error::Error for PolicyError {}

/// The closed set of scheduling policies. Construction goes through
/// [`Policy::from_name`]; unknown selectors fail there, with no default
/// fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Policy {
    Fcfs,
    Sjf,
    Srtf,
    Priority,
    RoundRobin { quantum: Ticks },
    Mlq,
    Mlfq,
    Lottery { seed: u64 },
    Cfs,
    Edf,
}

impl Policy {
    /// Maps the external selector string to a policy. `quantum` is only
    /// consulted for round robin, where it must be positive.
    pub fn from_name(name: &str, quantum: Ticks) -> Result<Self, PolicyError> {
        Ok(match name {
            "fcfs" => Policy::Fcfs,
            "sjf" => Policy::Sjf,
            "srtf" => Policy::Srtf,
            "priority" => Policy::Priority,
            "rr" => {
                if quantum == 0 {
                    return Err(PolicyError::InvalidQuantum);
                }
                Policy::RoundRobin { quantum }
            }
            "mlq" => Policy::Mlq,
            "mlfq" => Policy::Mlfq,
            "lottery" => Policy::Lottery {
                seed: DEFAULT_LOTTERY_SEED,
            },
            "cfs" => Policy::Cfs,
            "edf" => Policy::Edf,
            other => return Err(PolicyError::UnknownPolicy(other.to_owned())),
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "fcfs",
            Policy::Sjf => "sjf",
            Policy::Srtf => "srtf",
            Policy::Priority => "priority",
            Policy::RoundRobin { .. } => "rr",
            Policy::Mlq => "mlq",
            Policy::Mlfq => "mlfq",
            Policy::Lottery { .. } => "lottery",
            Policy::Cfs => "cfs",
            Policy::Edf => "edf",
        }
    }

    /// Runs the policy over a copy of the input. Run-state is reset up
    /// front; the caller's processes are never mutated. An empty input
    /// yields an empty trace and zero elapsed time.
    pub fn run(&self, input: &[Process]) -> SimResult {
        let mut processes: Vec<Process> = input.to_vec();
        for p in &mut processes {
            p.reset();
        }
        let mut trace = Trace::new();
        let total_time = if processes.is_empty() {
            0
        } else {
            match self {
                Policy::Fcfs => nonpreemptive::fcfs(&mut processes, &mut trace),
                Policy::Sjf => nonpreemptive::sjf(&mut processes, &mut trace),
                Policy::Srtf => srtf::schedule(&mut processes, &mut trace),
                Policy::Priority => nonpreemptive::priority(&mut processes, &mut trace),
                Policy::RoundRobin { quantum } => rr::schedule(&mut processes, &mut trace, *quantum),
                Policy::Mlq => mlq::schedule(&mut processes, &mut trace),
                Policy::Mlfq => mlfq::schedule(&mut processes, &mut trace),
                Policy::Lottery { seed } => {
                    let mut rng = StdRng::seed_from_u64(*seed);
                    lottery::schedule(&mut processes, &mut trace, &mut rng)
                }
                Policy::Cfs => cfs::schedule(&mut processes, &mut trace),
                Policy::Edf => edf::schedule(&mut processes, &mut trace),
            }
        };
        debug!(
            "{} finished after {} ticks over {} processes",
            self.name(),
            total_time,
            processes.len()
        );
        SimResult {
            processes,
            trace,
            total_time,
        }
    }
}
