//! Discrete-tick CPU scheduling simulator.
//!
//! Ten interchangeable scheduling policies run over a shared process model
//! and produce a Gantt trace plus per-process timing, from which aggregate
//! metrics are derived.

pub mod core;
pub mod scheduler;
pub mod sim;

pub use crate::core::{Metrics, Observer, Process, ProcessError, SimResult, Ticks, Trace, IDLE};
pub use scheduler::{Policy, PolicyError};
pub use sim::driver::{run, Report};
