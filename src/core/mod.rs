pub mod metrics;
pub mod observer;
pub mod process;
pub mod trace;

pub use metrics::Metrics;
pub use observer::Observer;
pub use process::{Process, ProcessError, SimResult, Ticks};
pub use trace::{Segment, Trace, IDLE};
