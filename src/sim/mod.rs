pub mod driver;
pub mod workload;

pub use driver::{run, Report};
