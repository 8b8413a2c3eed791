//! The fixed scene suites and the run that writes them all

pub mod planar;
pub mod runner;
pub mod spatial;
pub mod suite;

pub use runner::{emit_values, run_all, run_suite};
pub use suite::Suite;
