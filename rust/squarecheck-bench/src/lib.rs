//! squarecheck benchmark runner
//!
//! Times the naive and indexed checkers on the sample inputs, times the
//! collection-growth workloads, and renders the results as text, JSON or
//! CSV.

pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod runner;

pub use config::BenchConfig;
pub use error::{BenchError, ErrorChain};
pub use report::{Measurement, OutputFormat, Report, Suite};
pub use runner::run;
