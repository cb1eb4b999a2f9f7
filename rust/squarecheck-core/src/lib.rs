//! squarecheck core
//!
//! Two implementations of the "every negative has its square in the list"
//! predicate, the wall-clock timer used to compare them, and the sample
//! workloads driven by the benchmark runner.

pub mod checkers;
pub mod error;
pub mod growth;
pub mod moons;
pub mod samples;
pub mod timer;

pub use checkers::{negatives_squared_indexed, negatives_squared_naive, Strategy};
pub use error::SquareCheckError;
pub use moons::{MoonCount, MoonTable};
pub use timer::time_call;
