//! Greedy set cover.
//!
//! [`solver`] holds the engine and its selection reductions,
//! [`generate`] builds random instances to feed it.

pub mod generate;
pub mod solver;

pub use generate::{generate, GeneratedInstance, GeneratorConfig, GeneratorError};
pub use solver::greedy::solve;
pub use solver::verify::{verify_cover, CoverReport};
pub use solver::{SolveError, SolverConfig, TieBreak};
