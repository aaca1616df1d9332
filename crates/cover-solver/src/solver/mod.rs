pub mod greedy;
pub mod scan;
pub mod verify;

use serde::{Deserialize, Serialize};

/// How to choose among subsets that tie on newly covered elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The first tied subset in scan order.
    #[default]
    FirstFound,
    /// The tied subset with the most elements overall; earliest wins among equals.
    LargestSubset,
}

/// Engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolverConfig {
    pub tie_break: TieBreak,
    /// Compute intersection sizes on the rayon pool.
    /// Selection is identical to the sequential scan.
    pub parallel_scan: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error("Cannot solve an empty subset collection")]
    EmptyInput,

    #[error("No remaining subset covers any of the {uncovered} uncovered elements")]
    NoProgress { uncovered: usize },
}
