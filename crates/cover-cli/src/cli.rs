use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};

use cover_solver::{GeneratorConfig, SolverConfig, TieBreak};

/// Approximate set cover
///
/// Repeatedly picks the subset covering the most uncovered elements until
/// the union of all subsets is covered. Instances are JSON objects mapping
/// subset names to arrays of integers or strings.
#[derive(Debug, Parser)]
#[command(name = "setcover")]
#[command(version, about)]
pub struct Cli {
    /// Log every greedy step to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute the approximate set cover of a JSON instance
    Solve(SolveArgs),

    /// Generate a random set cover instance
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub struct SolveArgs {
    /// The path to the JSON file that will be used as input
    #[arg(short, long)]
    pub filepath: PathBuf,

    /// JSON file in which to write the solution. No arg: console
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Prefer larger subsets when several cover equally many new elements
    #[arg(short, long)]
    pub large: bool,

    /// Score candidate subsets on all cores
    #[arg(long)]
    pub parallel: bool,
}

impl SolveArgs {
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            tie_break: if self.large {
                TieBreak::LargestSubset
            } else {
                TieBreak::FirstFound
            },
            parallel_scan: self.parallel,
        }
    }
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Universe size of integers
    #[arg(short, long, default_value_t = 1_000)]
    pub universe: usize,

    /// Bounds on number of subsets in cover
    #[arg(short, long, num_args = 2, value_names = ["LOWER", "UPPER"], default_values_t = [100, 500])]
    pub num: Vec<usize>,

    /// Bounds on size of any subset
    #[arg(short, long, num_args = 2, value_names = ["LOWER", "UPPER"], default_values_t = [10, 30])]
    pub size: Vec<usize>,

    /// RNG seed for a reproducible instance
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file to write output
    #[arg(short, long)]
    pub output: PathBuf,
}

impl GenerateArgs {
    pub fn generator_config(&self) -> Result<GeneratorConfig> {
        Ok(GeneratorConfig {
            universe: self.universe,
            num: bounds(&self.num, "--num")?,
            size: bounds(&self.size, "--size")?,
            seed: self.seed,
        })
    }
}

fn bounds(values: &[usize], flag: &str) -> Result<(usize, usize)> {
    match values {
        [lower, upper] => Ok((*lower, *upper)),
        _ => bail!("{flag} takes exactly two values, got {}", values.len()),
    }
}
