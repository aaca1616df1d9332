//! Subcommand drivers.
//!
//! Each driver writes its user-facing report to `out` and returns any
//! failure to `main`, which exits non-zero.

use std::fs;
use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};

use cover_ir::parse::parse_instance;
use cover_ir::validate::{check_extension, PathRole};
use cover_solver::{generate, solve, verify_cover};

use crate::cli::{GenerateArgs, SolveArgs};
use crate::report::{render_solution, write_json, INSTANCE_INDENT, SOLUTION_INDENT};

/// `setcover solve`
pub fn solve_command(args: &SolveArgs, out: &mut dyn Write) -> Result<()> {
    check_extension(&args.filepath, PathRole::Input)?;
    if let Some(output) = &args.output {
        check_extension(output, PathRole::Output)?;
    }

    let json = fs::read_to_string(&args.filepath)
        .with_context(|| format!("failed to read {}", args.filepath.display()))?;
    let collection = parse_instance(&json)
        .with_context(|| format!("invalid instance in {}", args.filepath.display()))?;
    writeln!(out, "Original cover has {} subsets.", collection.len())?;

    let config = args.solver_config();
    let start = Instant::now();
    let solution = solve(&collection, &config)?;
    let elapsed = start.elapsed();

    writeln!(out, "Greedy solution requires {} subsets.", solution.len())?;
    writeln!(out, "Execution took {:.4} seconds.", elapsed.as_secs_f64())?;

    let check = verify_cover(&collection, &solution);
    if !check.is_valid() {
        warn!(?check, "solution failed verification");
    }

    match &args.output {
        None => write!(out, "{}", render_solution(&solution))?,
        Some(path) => {
            write_json(path, &solution, SOLUTION_INDENT)?;
            info!(path = %path.display(), "solution written");
            writeln!(out, "Solution written to {}.", path.display())?;
        }
    }
    Ok(())
}

/// `setcover generate`
pub fn generate_command(args: &GenerateArgs, out: &mut dyn Write) -> Result<()> {
    let config = args.generator_config()?;
    config.check()?;
    check_extension(&args.output, PathRole::Output)?;

    let generated = generate(&config)?;
    writeln!(out, "Generating {} subsets...", generated.collection.len())?;
    info!(seed = generated.seed, "instance generated");

    write_json(&args.output, &generated.collection, INSTANCE_INDENT)
}
