use anyhow::Result;
use clap::Parser;

use cover_cli::cli::{Cli, Commands};
use cover_cli::run::{generate_command, solve_command};
use cover_cli::telemetry;

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Solve(ref args) => solve_command(args, &mut out),
        Commands::Generate(ref args) => generate_command(args, &mut out),
    }
}
