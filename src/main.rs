//! Seaweed-APT CLI
//!
//! Configuration tooling for f-divergence distillation runs.
//!
//! # Usage
//!
//! ```bash
//! # Validate config
//! seaweed-apt validate configs/seaweed_apt.yaml --detailed
//!
//! # Show config info
//! seaweed-apt info configs/seaweed_apt.yaml
//!
//! # Print the effective config after overrides
//! seaweed-apt show configs/seaweed_apt.yaml --num-epochs 3 --use-wandb false
//!
//! # Preview checkpoints and learning rate
//! seaweed-apt plan configs/seaweed_apt.yaml --steps-per-epoch 1200
//!
//! # Write a template
//! seaweed-apt init --output distill.yaml
//! ```

use clap::Parser;
use seaweed_apt::cli::{init_tracing, run_command, Cli, LogLevel};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(LogLevel::from_flags(cli.verbose, cli.quiet));

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
