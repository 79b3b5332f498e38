//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! seaweed-apt validate configs/seaweed_apt.yaml --detailed
//! seaweed-apt info configs/seaweed_apt.yaml --format json
//! seaweed-apt show configs/seaweed_apt.yaml --learning-rate 1e-5 --use-wandb no
//! seaweed-apt plan configs/seaweed_apt.yaml --steps-per-epoch 1200
//! seaweed-apt init --output distill.yaml --f-divergence jensen-shannon
//! ```

mod args;
mod types;


pub use args::{
    apply_overrides, parse_args, Cli, Command, InfoArgs, InitArgs, OverrideArgs, PlanArgs,
    ShowArgs, ValidateArgs,
};
pub use types::OutputFormat;
