//! Core CLI types - Cli, Command, argument structs and overrides

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::config::options::FDivergence;
use crate::config::schema::{parse_bool, DistillConfig};

/// Seaweed-APT: configuration tooling for video diffusion distillation
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "seaweed-apt")]
#[command(version)]
#[command(
    about = "Validate, inspect and generate configurations for f-divergence distillation of text-to-video diffusion models"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Validate a configuration file
    Validate(ValidateArgs),

    /// Display a summary of a configuration
    Info(InfoArgs),

    /// Print the configuration after applying command-line overrides
    Show(ShowArgs),

    /// Print the checkpoint and learning-rate schedule a run would follow
    Plan(PlanArgs),

    /// Write a configuration template with every default filled in
    Init(InitArgs),
}

/// Command-line overrides; a flag, when given, wins over the file
#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct OverrideArgs {
    /// Override base model checkpoint directory
    #[arg(long)]
    pub ckpt_dir: Option<PathBuf>,

    /// Override output directory for checkpoints
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Override accelerator index
    #[arg(long)]
    pub device_id: Option<u32>,

    /// Override number of epochs
    #[arg(short = 'e', long)]
    pub num_epochs: Option<u32>,

    /// Override generator learning rate
    #[arg(long)]
    pub learning_rate: Option<f64>,

    /// Override classifier-free guidance scale
    #[arg(long)]
    pub cfg_scale: Option<f64>,

    /// Override batch size
    #[arg(short, long)]
    pub batch_size: Option<u32>,

    /// Override experiment tracking toggle (true/false, yes/no, 1/0)
    #[arg(long, value_parser = parse_bool)]
    pub use_wandb: Option<bool>,

    /// Override experiment tracking project
    #[arg(long)]
    pub wandb_project: Option<String>,

    /// Override experiment tracking run name
    #[arg(long)]
    pub wandb_run_name: Option<String>,

    /// Override checkpoint save period in steps
    #[arg(long)]
    pub save_interval: Option<u64>,
}

impl OverrideArgs {
    /// Whether any override flag was given.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show detailed configuration summary
    #[arg(short, long)]
    pub detailed: bool,

    /// Also check that ckpt_dir and the parent of output_dir exist
    #[arg(long)]
    pub check_paths: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the show command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ShowArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (json or yaml; text prints yaml)
    #[arg(short, long, default_value = "yaml")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

/// Arguments for the plan command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PlanArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Optimizer steps per epoch (dataset size / effective batch size)
    #[arg(long)]
    pub steps_per_epoch: u64,

    /// Number of evenly spaced learning-rate samples to print
    #[arg(long, default_value_t = 5)]
    pub preview: usize,

    /// Output format (text, json or yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

/// Arguments for the init command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InitArgs {
    /// Output path (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Base model checkpoint directory to put in the template
    #[arg(long, default_value = "./Wan2.1-T2V-1.3B")]
    pub ckpt_dir: PathBuf,

    /// Divergence family to put in the template
    #[arg(long, default_value = "reverse-kl")]
    pub f_divergence: FDivergence,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a configuration
pub fn apply_overrides(config: &mut DistillConfig, args: &OverrideArgs) {
    if let Some(ckpt_dir) = &args.ckpt_dir {
        config.ckpt_dir = ckpt_dir.clone();
    }
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = output_dir.clone();
    }
    if let Some(device_id) = args.device_id {
        config.device_id = device_id;
    }
    if let Some(num_epochs) = args.num_epochs {
        config.num_epochs = num_epochs;
    }
    if let Some(lr) = args.learning_rate {
        config.learning_rate = lr;
    }
    if let Some(cfg_scale) = args.cfg_scale {
        config.cfg_scale = cfg_scale;
    }
    if let Some(batch_size) = args.batch_size {
        config.batch_size = batch_size;
    }
    if let Some(use_wandb) = args.use_wandb {
        config.use_wandb = use_wandb;
    }
    if let Some(project) = &args.wandb_project {
        config.wandb_project = project.clone();
    }
    if let Some(run_name) = &args.wandb_run_name {
        config.wandb_run_name = Some(run_name.clone());
    }
    if let Some(save_interval) = args.save_interval {
        config.save_interval = save_interval;
    }
}
