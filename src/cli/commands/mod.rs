//! CLI command implementations

mod info;
mod init;
mod plan;
mod show;
mod validate;


use crate::cli::LogLevel;
use crate::config::{
    apply_overrides, read_config, validate_config, Cli, Command, DistillConfig, OverrideArgs,
};
use std::path::Path;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
        Command::Show(args) => show::run_show(args, log_level),
        Command::Plan(args) => plan::run_plan(args, log_level),
        Command::Init(args) => init::run_init(args, log_level),
    }
}

/// Read a config, apply overrides, then validate the result
fn load_with_overrides(path: &Path, overrides: &OverrideArgs) -> Result<DistillConfig, String> {
    let mut config = read_config(path).map_err(|e| format!("Config error: {e}"))?;
    if !overrides.is_empty() {
        tracing::debug!(?overrides, "applying command-line overrides");
        apply_overrides(&mut config, overrides);
    }
    validate_config(&config).map_err(|e| format!("Validation failed: {e}"))?;
    Ok(config)
}
