//! Show command implementation

use super::load_with_overrides;
use crate::cli::LogLevel;
use crate::config::{OutputFormat, ShowArgs};

pub fn run_show(args: ShowArgs, level: LogLevel) -> Result<(), String> {
    let config = load_with_overrides(&args.config, &args.overrides)?;

    let rendered = match args.format {
        OutputFormat::Json => config.to_json().map(|json| json + "\n"),
        OutputFormat::Text | OutputFormat::Yaml => config.to_yaml(),
    }
    .map_err(|e| e.to_string())?;

    if level != LogLevel::Quiet {
        print!("{rendered}");
    }
    Ok(())
}
