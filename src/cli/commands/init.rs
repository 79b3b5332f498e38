//! Init command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{save_config, DistillConfig, InitArgs};

/// Template with every optional field at its default
pub fn template(args: &InitArgs) -> DistillConfig {
    DistillConfig::new(args.ckpt_dir.clone(), args.f_divergence)
}

pub fn run_init(args: InitArgs, level: LogLevel) -> Result<(), String> {
    let config = template(&args);

    match &args.output {
        Some(path) => {
            save_config(&config, path, args.force).map_err(|e| e.to_string())?;
            log(
                level,
                LogLevel::Normal,
                &format!("Configuration written to: {}", path.display()),
            );
        }
        None => {
            let yaml = config.to_yaml().map_err(|e| e.to_string())?;
            print!("{yaml}");
        }
    }

    Ok(())
}
