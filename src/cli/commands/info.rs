//! Info command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, DistillConfig, InfoArgs, OutputFormat};

/// One-screen summary of the settings that shape a run
pub fn format_summary(config: &DistillConfig) -> String {
    let symmetric = if config.f_divergence.is_symmetric() {
        " (symmetric)"
    } else {
        ""
    };
    let discriminator = if config.use_discriminator {
        format!(
            "on (lr {}, alpha {})",
            config.discriminator_lr, config.alpha
        )
    } else {
        "off".to_string()
    };
    let tracking = if config.use_wandb {
        match &config.wandb_run_name {
            Some(name) => format!("{} / {name}", config.wandb_project),
            None => config.wandb_project.clone(),
        }
    } else {
        "off".to_string()
    };

    [
        format!("  Base model: {}", config.ckpt_dir.display()),
        format!("  Divergence: {}{symmetric}", config.f_divergence),
        format!("  Learning rate: {}", config.learning_rate),
        format!("  Epochs: {}", config.num_epochs),
        format!(
            "  Batch size: {} (effective {})",
            config.batch_size,
            config.effective_batch_size()
        ),
        format!("  Discriminator: {discriminator}"),
        format!("  Tracking: {tracking}"),
        format!("  Precision: {}", config.mixed_precision),
        format!(
            "  Timesteps: {} spacing, {} teacher steps",
            config.noise_scheduler.timestep_spacing, config.consistency_training.teacher_steps
        ),
        format!(
            "  Resolution: {}px",
            config.data_processing.image_size
        ),
    ]
    .join("\n")
}

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let config = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    match args.format {
        OutputFormat::Json => {
            let json = config.to_json().map_err(|e| e.to_string())?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = config.to_yaml().map_err(|e| e.to_string())?;
            print!("{yaml}");
        }
        OutputFormat::Text => {
            log(
                level,
                LogLevel::Normal,
                &format!("Configuration: {}", args.config.display()),
            );
            log(level, LogLevel::Normal, &format_summary(&config));
        }
    }

    Ok(())
}
