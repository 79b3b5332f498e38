//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, validate_paths, DistillConfig, ValidateArgs};

/// Format model and output locations as a string
pub fn format_model_info(config: &DistillConfig) -> String {
    format!(
        "  Checkpoint dir: {}\n  Output dir: {}\n  Device: {}",
        config.ckpt_dir.display(),
        config.output_dir.display(),
        config.device_id
    )
}

/// Format distillation objective as a string
pub fn format_objective_info(config: &DistillConfig) -> String {
    let symmetry = if config.f_divergence.is_symmetric() {
        "symmetric"
    } else {
        "asymmetric"
    };
    let mut lines = vec![
        format!("  f-divergence: {} ({symmetry})", config.f_divergence),
        format!("  Divergence weight (beta): {}", config.beta),
    ];
    if config.use_discriminator {
        lines.push(format!("  GAN weight (alpha): {}", config.alpha));
        lines.push(format!("  Discriminator lr: {}", config.discriminator_lr));
    } else {
        lines.push("  Discriminator: disabled".to_string());
    }
    lines.push(format!("  CFG scale: {}", config.cfg_scale));
    lines.join("\n")
}

/// Format optimizer configuration as a string
pub fn format_optimizer_info(config: &DistillConfig) -> String {
    let mut lines = vec![
        format!("  Learning rate: {}", config.learning_rate),
        format!(
            "  Scheduler: {} (warmup {} steps)",
            config.scheduler_type, config.warmup_steps
        ),
    ];
    if config.use_gradient_clipping {
        lines.push(format!("  Gradient clipping: {}", config.max_grad_norm));
    }
    lines.join("\n")
}

/// Format training loop configuration as a string
pub fn format_training_info(config: &DistillConfig) -> String {
    format!(
        "  Epochs: {}\n  Batch size: {} x {} accumulation = {}\n  Save interval: {} steps\n  Mixed precision: {}",
        config.num_epochs,
        config.batch_size,
        config.gradient_accumulation_steps,
        config.effective_batch_size(),
        config.save_interval,
        config.mixed_precision
    )
}

/// Format consistency and noise settings as a string
pub fn format_consistency_info(config: &DistillConfig) -> String {
    let ct = &config.consistency_training;
    let ns = &config.noise_scheduler;
    format!(
        "  Consistency:\n    EMA rate: {}\n    Sigma: [{}, {}]\n    Teacher steps: {}\n  Noise scheduler:\n    Min-SNR gamma: {}\n    Timestep spacing: {}",
        ct.ema_rate, ct.sigma_min, ct.sigma_max, ct.teacher_steps, ns.min_snr_gamma, ns.timestep_spacing
    )
}

/// Format data pipeline settings as a string
pub fn format_data_info(config: &DistillConfig) -> String {
    let dp = &config.data_processing;
    format!(
        "  Image size: {}\n  Center crop: {}\n  Random flip: {}\n  Cache latents: {}\n  Text length: {}",
        dp.image_size, dp.center_crop, dp.random_flip, config.cache_latents, config.text_len
    )
}

/// Format experiment tracking as a string, if enabled
pub fn format_tracking_info(config: &DistillConfig) -> Option<String> {
    config.use_wandb.then(|| {
        let mut lines = vec![
            "  Tracking:".to_string(),
            format!("    Project: {}", config.wandb_project),
        ];
        if let Some(name) = &config.wandb_run_name {
            lines.push(format!("    Run: {name}"));
        }
        lines.join("\n")
    })
}

/// Print detailed configuration summary
pub fn print_detailed_summary(config: &DistillConfig) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_model_info(config));
    println!();
    println!("{}", format_objective_info(config));
    println!();
    println!("{}", format_optimizer_info(config));
    println!();
    println!("{}", format_training_info(config));
    println!();
    println!("{}", format_consistency_info(config));
    println!();
    println!("{}", format_data_info(config));

    if let Some(tracking) = format_tracking_info(config) {
        println!();
        println!("{tracking}");
    }
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let config = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    if args.check_paths {
        validate_paths(&config).map_err(|e| format!("Path check failed: {e}"))?;
    }

    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed && level != LogLevel::Quiet {
        print_detailed_summary(&config);
    }

    Ok(())
}
