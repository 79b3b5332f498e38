//! Plan command implementation
//!
//! Dry run of the bookkeeping a training run does: how many optimizer steps,
//! which checkpoint files land where, and how the learning rate moves.

use serde_json::{json, Value};

use super::load_with_overrides;
use crate::checkpoint::CheckpointPlan;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{DistillConfig, OutputFormat, PlanArgs};
use crate::schedule::WarmupSchedule;
use crate::telemetry::RunMetadata;

/// Checkpoint paths shown before the listing is elided
const MAX_LISTED_CHECKPOINTS: usize = 10;

/// Structured plan shared by the json and yaml renderings
///
/// `checkpoints` holds at most [`MAX_LISTED_CHECKPOINTS`] paths; the full
/// number is in `checkpoint_count`.
fn plan_value(
    config: &DistillConfig,
    checkpoints: &CheckpointPlan,
    schedule: &WarmupSchedule,
    preview: usize,
) -> Value {
    let paths: Vec<String> = checkpoints
        .planned()
        .take(MAX_LISTED_CHECKPOINTS)
        .map(|kind| checkpoints.path(kind).display().to_string())
        .collect();
    let lr: Vec<_> = schedule
        .preview(preview)
        .into_iter()
        .map(|(step, lr)| json!({ "step": step, "lr": lr }))
        .collect();

    json!({
        "total_steps": checkpoints.total_steps(),
        "effective_batch_size": config.effective_batch_size(),
        "checkpoint_count": checkpoints.checkpoint_count(),
        "checkpoints": paths,
        "learning_rate": lr,
        "tracking": RunMetadata::for_enabled(config),
    })
}

fn render_plan(value: &Value, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        _ => serde_json::to_string_pretty(value)
            .map(|json| json + "\n")
            .map_err(|e| e.to_string()),
    }
}

/// Human-readable plan
pub fn format_plan(
    config: &DistillConfig,
    checkpoints: &CheckpointPlan,
    schedule: &WarmupSchedule,
    preview: usize,
) -> String {
    let count = checkpoints.checkpoint_count();
    let mut lines = vec![
        format!(
            "Total steps: {} ({} epochs)",
            checkpoints.total_steps(),
            config.num_epochs
        ),
        format!("Effective batch size: {}", config.effective_batch_size()),
        format!(
            "Checkpoints: {count} in {}",
            checkpoints.output_dir().display()
        ),
    ];

    for kind in checkpoints.planned().take(MAX_LISTED_CHECKPOINTS) {
        lines.push(format!("  {:<10} {}", kind.to_string(), checkpoints.path(kind).display()));
    }
    let listed = MAX_LISTED_CHECKPOINTS as u64;
    if count > listed {
        lines.push(format!("  ... and {} more", count - listed));
    }

    let samples = schedule.preview(preview);
    if !samples.is_empty() {
        lines.push(format!(
            "Learning rate ({}, warmup {} steps):",
            schedule.kind(),
            config.warmup_steps
        ));
        for (step, lr) in samples {
            lines.push(format!("  step {step:>8}: {lr:.3e}"));
        }
    }

    lines.join("\n")
}

pub fn run_plan(args: PlanArgs, level: LogLevel) -> Result<(), String> {
    if args.steps_per_epoch == 0 {
        return Err("--steps-per-epoch must be > 0".to_string());
    }

    let config = load_with_overrides(&args.config, &args.overrides)?;
    let checkpoints = CheckpointPlan::from_config(&config, args.steps_per_epoch);
    let schedule = WarmupSchedule::from_config(&config, checkpoints.total_steps());

    match args.format {
        OutputFormat::Json | OutputFormat::Yaml => {
            let value = plan_value(&config, &checkpoints, &schedule, args.preview);
            print!("{}", render_plan(&value, args.format)?);
        }
        OutputFormat::Text => {
            log(
                level,
                LogLevel::Normal,
                &format_plan(&config, &checkpoints, &schedule, args.preview),
            );
            if let Some(meta) = RunMetadata::for_enabled(&config) {
                log(level, LogLevel::Verbose, "Tracker run metadata:");
                log(
                    level,
                    LogLevel::Verbose,
                    &meta.to_json().map_err(|e| e.to_string())?,
                );
            }
        }
    }

    Ok(())
}
