//! Configuration validation logic
//!
//! Range checks run in document order and the first failure is returned.

use super::error::ValidationError;
use crate::config::schema::DistillConfig;

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Validate a distillation configuration
///
/// Checks:
/// - Counts and sizes are positive
/// - Rates and scales are finite and in range
/// - `sigma_min < sigma_max` and `ema_rate` lies in (0, 1)
///
/// Filesystem paths are not touched here; see [`validate_paths`].
pub fn validate_config(config: &DistillConfig) -> Result<(), ValidationError> {
    if config.ckpt_dir.as_os_str().is_empty() {
        return Err(ValidationError::EmptyCheckpointDir);
    }

    if config.num_epochs == 0 {
        return Err(ValidationError::InvalidEpochs(config.num_epochs));
    }

    if !positive(config.learning_rate) {
        return Err(ValidationError::InvalidLearningRate(config.learning_rate));
    }

    if config.batch_size == 0 {
        return Err(ValidationError::InvalidBatchSize(config.batch_size));
    }

    if config.save_interval == 0 {
        return Err(ValidationError::InvalidSaveInterval(config.save_interval));
    }

    if config.text_len == 0 {
        return Err(ValidationError::InvalidTextLen(config.text_len));
    }

    if !non_negative(config.cfg_scale) {
        return Err(ValidationError::InvalidCfgScale(config.cfg_scale));
    }

    if !positive(config.discriminator_lr) {
        return Err(ValidationError::InvalidDiscriminatorLr(
            config.discriminator_lr,
        ));
    }

    for (field, value) in [("alpha", config.alpha), ("beta", config.beta)] {
        if !non_negative(value) {
            return Err(ValidationError::InvalidLossWeight { field, value });
        }
    }

    if config.use_wandb && config.wandb_project.trim().is_empty() {
        return Err(ValidationError::EmptyWandbProject);
    }

    if !positive(config.max_grad_norm) {
        return Err(ValidationError::InvalidMaxGradNorm(config.max_grad_norm));
    }

    let noise = &config.noise_scheduler;
    if !positive(noise.min_snr_gamma) {
        return Err(ValidationError::InvalidMinSnrGamma(noise.min_snr_gamma));
    }

    let consistency = &config.consistency_training;
    // NaN fails both comparisons
    if !(consistency.ema_rate > 0.0 && consistency.ema_rate < 1.0) {
        return Err(ValidationError::InvalidEmaRate(consistency.ema_rate));
    }

    if !non_negative(consistency.sigma_min) {
        return Err(ValidationError::InvalidSigmaMin(consistency.sigma_min));
    }

    if !(consistency.sigma_max.is_finite() && consistency.sigma_min < consistency.sigma_max) {
        return Err(ValidationError::InvalidSigmaRange {
            sigma_min: consistency.sigma_min,
            sigma_max: consistency.sigma_max,
        });
    }

    if consistency.teacher_steps == 0 {
        return Err(ValidationError::InvalidTeacherSteps(
            consistency.teacher_steps,
        ));
    }

    if config.data_processing.image_size == 0 {
        return Err(ValidationError::InvalidImageSize(
            config.data_processing.image_size,
        ));
    }

    if config.gradient_accumulation_steps == 0 {
        return Err(ValidationError::InvalidGradientAccumulation(
            config.gradient_accumulation_steps,
        ));
    }

    Ok(())
}

/// Check that the paths a trainer will touch are usable on this machine
///
/// `ckpt_dir` must exist, and `output_dir` must either exist or have an
/// existing parent so it can be created.
pub fn validate_paths(config: &DistillConfig) -> Result<(), ValidationError> {
    if !config.ckpt_dir.exists() {
        return Err(ValidationError::CheckpointDirNotFound(
            config.ckpt_dir.display().to_string(),
        ));
    }

    if !config.output_dir.exists() {
        if let Some(parent) = config.output_dir.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(ValidationError::OutputParentNotFound(
                    parent.display().to_string(),
                ));
            }
        }
    }

    Ok(())
}
