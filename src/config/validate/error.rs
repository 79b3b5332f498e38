//! Validation error types
//!
//! One variant per field constraint. Messages name the field, the offending
//! value and the accepted range.

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("ckpt_dir must not be empty")]
    EmptyCheckpointDir,

    #[error("Checkpoint directory does not exist: {0}")]
    CheckpointDirNotFound(String),

    #[error("Parent of output_dir does not exist: {0}")]
    OutputParentNotFound(String),

    #[error("Invalid num_epochs: {0} (must be > 0)")]
    InvalidEpochs(u32),

    #[error("Invalid learning_rate: {0} (must be finite and > 0.0)")]
    InvalidLearningRate(f64),

    #[error("Invalid batch_size: {0} (must be > 0)")]
    InvalidBatchSize(u32),

    #[error("Invalid save_interval: {0} (must be > 0)")]
    InvalidSaveInterval(u64),

    #[error("Invalid text_len: {0} (must be > 0)")]
    InvalidTextLen(u32),

    #[error("Invalid cfg_scale: {0} (must be finite and >= 0.0)")]
    InvalidCfgScale(f64),

    #[error("Invalid discriminator_lr: {0} (must be finite and > 0.0)")]
    InvalidDiscriminatorLr(f64),

    #[error("Invalid {field}: {value} (loss weights must be finite and >= 0.0)")]
    InvalidLossWeight { field: &'static str, value: f64 },

    #[error("wandb_project must not be empty when use_wandb is enabled")]
    EmptyWandbProject,

    #[error("Invalid max_grad_norm: {0} (must be finite and > 0.0)")]
    InvalidMaxGradNorm(f64),

    #[error("Invalid noise_scheduler.min_snr_gamma: {0} (must be finite and > 0.0)")]
    InvalidMinSnrGamma(f64),

    #[error("Invalid consistency_training.ema_rate: {0} (must be in the open interval (0.0, 1.0))")]
    InvalidEmaRate(f64),

    #[error("Invalid consistency_training.sigma_min: {0} (must be finite and >= 0.0)")]
    InvalidSigmaMin(f64),

    #[error(
        "Invalid consistency_training sigma range: sigma_min {sigma_min} must be < sigma_max {sigma_max}"
    )]
    InvalidSigmaRange { sigma_min: f64, sigma_max: f64 },

    #[error("Invalid consistency_training.teacher_steps: {0} (must be > 0)")]
    InvalidTeacherSteps(u32),

    #[error("Invalid data_processing.image_size: {0} (must be > 0)")]
    InvalidImageSize(u32),

    #[error("Invalid gradient_accumulation_steps: {0} (must be > 0)")]
    InvalidGradientAccumulation(u32),
}

impl ValidationError {
    /// Dotted path of the field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyCheckpointDir | Self::CheckpointDirNotFound(_) => "ckpt_dir",
            Self::OutputParentNotFound(_) => "output_dir",
            Self::InvalidEpochs(_) => "num_epochs",
            Self::InvalidLearningRate(_) => "learning_rate",
            Self::InvalidBatchSize(_) => "batch_size",
            Self::InvalidSaveInterval(_) => "save_interval",
            Self::InvalidTextLen(_) => "text_len",
            Self::InvalidCfgScale(_) => "cfg_scale",
            Self::InvalidDiscriminatorLr(_) => "discriminator_lr",
            Self::InvalidLossWeight { field, .. } => *field,
            Self::EmptyWandbProject => "wandb_project",
            Self::InvalidMaxGradNorm(_) => "max_grad_norm",
            Self::InvalidMinSnrGamma(_) => "noise_scheduler.min_snr_gamma",
            Self::InvalidEmaRate(_) => "consistency_training.ema_rate",
            Self::InvalidSigmaMin(_) => "consistency_training.sigma_min",
            Self::InvalidSigmaRange { .. } => "consistency_training.sigma_max",
            Self::InvalidTeacherSteps(_) => "consistency_training.teacher_steps",
            Self::InvalidImageSize(_) => "data_processing.image_size",
            Self::InvalidGradientAccumulation(_) => "gradient_accumulation_steps",
        }
    }
}
