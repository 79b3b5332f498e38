//! Unit tests for configuration validation

use super::error::ValidationError;
use super::validator::{validate_config, validate_paths};
use crate::config::options::FDivergence;
use crate::config::schema::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn create_valid_config() -> DistillConfig {
    DistillConfig::new("./Wan2.1-T2V-1.3B", FDivergence::ReverseKl)
}

#[test]
fn test_valid_config() {
    let config = create_valid_config();
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_empty_ckpt_dir() {
    let mut config = create_valid_config();
    config.ckpt_dir = PathBuf::new();
    let err = validate_config(&config).unwrap_err();
    assert_eq!(err, ValidationError::EmptyCheckpointDir);
    assert_eq!(err.field(), "ckpt_dir");
}

#[test]
fn test_invalid_batch_size() {
    let mut config = create_valid_config();
    config.batch_size = 0;
    let err = validate_config(&config).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidBatchSize(0)));
    assert!(err.to_string().contains("batch_size"));
}

#[test]
fn test_invalid_epochs() {
    let mut config = create_valid_config();
    config.num_epochs = 0;
    let err = validate_config(&config).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidEpochs(0)));
}

#[test]
fn test_invalid_learning_rate() {
    let mut config = create_valid_config();
    config.learning_rate = 0.0;
    let err = validate_config(&config).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidLearningRate(_)));

    config.learning_rate = -1e-4;
    let err = validate_config(&config).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidLearningRate(_)));

    config.learning_rate = f64::NAN;
    let err = validate_config(&config).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidLearningRate(_)));
}

#[test]
fn test_invalid_save_interval() {
    let mut config = create_valid_config();
    config.save_interval = 0;
    let err = validate_config(&config).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidSaveInterval(0)));
}

#[test]
fn test_invalid_text_len() {
    let mut config = create_valid_config();
    config.text_len = 0;
    let err = validate_config(&config).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidTextLen(0)));
}

#[test]
fn test_cfg_scale_zero_is_allowed() {
    let mut config = create_valid_config();
    config.cfg_scale = 0.0;
    assert!(validate_config(&config).is_ok());

    config.cfg_scale = -1.0;
    let err = validate_config(&config).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidCfgScale(_)));
}

#[test]
fn test_invalid_discriminator_lr() {
    let mut config = create_valid_config();
    config.discriminator_lr = 0.0;
    let err = validate_config(&config).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidDiscriminatorLr(_)));
}

#[test]
fn test_invalid_loss_weights() {
    let mut config = create_valid_config();
    config.alpha = -0.5;
    let err = validate_config(&config).unwrap_err();
    assert_eq!(err.field(), "alpha");

    config.alpha = 0.0;
    config.beta = f64::INFINITY;
    let err = validate_config(&config).unwrap_err();
    assert_eq!(err.field(), "beta");
}

#[test]
fn test_wandb_project_required_only_when_enabled() {
    let mut config = create_valid_config();
    config.wandb_project = "  ".to_string();
    assert!(validate_config(&config).is_ok());

    config.use_wandb = true;
    let err = validate_config(&config).unwrap_err();
    assert_eq!(err, ValidationError::EmptyWandbProject);
}

#[test]
fn test_invalid_max_grad_norm() {
    let mut config = create_valid_config();
    config.max_grad_norm = 0.0;
    let err = validate_config(&config).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidMaxGradNorm(_)));
}

#[test]
fn test_invalid_min_snr_gamma() {
    let mut config = create_valid_config();
    config.noise_scheduler.min_snr_gamma = 0.0;
    let err = validate_config(&config).unwrap_err();
    assert_eq!(err.field(), "noise_scheduler.min_snr_gamma");
}

#[test]
fn test_ema_rate_bounds_are_exclusive() {
    let mut config = create_valid_config();
    for rate in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
        config.consistency_training.ema_rate = rate;
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidEmaRate(_)), "{rate}");
    }

    config.consistency_training.ema_rate = 0.9999;
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_sigma_min_must_be_below_sigma_max() {
    let mut config = create_valid_config();
    config.consistency_training.sigma_min = 80.0;
    config.consistency_training.sigma_max = 80.0;
    let err = validate_config(&config).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidSigmaRange { .. }));

    config.consistency_training.sigma_min = 100.0;
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("sigma_min 100"));
}

#[test]
fn test_negative_sigma_min() {
    let mut config = create_valid_config();
    config.consistency_training.sigma_min = -0.1;
    let err = validate_config(&config).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidSigmaMin(_)));
}

#[test]
fn test_infinite_sigma_max() {
    let mut config = create_valid_config();
    config.consistency_training.sigma_max = f64::INFINITY;
    let err = validate_config(&config).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidSigmaRange { .. }));
}

#[test]
fn test_invalid_teacher_steps() {
    let mut config = create_valid_config();
    config.consistency_training.teacher_steps = 0;
    let err = validate_config(&config).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidTeacherSteps(0)));
}

#[test]
fn test_invalid_image_size() {
    let mut config = create_valid_config();
    config.data_processing.image_size = 0;
    let err = validate_config(&config).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidImageSize(0)));
}

#[test]
fn test_invalid_gradient_accumulation() {
    let mut config = create_valid_config();
    config.gradient_accumulation_steps = 0;
    let err = validate_config(&config).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidGradientAccumulation(0)));
}

#[test]
fn test_first_failure_wins() {
    let mut config = create_valid_config();
    config.batch_size = 0;
    config.gradient_accumulation_steps = 0;
    let err = validate_config(&config).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidBatchSize(0)));
}

#[test]
fn test_validate_paths_missing_ckpt_dir() {
    let dir = TempDir::new().unwrap();
    let mut config = create_valid_config();
    config.ckpt_dir = dir.path().join("missing");
    let err = validate_paths(&config).unwrap_err();
    assert!(matches!(err, ValidationError::CheckpointDirNotFound(_)));
}

#[test]
fn test_validate_paths_output_parent() {
    let dir = TempDir::new().unwrap();
    let mut config = create_valid_config();
    config.ckpt_dir = dir.path().to_path_buf();

    config.output_dir = dir.path().join("out");
    assert!(validate_paths(&config).is_ok());

    config.output_dir = dir.path().join("nested").join("out");
    let err = validate_paths(&config).unwrap_err();
    assert_eq!(err.field(), "output_dir");
}
