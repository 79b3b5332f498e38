//! YAML schema for the distillation training configuration
//!
//! The document is flat apart from three nested groups (`noise_scheduler`,
//! `consistency_training`, `data_processing`). Only `ckpt_dir` and
//! `f_divergence` are required; every other field has a default, and an
//! omitted or partially written group is completed from its defaults.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

use super::options::{FDivergence, MixedPrecision, SchedulerType, TimestepSpacing};

/// Parse a boolean the way the training scripts accept it on the command line.
///
/// Accepts `true/false`, `yes/no`, `t/f`, `y/n` and `1/0`, case-insensitively.
pub fn parse_bool(s: &str) -> Result<bool, String> {
    match s.trim().to_lowercase().as_str() {
        "true" | "yes" | "t" | "y" | "1" => Ok(true),
        "false" | "no" | "f" | "n" | "0" => Ok(false),
        other => Err(format!(
            "expected a boolean (true/false, yes/no, 1/0), got '{other}'"
        )),
    }
}

/// Deserialize a bool from a YAML boolean, an integer 0/1 or a quoted string.
fn deserialize_bool_lenient<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolLike {
        Bool(bool),
        Int(u64),
        Str(String),
    }

    match BoolLike::deserialize(deserializer)? {
        BoolLike::Bool(b) => Ok(b),
        BoolLike::Int(0) => Ok(false),
        BoolLike::Int(1) => Ok(true),
        BoolLike::Int(other) => Err(serde::de::Error::custom(format!(
            "expected a boolean, got integer {other}"
        ))),
        BoolLike::Str(s) => parse_bool(&s).map_err(serde::de::Error::custom),
    }
}

/// Complete distillation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DistillConfig {
    /// Base model checkpoint directory
    pub ckpt_dir: PathBuf,

    /// Where checkpoints of the distilled model are written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Accelerator index used by the trainer
    #[serde(default)]
    pub device_id: u32,

    /// Training epochs
    #[serde(default = "default_num_epochs")]
    pub num_epochs: u32,

    /// Generator learning rate
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,

    #[serde(default = "default_batch_size")]
    pub batch_size: u32,

    /// Checkpoint save period in optimizer steps
    #[serde(default = "default_save_interval")]
    pub save_interval: u64,

    /// Negative prompt used for the unconditional branch of CFG
    #[serde(default)]
    pub sample_neg_prompt: String,

    /// Maximum prompt length in tokens
    #[serde(default = "default_text_len")]
    pub text_len: u32,

    /// Classifier-free guidance scale applied to the teacher
    #[serde(default = "default_cfg_scale")]
    pub cfg_scale: f64,

    /// Divergence family used as the distillation objective
    pub f_divergence: FDivergence,

    /// Enables the adversarial loss term
    #[serde(
        default = "default_true",
        deserialize_with = "deserialize_bool_lenient"
    )]
    pub use_discriminator: bool,

    #[serde(default = "default_discriminator_lr")]
    pub discriminator_lr: f64,

    /// Weight on the GAN loss
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Weight on the divergence loss
    #[serde(default = "default_beta")]
    pub beta: f64,

    #[serde(default, deserialize_with = "deserialize_bool_lenient")]
    pub use_wandb: bool,

    #[serde(default = "default_wandb_project")]
    pub wandb_project: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wandb_run_name: Option<String>,

    #[serde(
        default = "default_true",
        deserialize_with = "deserialize_bool_lenient"
    )]
    pub use_gradient_clipping: bool,

    #[serde(default = "default_max_grad_norm")]
    pub max_grad_norm: f64,

    #[serde(default)]
    pub warmup_steps: u64,

    #[serde(default)]
    pub scheduler_type: SchedulerType,

    #[serde(default)]
    pub noise_scheduler: NoiseSchedulerConfig,

    #[serde(default)]
    pub consistency_training: ConsistencyTrainingConfig,

    #[serde(default)]
    pub data_processing: DataProcessingConfig,

    /// Precompute VAE latents once instead of encoding every step
    #[serde(default, deserialize_with = "deserialize_bool_lenient")]
    pub cache_latents: bool,

    #[serde(default)]
    pub mixed_precision: MixedPrecision,

    #[serde(default = "default_grad_accum")]
    pub gradient_accumulation_steps: u32,
}

impl DistillConfig {
    /// Create a configuration with every optional field at its default.
    pub fn new(ckpt_dir: impl Into<PathBuf>, f_divergence: FDivergence) -> Self {
        Self {
            ckpt_dir: ckpt_dir.into(),
            output_dir: default_output_dir(),
            device_id: 0,
            num_epochs: default_num_epochs(),
            learning_rate: default_learning_rate(),
            batch_size: default_batch_size(),
            save_interval: default_save_interval(),
            sample_neg_prompt: String::new(),
            text_len: default_text_len(),
            cfg_scale: default_cfg_scale(),
            f_divergence,
            use_discriminator: true,
            discriminator_lr: default_discriminator_lr(),
            alpha: default_alpha(),
            beta: default_beta(),
            use_wandb: false,
            wandb_project: default_wandb_project(),
            wandb_run_name: None,
            use_gradient_clipping: true,
            max_grad_norm: default_max_grad_norm(),
            warmup_steps: 0,
            scheduler_type: SchedulerType::default(),
            noise_scheduler: NoiseSchedulerConfig::default(),
            consistency_training: ConsistencyTrainingConfig::default(),
            data_processing: DataProcessingConfig::default(),
            cache_latents: false,
            mixed_precision: MixedPrecision::default(),
            gradient_accumulation_steps: default_grad_accum(),
        }
    }

    /// Samples contributing to one optimizer update.
    pub fn effective_batch_size(&self) -> u64 {
        u64::from(self.batch_size) * u64::from(self.gradient_accumulation_steps)
    }
}

/// Noise scheduler settings for the diffusion process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseSchedulerConfig {
    /// Min-SNR loss weighting gamma
    pub min_snr_gamma: f64,

    pub timestep_spacing: TimestepSpacing,
}

impl Default for NoiseSchedulerConfig {
    fn default() -> Self {
        Self {
            min_snr_gamma: 5.0,
            timestep_spacing: TimestepSpacing::default(),
        }
    }
}

/// Consistency distillation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsistencyTrainingConfig {
    /// EMA decay for the target network, in (0, 1)
    pub ema_rate: f64,

    /// Lower end of the noise level range
    pub sigma_min: f64,

    /// Upper end of the noise level range
    pub sigma_max: f64,

    /// Sampling steps taken by the teacher when producing targets
    pub teacher_steps: u32,
}

impl Default for ConsistencyTrainingConfig {
    fn default() -> Self {
        Self {
            ema_rate: 0.995,
            sigma_min: 0.002,
            sigma_max: 80.0,
            teacher_steps: 50,
        }
    }
}

/// Input preprocessing applied by the data pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataProcessingConfig {
    /// Square resolution frames are resized to
    pub image_size: u32,

    #[serde(deserialize_with = "deserialize_bool_lenient")]
    pub center_crop: bool,

    #[serde(deserialize_with = "deserialize_bool_lenient")]
    pub random_flip: bool,
}

impl Default for DataProcessingConfig {
    fn default() -> Self {
        Self {
            image_size: 512,
            center_crop: true,
            random_flip: false,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./output")
}

fn default_num_epochs() -> u32 {
    10
}

fn default_learning_rate() -> f64 {
    5e-6
}

fn default_batch_size() -> u32 {
    8
}

fn default_save_interval() -> u64 {
    350
}

fn default_text_len() -> u32 {
    512
}

fn default_cfg_scale() -> f64 {
    7.5
}

fn default_discriminator_lr() -> f64 {
    1e-5
}

fn default_alpha() -> f64 {
    0.5
}

fn default_beta() -> f64 {
    1.0
}

fn default_wandb_project() -> String {
    "seaweed-apt-distillation".to_string()
}

fn default_max_grad_norm() -> f64 {
    1.0
}

fn default_grad_accum() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_config() {
        let yaml = r"
ckpt_dir: ./Wan2.1-T2V-1.3B
f_divergence: reverse-kl
";

        let config: DistillConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.ckpt_dir, PathBuf::from("./Wan2.1-T2V-1.3B"));
        assert_eq!(config.f_divergence, FDivergence::ReverseKl);
        assert_eq!(
            config,
            DistillConfig::new("./Wan2.1-T2V-1.3B", FDivergence::ReverseKl)
        );
    }

    #[test]
    fn test_defaults_follow_trainer_script() {
        let config = DistillConfig::new("ckpt", FDivergence::ForwardKl);
        assert_eq!(config.num_epochs, 10);
        assert_eq!(config.learning_rate, 5e-6);
        assert_eq!(config.cfg_scale, 7.5);
        assert_eq!(config.batch_size, 8);
        assert_eq!(config.save_interval, 350);
        assert_eq!(config.output_dir, PathBuf::from("./output"));
        assert_eq!(config.wandb_project, "seaweed-apt-distillation");
        assert!(config.wandb_run_name.is_none());
        assert!(!config.use_wandb);
        assert_eq!(config.consistency_training.ema_rate, 0.995);
        assert_eq!(config.mixed_precision, MixedPrecision::Bf16);
    }

    #[test]
    fn test_missing_ckpt_dir_is_an_error() {
        let err = serde_yaml::from_str::<DistillConfig>("f_divergence: forward-kl\n").unwrap_err();
        assert!(err.to_string().contains("ckpt_dir"));
    }

    #[test]
    fn test_missing_f_divergence_is_an_error() {
        let err = serde_yaml::from_str::<DistillConfig>("ckpt_dir: ckpt\n").unwrap_err();
        assert!(err.to_string().contains("f_divergence"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let yaml = r"
ckpt_dir: ckpt
f_divergence: reverse-kl
learning_rat: 0.001
";
        let err = serde_yaml::from_str::<DistillConfig>(yaml).unwrap_err();
        assert!(err.to_string().contains("learning_rat"));
    }

    #[test]
    fn test_unknown_field_in_group_is_rejected() {
        let yaml = r"
ckpt_dir: ckpt
f_divergence: reverse-kl
consistency_training:
  ema_decay: 0.99
";
        assert!(serde_yaml::from_str::<DistillConfig>(yaml).is_err());
    }

    #[test]
    fn test_partial_group_is_completed_from_defaults() {
        let yaml = r"
ckpt_dir: ckpt
f_divergence: jensen-shannon
consistency_training:
  sigma_max: 120.0
data_processing:
  random_flip: true
";

        let config: DistillConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.consistency_training.sigma_max, 120.0);
        assert_eq!(config.consistency_training.sigma_min, 0.002);
        assert_eq!(config.consistency_training.teacher_steps, 50);
        assert!(config.data_processing.random_flip);
        assert!(config.data_processing.center_crop);
        assert_eq!(config.data_processing.image_size, 512);
        assert_eq!(config.noise_scheduler, NoiseSchedulerConfig::default());
    }

    #[test]
    fn test_quoted_and_word_booleans_deserialize() {
        let yaml = r#"
ckpt_dir: ckpt
f_divergence: reverse-kl
use_wandb: "yes"
use_discriminator: "false"
use_gradient_clipping: 0
cache_latents: Y
data_processing:
  center_crop: "no"
  random_flip: "1"
"#;

        let config: DistillConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.use_wandb);
        assert!(!config.use_discriminator);
        assert!(!config.use_gradient_clipping);
        assert!(config.cache_latents);
        assert!(!config.data_processing.center_crop);
        assert!(config.data_processing.random_flip);
    }

    #[test]
    fn test_garbage_boolean_is_rejected() {
        let yaml = r#"
ckpt_dir: ckpt
f_divergence: reverse-kl
use_wandb: "maybe"
"#;
        assert!(serde_yaml::from_str::<DistillConfig>(yaml).is_err());
    }

    #[test]
    fn test_negative_integer_is_rejected_at_parse_time() {
        let yaml = r"
ckpt_dir: ckpt
f_divergence: reverse-kl
warmup_steps: -10
";
        assert!(serde_yaml::from_str::<DistillConfig>(yaml).is_err());
    }

    #[test]
    fn test_parse_bool_accepts_script_spellings() {
        for truthy in ["true", "True", "YES", "t", "y", "1"] {
            assert_eq!(parse_bool(truthy), Ok(true), "{truthy}");
        }
        for falsy in ["false", "No", "F", "n", "0"] {
            assert_eq!(parse_bool(falsy), Ok(false), "{falsy}");
        }
        assert!(parse_bool("enabled").is_err());
    }

    #[test]
    fn test_effective_batch_size() {
        let mut config = DistillConfig::new("ckpt", FDivergence::ReverseKl);
        config.batch_size = 8;
        config.gradient_accumulation_steps = 4;
        assert_eq!(config.effective_batch_size(), 32);
    }

    #[test]
    fn test_run_name_omitted_when_unset() {
        let config = DistillConfig::new("ckpt", FDivergence::ReverseKl);
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(!yaml.contains("wandb_run_name"));
        assert!(yaml.contains("f_divergence: reverse-kl"));
    }
}
