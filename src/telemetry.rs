//! Run metadata for the external experiment tracker
//!
//! When `use_wandb` is on, the trainer opens a run with this project, name
//! and hyperparameter map.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::config::DistillConfig;
use crate::error::{Error, Result};

/// Name recorded as `method` in every run.
pub const METHOD: &str = "f_divergence_distillation";

/// Run description handed to the tracker at start-up
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunMetadata {
    pub project: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub config: Map<String, Value>,
}

impl RunMetadata {
    pub fn from_config(config: &DistillConfig) -> Self {
        let mut map = Map::new();
        map.insert("learning_rate".into(), json!(config.learning_rate));
        map.insert("num_epochs".into(), json!(config.num_epochs));
        map.insert("cfg_scale".into(), json!(config.cfg_scale));
        map.insert("save_interval".into(), json!(config.save_interval));
        map.insert("f_divergence".into(), json!(config.f_divergence.as_str()));
        map.insert("use_discriminator".into(), json!(config.use_discriminator));
        map.insert("batch_size".into(), json!(config.batch_size));
        map.insert(
            "effective_batch_size".into(),
            json!(config.effective_batch_size()),
        );
        map.insert(
            "mixed_precision".into(),
            json!(config.mixed_precision.as_str()),
        );
        map.insert("method".into(), json!(METHOD));

        Self {
            project: config.wandb_project.clone(),
            name: config.wandb_run_name.clone(),
            config: map,
        }
    }

    /// Metadata for `config`, or `None` when tracking is disabled.
    pub fn for_enabled(config: &DistillConfig) -> Option<Self> {
        config.use_wandb.then(|| Self::from_config(config))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization { message: e.to_string() })
    }
}
