//! Seaweed-APT: configuration for f-divergence distillation of text-to-video
//! diffusion models.
//!
//! A distillation run is described by one YAML document. This crate owns
//! that document: its typed schema and defaults, loading and range
//! validation, command-line overrides, and the bookkeeping a trainer derives
//! from it (checkpoint cadence, learning rate schedule, tracker metadata).
//!
//! # Example
//!
//! ```no_run
//! use seaweed_apt::{load_config, CheckpointPlan, WarmupSchedule};
//!
//! let config = load_config("configs/seaweed_apt.yaml")?;
//! let plan = CheckpointPlan::from_config(&config, 1200);
//! let schedule = WarmupSchedule::from_config(&config, plan.total_steps());
//! println!("{} steps, lr at 1000: {}", plan.total_steps(), schedule.lr_at(1000));
//! # Ok::<(), seaweed_apt::Error>(())
//! ```

pub mod checkpoint;
pub mod cli;
pub mod config;
pub mod error;
pub mod schedule;
pub mod telemetry;

pub use checkpoint::{CheckpointKind, CheckpointPlan};
pub use config::{
    load_config, read_config, save_config, validate_config, DistillConfig, FDivergence,
    MixedPrecision, SchedulerType, TimestepSpacing, ValidationError,
};
pub use error::{Error, Result};
pub use schedule::{LRScheduler, WarmupSchedule};
pub use telemetry::RunMetadata;
