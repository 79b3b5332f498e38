//! Declarative distillation configuration
//!
//! - `schema`: typed document with defaults
//! - `validate`: range checks
//! - `cli`: command-line arguments and overrides

pub mod cli;
mod loader;
mod options;
pub mod schema;
pub mod validate;

pub use cli::{
    apply_overrides, parse_args, Cli, Command, InfoArgs, InitArgs, OutputFormat, OverrideArgs,
    PlanArgs, ShowArgs, ValidateArgs,
};
pub use loader::{load_config, read_config, save_config};
pub use options::{FDivergence, MixedPrecision, SchedulerType, TimestepSpacing};
pub use schema::{
    parse_bool, ConsistencyTrainingConfig, DataProcessingConfig, DistillConfig,
    NoiseSchedulerConfig,
};
pub use validate::{validate_config, validate_paths, ValidationError};
