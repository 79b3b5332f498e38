//! Configuration validation
//!
//! Checks field ranges on a parsed [`DistillConfig`](crate::config::DistillConfig)
//! before it is handed to a trainer.

mod error;
mod validator;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;

pub use error::ValidationError;
pub use validator::{validate_config, validate_paths};
