//! Reading and writing configuration documents

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use super::schema::DistillConfig;
use super::validate::validate_config;
use crate::error::{Error, Result};

fn parse_yaml(content: &str, origin: &str) -> Result<DistillConfig> {
    serde_yaml::from_str(content).map_err(|e| Error::ConfigParsing {
        origin: origin.to_string(),
        message: e.to_string(),
    })
}

/// Read and parse a configuration file without range validation.
///
/// Use this when overrides are applied before validating; otherwise prefer
/// [`load_config`].
pub fn read_config<P: AsRef<Path>>(config_path: P) -> Result<DistillConfig> {
    let path = config_path.as_ref();
    debug!(path = %path.display(), "reading config");

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::ConfigNotFound { path: path.to_path_buf() });
        }
        Err(e) => {
            return Err(Error::io(format!("reading config file {}", path.display()), e));
        }
    };

    parse_yaml(&content, &path.display().to_string())
}

/// Load, parse and validate a configuration file.
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<DistillConfig> {
    let path = config_path.as_ref();
    let config = read_config(path)?;
    validate_config(&config)?;

    info!(
        path = %path.display(),
        f_divergence = %config.f_divergence,
        use_discriminator = config.use_discriminator,
        "config loaded"
    );
    Ok(config)
}

/// Write a configuration file.
///
/// Fails with [`Error::AlreadyExists`] when `path` exists and `overwrite`
/// is false.
pub fn save_config<P: AsRef<Path>>(config: &DistillConfig, path: P, overwrite: bool) -> Result<()> {
    let path = path.as_ref();
    if path.exists() && !overwrite {
        return Err(Error::AlreadyExists { path: path.to_path_buf() });
    }

    let yaml = config.to_yaml()?;
    fs::write(path, yaml)
        .map_err(|e| Error::io(format!("writing config file {}", path.display()), e))?;

    debug!(path = %path.display(), "config written");
    Ok(())
}

impl DistillConfig {
    /// Parse and validate a configuration from a YAML string.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config = parse_yaml(content, "<string>")?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Serialize to the YAML document format.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::Serialization { message: e.to_string() })
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Serialization { message: e.to_string() })
    }
}
