//! Problem files for the linear solver: an accuracy and an augmented matrix.
//!
//! Both JSON and TOML are accepted; the format is picked from the file
//! extension.
//!
//! ## Example TOML
//!
//! ```toml
//! accuracy = 1e-4
//! matrix = [
//!     [1.0, 4.0, 1.0, 6.0],
//!     [3.0, 1.0, 1.0, 5.0],
//!     [1.0, 1.0, 5.0, 7.0],
//! ]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dynmatrix::{AugmentedMatrix, DimensionMismatch};

/// A linear system read from a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Target accuracy for the Gauss-Seidel stopping rule.
    #[serde(default = "default_accuracy")]
    pub accuracy: f64,

    /// Rows of `[A | b]`, each `n + 1` entries long.
    pub matrix: Vec<Vec<f64>>,
}

fn default_accuracy() -> f64 {
    1e-4
}

impl SystemConfig {
    /// Check the accuracy is usable as a stopping threshold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.accuracy.is_finite() || self.accuracy <= 0.0 {
            return Err(ConfigError::InvalidAccuracy(self.accuracy));
        }
        Ok(())
    }

    /// The matrix as an [`AugmentedMatrix`], after checking it is `n x (n + 1)`.
    ///
    /// ```
    /// use seidel::config::{parse_config, ConfigFormat};
    ///
    /// let cfg = parse_config(r#"{"matrix": [[2.0, 1.0, 3.0], [1.0, 3.0, 4.0]]}"#, ConfigFormat::Json).unwrap();
    /// assert_eq!(cfg.accuracy, 1e-4);
    /// assert_eq!(cfg.augmented().unwrap().order(), 2);
    /// ```
    pub fn augmented(&self) -> Result<AugmentedMatrix<f64>, ConfigError> {
        Ok(AugmentedMatrix::from_rows(&self.matrix)?)
    }
}

/// File format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON format
    Json,
    /// TOML format
    Toml,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        match ext.to_lowercase().as_str() {
            "json" => Some(ConfigFormat::Json),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }
}

/// Load a system from a file
///
/// Format is auto-detected from file extension (.json or .toml). The result
/// is validated and its shape checked before it is returned.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;

    let content = fs::read_to_string(path)?;
    let config = parse_config(&content, format)?;
    config.validate()?;
    config.augmented()?;
    log::debug!(
        "loaded {}x{} system from {}",
        config.matrix.len(),
        config.matrix.len() + 1,
        path.display()
    );
    Ok(config)
}

/// Parse a system from a string
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<SystemConfig, ConfigError> {
    match format {
        ConfigFormat::Json => {
            serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
        }
        ConfigFormat::Toml => {
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
        }
    }
}

/// Serialize a system to a string
pub fn serialize_config(config: &SystemConfig, format: ConfigFormat) -> Result<String, ConfigError> {
    match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)
            .map_err(|e| ConfigError::SerializeError(e.to_string())),
        ConfigFormat::Toml => {
            toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Serialize error
    #[error("Serialize error: {0}")]
    SerializeError(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Matrix is not `n x (n + 1)`
    #[error("Invalid matrix size: {0}")]
    Shape(#[from] DimensionMismatch),

    /// Accuracy is not a positive finite number
    #[error("Invalid accuracy: {0}")]
    InvalidAccuracy(f64),
}
