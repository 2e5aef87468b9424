//! # Settings
//!
//! Runtime configuration for the CLI.
//!
//! Values resolve in three layers, later layers winning:
//! 1. Built-in defaults
//! 2. A TOML file passed with `--config`
//! 3. Command-line flags (`--epsilon`, `--precision`)
//!
//! ```toml
//! epsilon = 1e-5
//! precision = 4
//! max_file_size = 1048576
//! ```

use mathlib_core::MathError;
use mathlib_core::primitives::EPSILON;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default size limit for operation files (10 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Default number of decimals in text output.
pub const DEFAULT_PRECISION: usize = 6;

/// Upper bound for `precision`; f32 carries about 9 significant digits.
pub const MAX_PRECISION: usize = 9;

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Tolerance used by approximate predicates.
    pub epsilon: f32,
    /// Decimals printed for floats in text mode.
    pub precision: usize,
    /// Largest accepted input file, in bytes.
    pub max_file_size: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            precision: DEFAULT_PRECISION,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, MathError> {
        let settings: Self = toml::from_str(text)
            .map_err(|e| MathError::DeserializationError(format!("Invalid settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, MathError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            MathError::IoError(format!("Cannot read settings '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Apply command-line overrides on top of these settings.
    pub fn with_overrides(
        mut self,
        epsilon: Option<f32>,
        precision: Option<usize>,
    ) -> Result<Self, MathError> {
        if let Some(epsilon) = epsilon {
            self.epsilon = epsilon;
        }
        if let Some(precision) = precision {
            self.precision = precision;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), MathError> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(MathError::InvalidParameter(format!(
                "epsilon {} must be a finite non-negative number",
                self.epsilon
            )));
        }
        if self.precision > MAX_PRECISION {
            return Err(MathError::InvalidParameter(format!(
                "precision {} exceeds maximum {}",
                self.precision, MAX_PRECISION
            )));
        }
        if self.max_file_size == 0 {
            return Err(MathError::InvalidParameter(
                "max_file_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
