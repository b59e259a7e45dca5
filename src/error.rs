//! Error types for double-well sampling.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sampling operations
pub type Result<T> = std::result::Result<T, McmcError>;

/// Errors raised while generating data, sampling, or reading/writing arrays.
#[derive(Debug, Error)]
pub enum McmcError {
    /// A numeric parameter is outside its valid range
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The likelihood has no defined value for zero observations
    #[error("Dataset is empty")]
    EmptyDataset,

    /// Energy evaluated to NaN or infinity
    #[error("Non-finite energy at configuration ({x1}, {x2})")]
    NonFiniteEnergy { x1: f64, x2: f64 },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Malformed numeric array file
    #[error("Parse error in {path} at line {line}: {reason}")]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

impl McmcError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }
}

/// Require `value` to be finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(McmcError::InvalidParameter {
            name,
            value,
            reason: "must be finite and > 0",
        })
    }
}

/// Require `value` to be finite.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(McmcError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        })
    }
}
