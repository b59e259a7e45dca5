//! YAML run configuration.
//!
//! Every field is optional in the file; missing ones fall back to the
//! defaults below. Example:
//!
//! ```yaml
//! n_images: 10000
//! centers: [-2.0, 2.0]
//! noise_sigma: 2.0
//! n_steps: 10000
//! initial: [-3.0, 1.0]
//! kt: 1.0
//! rejection: skip
//! prior_sign: subtract
//! seed: 42
//! grid:
//!   min: -6.0
//!   max: 6.0
//!   points: 100
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::{linspace, DEFAULT_DENSITY_FLOOR, DEFAULT_FES_KT};
use crate::error::{ensure_finite, ensure_positive, McmcError, Result};
use crate::model::{Configuration, DEFAULT_KT, DEFAULT_PRIOR_WIDTH};
use crate::sampling::{PriorSign, RejectionPolicy, SamplerParams, DEFAULT_PROPOSAL_STD};

/// Evaluation grid for free-energy curves.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    pub min: f64,
    pub max: f64,
    pub points: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min: -6.0,
            max: 6.0,
            points: 100,
        }
    }
}

/// Everything a double-well run needs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    /// Number of synthetic images
    pub n_images: usize,
    /// True centers of the wells
    pub centers: Vec<f64>,
    /// Noise added to each image
    pub noise_sigma: f64,
    pub n_steps: usize,
    pub initial: [f64; 2],
    /// Likelihood width; `None` uses `noise_sigma`
    pub sigma: Option<f64>,
    pub kt: f64,
    pub prior_width: f64,
    pub proposal_std: f64,
    pub rejection: RejectionPolicy,
    pub prior_sign: PriorSign,
    pub seed: Option<u64>,
    pub log_interval: usize,
    pub grid: GridConfig,
    pub fes_kt: f64,
    pub density_floor: f64,
    pub histogram_bins: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            n_images: 10_000,
            centers: vec![-2.0, 2.0],
            noise_sigma: 2.0,
            n_steps: 10_000,
            initial: [-3.0, 1.0],
            sigma: None,
            kt: DEFAULT_KT,
            prior_width: DEFAULT_PRIOR_WIDTH,
            proposal_std: DEFAULT_PROPOSAL_STD,
            rejection: RejectionPolicy::Skip,
            prior_sign: PriorSign::Subtract,
            seed: None,
            log_interval: 1_000,
            grid: GridConfig::default(),
            fes_kt: DEFAULT_FES_KT,
            density_floor: DEFAULT_DENSITY_FLOOR,
            histogram_bins: 50,
        }
    }
}

impl RunConfig {
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Width of the likelihood used by the sampler.
    pub fn likelihood_sigma(&self) -> f64 {
        self.sigma.unwrap_or(self.noise_sigma)
    }

    pub fn initial_configuration(&self) -> Configuration {
        Configuration::new(self.initial[0], self.initial[1])
    }

    pub fn sampler_params(&self) -> SamplerParams {
        SamplerParams {
            n_steps: self.n_steps,
            proposal_std: self.proposal_std,
            rejection: self.rejection,
            prior_sign: self.prior_sign,
            log_interval: self.log_interval,
        }
    }

    pub fn grid_points(&self) -> Vec<f64> {
        linspace(self.grid.min, self.grid.max, self.grid.points)
    }

    /// Check every parameter before any data is generated or sampled.
    pub fn validate(&self) -> Result<()> {
        if self.n_images == 0 {
            return Err(McmcError::EmptyDataset);
        }
        if self.centers.is_empty() {
            return Err(McmcError::InvalidParameter {
                name: "centers",
                value: 0.0,
                reason: "at least one center is required",
            });
        }
        for &c in &self.centers {
            ensure_finite("center", c)?;
        }
        if self.n_steps == 0 {
            return Err(McmcError::InvalidParameter {
                name: "n_steps",
                value: 0.0,
                reason: "must be at least 1",
            });
        }
        ensure_finite("x1", self.initial[0])?;
        ensure_finite("x2", self.initial[1])?;
        ensure_positive("noise_sigma", self.noise_sigma)?;
        ensure_positive("sigma", self.likelihood_sigma())?;
        ensure_positive("kt", self.kt)?;
        ensure_positive("prior_width", self.prior_width)?;
        ensure_positive("proposal_std", self.proposal_std)?;
        ensure_positive("fes_kt", self.fes_kt)?;
        if !(self.grid.min.is_finite() && self.grid.max.is_finite() && self.grid.max > self.grid.min) {
            return Err(McmcError::InvalidParameter {
                name: "grid.max",
                value: self.grid.max,
                reason: "must be finite and exceed grid.min",
            });
        }
        if self.grid.points < 2 {
            return Err(McmcError::InvalidParameter {
                name: "grid.points",
                value: self.grid.points as f64,
                reason: "need at least 2 grid points",
            });
        }
        if self.histogram_bins == 0 {
            return Err(McmcError::InvalidParameter {
                name: "histogram_bins",
                value: 0.0,
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

/// Read a `RunConfig` from a YAML file.
pub fn read_config(path: impl AsRef<Path>) -> Result<RunConfig> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| McmcError::io(path, e))?;
    let reader = std::io::BufReader::new(file);
    Ok(serde_yaml::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = RunConfig::from_yaml("n_steps: 500\nrejection: repeat\nseed: 9\n").unwrap();
        assert_eq!(config.n_steps, 500);
        assert_eq!(config.rejection, RejectionPolicy::Repeat);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.centers, vec![-2.0, 2.0]);
        assert_eq!(config.grid, GridConfig::default());
        assert_eq!(config.likelihood_sigma(), 2.0);
        assert_eq!(config.sampler_params().prior_sign, PriorSign::Subtract);
        assert!(config.validate().is_ok());

        let config = RunConfig::from_yaml("prior_sign: add\n").unwrap();
        assert_eq!(config.sampler_params().prior_sign, PriorSign::Add);
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut config = RunConfig::default();
        config.sigma = Some(1.0);
        config.grid.points = 40;
        let parsed = RunConfig::from_yaml(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(parsed.likelihood_sigma(), 1.0);
    }

    #[test]
    fn test_validate_rejects() {
        let bad = [
            RunConfig { kt: 0.0, ..RunConfig::default() },
            RunConfig { sigma: Some(-1.0), ..RunConfig::default() },
            RunConfig { prior_width: 0.0, ..RunConfig::default() },
            RunConfig { n_steps: 0, ..RunConfig::default() },
            RunConfig { n_images: 0, ..RunConfig::default() },
            RunConfig { centers: vec![], ..RunConfig::default() },
            RunConfig { initial: [f64::NAN, 0.0], ..RunConfig::default() },
            RunConfig { histogram_bins: 0, ..RunConfig::default() },
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{:?}", config);
        }
    }

    #[test]
    fn test_unknown_rejection_policy() {
        assert!(matches!(
            RunConfig::from_yaml("rejection: sometimes\n"),
            Err(McmcError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            read_config("/nonexistent/double_well.yml"),
            Err(McmcError::Io { .. })
        ));
    }
}
