//! Sampler parameters.

use serde::{Deserialize, Serialize};

/// Default standard deviation of the per-coordinate proposal
pub const DEFAULT_PROPOSAL_STD: f64 = 0.1;

/// What an iteration records when both coordinates are rejected.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RejectionPolicy {
    /// Append nothing; the output only holds accepted moves.
    #[default]
    Skip,
    /// Re-append the current configuration (standard Metropolis weighting).
    Repeat,
}

/// How the prior enters the acceptance score of a single-coordinate move.
///
/// With ΔE the likelihood energy delta and ΔP = P(trial) − P(current):
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PriorSign {
    /// score = ΔE − ΔP. Moves away from zero lower the score.
    #[default]
    Subtract,
    /// score = ΔE + ΔP, the posterior energy delta. Moves away from zero
    /// raise the score, so the prior confines the chain.
    Add,
}

impl PriorSign {
    /// Combine a likelihood delta with a prior delta.
    #[inline]
    pub fn score(self, likelihood_delta: f64, prior_delta: f64) -> f64 {
        match self {
            PriorSign::Subtract => likelihood_delta - prior_delta,
            PriorSign::Add => likelihood_delta + prior_delta,
        }
    }
}

/// Parameters for a dual-coordinate run.
#[derive(Copy, Clone, Debug)]
pub struct SamplerParams {
    /// Number of iterations (not accepted samples)
    pub n_steps: usize,
    pub proposal_std: f64,
    pub rejection: RejectionPolicy,
    pub prior_sign: PriorSign,
    /// Emit a progress event every this many iterations (0 disables)
    pub log_interval: usize,
}

impl Default for SamplerParams {
    fn default() -> Self {
        Self {
            n_steps: 10_000,
            proposal_std: DEFAULT_PROPOSAL_STD,
            rejection: RejectionPolicy::Skip,
            prior_sign: PriorSign::Subtract,
            log_interval: 1_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_prior_sign_score() {
        assert_relative_eq!(PriorSign::Subtract.score(0.2, 0.5), -0.3, epsilon = 1e-12);
        assert_relative_eq!(PriorSign::Add.score(0.2, 0.5), 0.7, epsilon = 1e-12);
        assert_eq!(SamplerParams::default().prior_sign, PriorSign::Subtract);
    }
}
