//! Dual-coordinate Metropolis sampler.
//!
//! Each iteration proposes an independent Gaussian displacement for x1 and
//! for x2, scores the two single-coordinate trials against the cached
//! energy of the current configuration, and accepts each coordinate on its
//! own. A joint sample is recorded whenever at least one coordinate moves.

use nalgebra::DMatrix;
use rand::Rng;
use tracing::{debug, info, trace, warn};

use super::params::{RejectionPolicy, SamplerParams};
use super::traits::{DrawSource, GaussianDraws};
use crate::error::{ensure_finite, McmcError, Result};
use crate::model::{Configuration, CoordinatePrior, EnergyModel, GaussianPrior, MixtureLikelihood};

/// Which coordinates an iteration accepted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Both,
    First,
    Second,
    Neither,
}

impl StepOutcome {
    fn from_flags(first: bool, second: bool) -> Self {
        match (first, second) {
            (true, true) => StepOutcome::Both,
            (true, false) => StepOutcome::First,
            (false, true) => StepOutcome::Second,
            (false, false) => StepOutcome::Neither,
        }
    }

    pub fn accepted_any(self) -> bool {
        self != StepOutcome::Neither
    }
}

/// Bookkeeping for a run.
///
/// `iterations == appended + skipped` holds after every step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SamplingStats {
    pub iterations: usize,
    /// Entries pushed onto the sample sequence (accepted or repeated)
    pub appended: usize,
    /// Double rejections that appended nothing
    pub skipped: usize,
    /// Double rejections that re-appended the current configuration
    pub repeated: usize,
    pub accepted_first: usize,
    pub accepted_second: usize,
}

impl SamplingStats {
    /// Fraction of iterations that moved at least one coordinate.
    pub fn acceptance_rate(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            (self.appended - self.repeated) as f64 / self.iterations as f64
        }
    }

    /// Per-coordinate acceptance fractions.
    pub fn coordinate_rates(&self) -> (f64, f64) {
        if self.iterations == 0 {
            return (0.0, 0.0);
        }
        let n = self.iterations as f64;
        (self.accepted_first as f64 / n, self.accepted_second as f64 / n)
    }
}

/// Ordered sequence of recorded configurations.
#[derive(Clone, Debug, Default)]
pub struct SampleSet {
    pub samples: Vec<Configuration>,
    pub stats: SamplingStats,
}

impl SampleSet {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&Configuration> {
        self.samples.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Configuration> {
        self.samples.iter()
    }

    /// Trace of a single coordinate (0 for x1, 1 for x2).
    pub fn column(&self, axis: usize) -> Vec<f64> {
        self.samples.iter().map(|x| x[axis]).collect()
    }

    /// `len × 2` matrix, one row per sample.
    pub fn to_matrix(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.samples.len(), 2, |row, col| self.samples[row][col])
    }
}

/// Two-coordinate sampler over an energy model and a per-coordinate prior.
pub struct DualCoordinateSampler<E: EnergyModel, P: CoordinatePrior, D: DrawSource> {
    model: E,
    prior: P,
    draws: D,
    params: SamplerParams,
    current: Configuration,
    /// Energy of `current`; refreshed only when `current` changes
    energy: f64,
    samples: Vec<Configuration>,
    stats: SamplingStats,
}

impl<E: EnergyModel, P: CoordinatePrior, R: Rng> DualCoordinateSampler<E, P, GaussianDraws<R>> {
    /// Build a sampler drawing Gaussian proposals of `params.proposal_std` from `rng`.
    pub fn with_rng(
        model: E,
        prior: P,
        initial: Configuration,
        params: SamplerParams,
        rng: R,
    ) -> Result<Self> {
        let draws = GaussianDraws::new(rng, params.proposal_std)?;
        Self::new(model, prior, initial, params, draws)
    }
}

impl<E: EnergyModel, P: CoordinatePrior, D: DrawSource> DualCoordinateSampler<E, P, D> {
    /// # Errors
    /// `InvalidParameter` for a zero step count or non-finite initial
    /// coordinates, `NonFiniteEnergy` if the initial energy is not finite.
    pub fn new(
        model: E,
        prior: P,
        initial: Configuration,
        params: SamplerParams,
        draws: D,
    ) -> Result<Self> {
        if params.n_steps == 0 {
            return Err(McmcError::InvalidParameter {
                name: "n_steps",
                value: 0.0,
                reason: "must be at least 1",
            });
        }
        ensure_finite("x1", initial[0])?;
        ensure_finite("x2", initial[1])?;
        let energy = checked_energy(&model, &initial)?;

        Ok(Self {
            model,
            prior,
            draws,
            params,
            current: initial,
            energy,
            samples: Vec::with_capacity(params.n_steps),
            stats: SamplingStats::default(),
        })
    }

    pub fn current(&self) -> &Configuration {
        &self.current
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn stats(&self) -> &SamplingStats {
        &self.stats
    }

    pub fn samples(&self) -> &[Configuration] {
        &self.samples
    }

    /// Acceptance score for moving coordinate `axis` to `trial[axis]`.
    ///
    /// E(trial) − E(current) − P(trial) + P(current) by default; see
    /// [`PriorSign`](super::PriorSign) for the posterior form. Negative scores are always
    /// accepted; positive ones are accepted with probability exp(-score).
    fn score(&self, trial: &Configuration, axis: usize) -> Result<f64> {
        let trial_energy = checked_energy(&self.model, trial)?;
        let likelihood_delta = trial_energy - self.energy;
        let prior_delta = self.prior.energy(trial[axis]) - self.prior.energy(self.current[axis]);
        Ok(self.params.prior_sign.score(likelihood_delta, prior_delta))
    }

    /// Run one proposal/acceptance iteration.
    pub fn step(&mut self) -> Result<StepOutcome> {
        let [dx1, dx2] = self.draws.displacements();
        let trial_first = Configuration::new(self.current[0] + dx1, self.current[1]);
        let trial_second = Configuration::new(self.current[0], self.current[1] + dx2);

        let score_first = self.score(&trial_first, 0)?;
        let score_second = self.score(&trial_second, 1)?;

        let [t1, t2] = self.draws.thresholds();
        let outcome = StepOutcome::from_flags(
            accepts(score_first, t1),
            accepts(score_second, t2),
        );
        trace!(
            step = self.stats.iterations,
            score_first,
            score_second,
            ?outcome,
            "dual step"
        );

        self.stats.iterations += 1;
        match outcome {
            StepOutcome::Neither => match self.params.rejection {
                RejectionPolicy::Skip => self.stats.skipped += 1,
                RejectionPolicy::Repeat => {
                    self.samples.push(self.current);
                    self.stats.appended += 1;
                    self.stats.repeated += 1;
                }
            },
            _ => {
                let first = matches!(outcome, StepOutcome::Both | StepOutcome::First);
                let second = matches!(outcome, StepOutcome::Both | StepOutcome::Second);
                let next = Configuration::new(
                    if first { trial_first[0] } else { self.current[0] },
                    if second { trial_second[1] } else { self.current[1] },
                );
                self.energy = checked_energy(&self.model, &next)?;
                self.current = next;
                self.samples.push(next);
                self.stats.appended += 1;
                self.stats.accepted_first += usize::from(first);
                self.stats.accepted_second += usize::from(second);
            }
        }

        Ok(outcome)
    }

    /// Run `params.n_steps` iterations and hand back the recorded samples.
    ///
    /// Calling `run` again continues the chain from the current
    /// configuration with fresh output and statistics.
    pub fn run(&mut self) -> Result<SampleSet> {
        info!(
            n_steps = self.params.n_steps,
            x1 = self.current[0],
            x2 = self.current[1],
            energy = self.energy,
            rejection = ?self.params.rejection,
            prior_sign = ?self.params.prior_sign,
            "starting dual-coordinate sampling"
        );

        for _ in 0..self.params.n_steps {
            self.step()?;

            let done = self.stats.iterations;
            if self.params.log_interval > 0 && done % self.params.log_interval == 0 {
                debug!(
                    step = done,
                    x1 = self.current[0],
                    x2 = self.current[1],
                    energy = self.energy,
                    acceptance = self.stats.acceptance_rate(),
                    "progress"
                );
            }
        }

        let stats = self.stats;
        let (rate_first, rate_second) = stats.coordinate_rates();
        info!(
            samples = self.samples.len(),
            skipped = stats.skipped,
            acceptance = stats.acceptance_rate(),
            rate_first,
            rate_second,
            "sampling finished"
        );
        if stats.acceptance_rate() < 0.01 {
            warn!(
                acceptance = stats.acceptance_rate(),
                "very low acceptance; proposal_std may be too large for this dataset"
            );
        }

        self.stats = SamplingStats::default();
        Ok(SampleSet {
            samples: std::mem::replace(&mut self.samples, Vec::with_capacity(self.params.n_steps)),
            stats,
        })
    }
}

/// Metropolis test: always accept downhill, otherwise compare with -ln U.
#[inline]
fn accepts(score: f64, threshold: f64) -> bool {
    score < 0.0 || score < threshold
}

fn checked_energy<E: EnergyModel>(model: &E, x: &Configuration) -> Result<f64> {
    let e = model.energy(x);
    if e.is_finite() {
        Ok(e)
    } else {
        Err(McmcError::NonFiniteEnergy { x1: x[0], x2: x[1] })
    }
}

/// Sample the two well centers hidden in `images`.
///
/// Uses the mixture likelihood with width `sigma`, the Gaussian prior of
/// width [`DEFAULT_PRIOR_WIDTH`](crate::model::DEFAULT_PRIOR_WIDTH), and the
/// proposal width and rejection policy from `params`.
pub fn sample_double_well<R: Rng>(
    images: &[f64],
    initial: Configuration,
    sigma: f64,
    kt: f64,
    params: SamplerParams,
    rng: R,
) -> Result<SampleSet> {
    let model = MixtureLikelihood::new(images, sigma, kt)?;
    let prior = GaussianPrior::new(crate::model::DEFAULT_PRIOR_WIDTH, kt)?;
    DualCoordinateSampler::with_rng(model, prior, initial, params, rng)?.run()
}
