use cfsim_core::{sample_rng, SimConfig};
use cfsim_noise::{Condition, NoiseParams};
use cfsim_trial::{run_ground_truth, run_removed, GroundTruth, RunError, Trial};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::JudgeError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub num_samples: u32,
    /// Master seed; sample `i` draws from `sample_rng(seed, i)`.
    pub seed: u64,
    /// Spread samples over the rayon pool. Results are identical either way.
    pub parallel: bool,
}

impl Default for EstimatorConfig {
    fn default() -> Self { Self { num_samples: 100, seed: 0, parallel: false } }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Judgment {
    pub condition: Condition,
    /// Fraction of perturbed runs in which the target went through the gate.
    pub probability: f64,
    pub passed: u32,
    pub samples: u32,
    pub ground_truth: GroundTruth,
}

/// Run ground truth once, then `num_samples` perturbed runs with the cause
/// removed, and average their outcome bits.
pub fn estimate(
    trial: &Trial,
    sim: &SimConfig,
    condition: Condition,
    params: &NoiseParams,
    est: &EstimatorConfig,
) -> Result<Judgment, JudgeError> {
    if est.num_samples == 0 { return Err(JudgeError::NoSamples); }
    params.validate()?;
    let truth = run_ground_truth(trial, sim)?;
    truth.require_collision(trial)?;

    let passed = count_passes(trial, sim, condition, params, &truth, est)?;
    let probability = f64::from(passed) / f64::from(est.num_samples);
    info!(trial = trial.trial, %condition, passed, samples = est.num_samples, probability, "estimate");
    Ok(Judgment { condition, probability, passed, samples: est.num_samples, ground_truth: truth })
}

/// Number of perturbed runs whose outcome bit is 1.
pub fn count_passes(
    trial: &Trial,
    sim: &SimConfig,
    condition: Condition,
    params: &NoiseParams,
    truth: &GroundTruth,
    est: &EstimatorConfig,
) -> Result<u32, RunError> {
    let one = |i: u64| -> Result<u32, RunError> {
        let mut rng = sample_rng(est.seed, i);
        Ok(u32::from(run_removed(trial, sim, condition, params, truth, &mut rng)?.outcome))
    };
    let n = u64::from(est.num_samples);
    if est.parallel {
        (0..n).into_par_iter().map(one).try_reduce(|| 0, |a, b| Ok(a + b))
    } else {
        (0..n).map(one).sum()
    }
}
