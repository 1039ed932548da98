use cfsim_core::{derive_seed, SimConfig};
use cfsim_noise::{Condition, NoiseParams};
use cfsim_trial::Trial;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{estimate, EstimatorConfig, JudgeError};

/// Model judgments for one trial, both conditions.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub trial: u32,
    pub hypothetical: f64,
    pub counterfactual: f64,
}

/// Mean human rating for one trial, as a probability.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmpiricalMean {
    pub hypothetical: f64,
    pub counterfactual: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridRow {
    pub ball_noise: f64,
    pub actuator_noise: f64,
    pub loss: f64,
}

/// Judge every trial in both conditions. Each (trial, condition) pair gets its
/// own seed stream derived from `est.seed`.
pub fn predict(
    trials: &[Trial],
    sim: &SimConfig,
    params: &NoiseParams,
    est: &EstimatorConfig,
) -> Result<Vec<Prediction>, JudgeError> {
    trials.iter().enumerate().map(|(i, trial)| -> Result<Prediction, JudgeError> {
        let run = |cond: Condition, stream: u64| {
            let est = EstimatorConfig { seed: derive_seed(est.seed, 2 * i as u64 + stream), ..est.clone() };
            estimate(trial, sim, cond, params, &est).map(|j| j.probability)
        };
        Ok(Prediction {
            trial: trial.trial,
            hypothetical: run(Condition::Hypothetical, 0)?,
            counterfactual: run(Condition::Counterfactual, 1)?,
        })
    }).collect()
}

/// Σ (model − human)² over both conditions of every trial.
pub fn squared_error_loss(predictions: &[Prediction], empirical: &[EmpiricalMean]) -> Result<f64, JudgeError> {
    if predictions.len() != empirical.len() {
        return Err(JudgeError::LengthMismatch { predictions: predictions.len(), empirical: empirical.len() });
    }
    Ok(predictions.iter().zip(empirical).map(|(p, h)| {
        (p.hypothetical - h.hypothetical).powi(2) + (p.counterfactual - h.counterfactual).powi(2)
    }).sum())
}

/// Loss for every parameter pair, ball noise in the outer loop.
pub fn grid_search(
    trials: &[Trial],
    empirical: &[EmpiricalMean],
    ball_noise: &[f64],
    actuator_noise: &[f64],
    sim: &SimConfig,
    est: &EstimatorConfig,
) -> Result<Vec<GridRow>, JudgeError> {
    if trials.len() != empirical.len() {
        return Err(JudgeError::LengthMismatch { predictions: trials.len(), empirical: empirical.len() });
    }
    let mut rows = Vec::with_capacity(ball_noise.len() * actuator_noise.len());
    for &b in ball_noise {
        for &a in actuator_noise {
            let preds = predict(trials, sim, &NoiseParams::new(b, a), est)?;
            let loss = squared_error_loss(&preds, empirical)?;
            info!(ball_noise = b, actuator_noise = a, loss, "grid point");
            rows.push(GridRow { ball_noise: b, actuator_noise: a, loss });
        }
    }
    Ok(rows)
}

/// `n` evenly spaced values from `start` to `stop` inclusive.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let d = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| if i == n - 1 { stop } else { start + d * i as f64 }).collect()
        }
    }
}

/// `start, start + step, ...` strictly below `stop`. Empty for a non-positive step.
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !(stop > start) { return Vec::new(); }
    let n = ((stop - start) / step).ceil() as usize;
    (0..n).map(|i| start + step * i as f64).collect()
}
