//! Perturbation models for the removed-cause simulations.
//!
//! Draw order per perturbed run (part of the reproducibility contract):
//! 1. hypothetical condition with an actuator: one Bernoulli(0.5) "does it move" draw;
//! 2. if a timing draw is needed and its spread is non-zero: Gaussian draws until one is accepted;
//! 3. while the run is stepping: one Gaussian angle per step past the collision step,
//!    only when the ball noise is non-zero.
//!
//! A zero magnitude never touches the generator.

mod condition;
mod params;
mod timing;
mod velocity;

pub use condition::Condition;
pub use params::NoiseParams;
pub use timing::{ActivationPlan, ActuatorTiming, TimingDraw, MAX_TIMING_ATTEMPTS, plan_activation};
pub use velocity::{VelocityNoise, rotate_deg};

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum NoiseError {
    #[error("unknown condition {0:?} (expected \"counterfactual\" or \"hypothetical\")")]
    UnknownCondition(String),
    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidMagnitude { field: &'static str, value: f64 },
    #[error(
        "actuator timing draw found no step after collision step {collision_step} in {attempts} \
         attempts (mean {mean}, std dev {std_dev})"
    )]
    TimingExhausted { mean: f64, std_dev: f64, collision_step: u32, attempts: u32 },
}

pub(crate) fn check_magnitude(field: &'static str, value: f64) -> Result<(), NoiseError> {
    if !value.is_finite() || value < 0.0 {
        return Err(NoiseError::InvalidMagnitude { field, value });
    }
    Ok(())
}
