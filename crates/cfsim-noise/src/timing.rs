use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::Serialize;

use crate::{check_magnitude, Condition, NoiseError};

/// Retry ceiling for the rejection loop in [`TimingDraw::sample`].
pub const MAX_TIMING_ATTEMPTS: u32 = 10_000;

/// Activation step drawn from `ceil(N(mean, std_dev))`, conditioned on falling
/// strictly after the ball-ball collision and clamped to the horizon.
#[derive(Copy, Clone, Debug)]
pub struct TimingDraw {
    pub mean: f64,
    pub std_dev: f64,
    pub collision_step: u32,
    pub horizon: u32,
}

impl TimingDraw {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<u32, NoiseError> {
        check_magnitude("actuator_noise", self.std_dev)?;
        if !self.mean.is_finite() {
            return Err(NoiseError::InvalidMagnitude { field: "nominal_step", value: self.mean });
        }
        let normal = if self.std_dev > 0.0 {
            Some(Normal::new(self.mean, self.std_dev)
                .map_err(|_| NoiseError::InvalidMagnitude { field: "actuator_noise", value: self.std_dev })?)
        } else {
            None
        };

        let mut attempts = 0;
        while attempts < MAX_TIMING_ATTEMPTS {
            attempts += 1;
            let candidate = match &normal {
                Some(d) => d.sample(rng),
                None => self.mean,
            }
            .ceil();
            if candidate > self.collision_step as f64 {
                return Ok(candidate.min(self.horizon as f64) as u32);
            }
            // a zero-width draw repeats itself forever
            if normal.is_none() { break; }
        }
        Err(NoiseError::TimingExhausted {
            mean: self.mean,
            std_dev: self.std_dev,
            collision_step: self.collision_step,
            attempts,
        })
    }
}

/// What is known about the actuator before a perturbed run. Steps are already
/// scaled by the speed multiplier.
#[derive(Copy, Clone, Debug)]
pub struct ActuatorTiming {
    /// Activation step written in the trial.
    pub scripted_step: u32,
    /// Whether activation fired during the ground-truth run.
    pub moved_in_ground_truth: bool,
    /// Centre of the timing distribution.
    pub nominal_step: f64,
    pub std_dev: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActivationPlan {
    pub activation_step: u32,
    /// Whether the actuator is planned to move inside the clip.
    pub moves: bool,
    /// Whether the step came from the timing distribution.
    pub resampled: bool,
}

/// Decide the actuator activation step for one perturbed run.
pub fn plan_activation<R: Rng + ?Sized>(
    condition: Condition,
    timing: &ActuatorTiming,
    collision_step: u32,
    horizon: u32,
    rng: &mut R,
) -> Result<ActivationPlan, NoiseError> {
    let draw = TimingDraw { mean: timing.nominal_step, std_dev: timing.std_dev, collision_step, horizon };
    match condition {
        Condition::Hypothetical => {
            if !rng.gen_bool(0.5) {
                return Ok(ActivationPlan { activation_step: horizon + 1, moves: false, resampled: false });
            }
            let step = draw.sample(rng)?;
            Ok(ActivationPlan { activation_step: step, moves: true, resampled: true })
        }
        Condition::Counterfactual => {
            if !timing.moved_in_ground_truth {
                return Ok(ActivationPlan { activation_step: timing.scripted_step, moves: false, resampled: false });
            }
            let step = draw.sample(rng)?;
            Ok(ActivationPlan { activation_step: step, moves: true, resampled: true })
        }
    }
}
