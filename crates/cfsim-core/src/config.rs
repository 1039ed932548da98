use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Scalar;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite and positive, got {value}")]
    NotPositive { field: &'static str, value: Scalar },
    #[error("{field} must not be empty")]
    EmptyName { field: &'static str },
    #[error("cause and target must be different bodies (both are {0:?})")]
    SameRoles(String),
}

/// Scene-wide constants shared by every world built from a trial.
///
/// `speed_multiplier` divides the horizon and multiplies every body speed, so
/// a clip plays `m` times faster while bodies cover the same ground per clip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub speed_multiplier: Scalar,
    /// Pixels per second for a unit trial velocity.
    pub base_speed: Scalar,
    pub step_size: Scalar,
    /// Horizon in steps at `speed_multiplier == 1`.
    pub base_horizon: Scalar,
    pub ball_size: Scalar,
    /// Candidate cause, removed in perturbed runs.
    pub cause: String,
    /// Ball whose final position is scored.
    pub target: String,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            speed_multiplier: 1.0,
            base_speed: 500.0,
            step_size: 1.0 / 50.0,
            base_horizon: 700.0,
            ball_size: 60.0,
            cause: "A".to_string(),
            target: "B".to_string(),
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("speed_multiplier", self.speed_multiplier),
            ("base_speed", self.base_speed),
            ("step_size", self.step_size),
            ("base_horizon", self.base_horizon),
            ("ball_size", self.ball_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.cause.is_empty() { return Err(ConfigError::EmptyName { field: "cause" }); }
        if self.target.is_empty() { return Err(ConfigError::EmptyName { field: "target" }); }
        if self.cause == self.target { return Err(ConfigError::SameRoles(self.cause.clone())); }
        Ok(())
    }

    #[inline] pub fn speed(&self) -> Scalar { self.base_speed * self.speed_multiplier }

    /// Last step that is still simulated; the outcome is scored once the counter passes it.
    #[inline] pub fn horizon(&self) -> u32 { (self.base_horizon / self.speed_multiplier).floor() as u32 }

    /// Convert a duration or time point given in unscaled steps.
    #[inline] pub fn scale_steps(&self, steps: Scalar) -> Scalar { steps / self.speed_multiplier }

    /// Scripted activation step of an actuator, rounded up like every other step index.
    #[inline] pub fn scaled_step(&self, steps: Scalar) -> u32 {
        self.scale_steps(steps).ceil().max(0.0) as u32
    }

    /// Target x below which the ball has fully crossed the gate line.
    #[inline] pub fn outcome_threshold(&self) -> Scalar { -self.ball_size / 2.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn defaults_match_experiment() {
        let c = SimConfig::default();
        assert_eq!(c.horizon(), 700);
        assert_eq!(c.speed(), 500.0);
        assert_eq!(c.outcome_threshold(), -30.0);
        assert!(c.validate().is_ok());
    }

    #[test] fn multiplier_scales_consistently() {
        let c = SimConfig { speed_multiplier: 2.0, ..SimConfig::default() };
        assert_eq!(c.horizon(), 350);
        assert_eq!(c.speed(), 1000.0);
        assert_eq!(c.scaled_step(281.0), 141);
        // distance covered over the full clip is multiplier-invariant
        let base = SimConfig::default();
        let d_fast = c.speed() * c.step_size * c.horizon() as f64;
        let d_base = base.speed() * base.step_size * base.horizon() as f64;
        assert!((d_fast - d_base).abs() < 1e-9);
    }

    #[test] fn rejects_bad_values() {
        let c = SimConfig { speed_multiplier: 0.0, ..SimConfig::default() };
        assert!(matches!(c.validate(), Err(ConfigError::NotPositive { field: "speed_multiplier", .. })));
        let c = SimConfig { target: "A".into(), ..SimConfig::default() };
        assert_eq!(c.validate(), Err(ConfigError::SameRoles("A".into())));
    }
}
