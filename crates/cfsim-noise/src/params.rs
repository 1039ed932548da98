use serde::{Deserialize, Serialize};

use crate::{check_magnitude, NoiseError};

/// The two free parameters of the model.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParams {
    /// Std dev of the per-step velocity rotation, degrees.
    pub ball_noise: f64,
    /// Std dev of the actuator activation step, unscaled steps.
    pub actuator_noise: f64,
}

impl Default for NoiseParams {
    fn default() -> Self { Self { ball_noise: 0.6, actuator_noise: 175.0 } }
}

impl NoiseParams {
    pub fn new(ball_noise: f64, actuator_noise: f64) -> Self { Self { ball_noise, actuator_noise } }
    pub fn zero() -> Self { Self::new(0.0, 0.0) }

    pub fn validate(&self) -> Result<(), NoiseError> {
        check_magnitude("ball_noise", self.ball_noise)?;
        check_magnitude("actuator_noise", self.actuator_noise)
    }
}
