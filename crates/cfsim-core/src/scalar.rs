/// Simulation scalar. The experiment scenes are small (800×600 px, 700 steps)
/// but noise compounds over hundreds of steps, so we stay in f64.
pub type Scalar = f64;
