//! Trial descriptions and the two kinds of runs built from them: the
//! ground-truth replay and the perturbed replay with the cause removed.

mod model;
mod runner;

pub use model::{ActuatorDesc, BallDesc, Trial, TrialError, load_trials, parse_trials};
pub use runner::{GroundTruth, RemovedRun, RunError, run_ground_truth, run_ground_truth_with, run_removed, run_removed_with};
