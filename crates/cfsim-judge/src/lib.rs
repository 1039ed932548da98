//! Monte Carlo causal judgments and the batch glue used to fit the two noise
//! parameters against empirical ratings.

mod estimate;
mod fit;
mod table;

pub use estimate::{EstimatorConfig, Judgment, count_passes, estimate};
pub use fit::{EmpiricalMean, GridRow, Prediction, arange, grid_search, linspace, predict, squared_error_loss};
pub use table::{read_empirical, read_empirical_from, write_grid, write_predictions};

use cfsim_noise::NoiseError;
use cfsim_trial::RunError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JudgeError {
    #[error("num_samples must be at least 1")]
    NoSamples,
    #[error(transparent)]
    Noise(#[from] NoiseError),
    #[error(transparent)]
    Run(#[from] RunError),
    #[error("{predictions} predictions but {empirical} empirical rows")]
    LengthMismatch { predictions: usize, empirical: usize },
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
