use cfsim_core::ConfigError;
use cfsim_noise::NoiseError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Noise(#[from] NoiseError),
    #[error("a body named {0:?} already exists")]
    DuplicateName(String),
    #[error("body name {0:?} belonged to a removed body and cannot be reused")]
    RetiredName(String),
    #[error("no body named {0:?}")]
    UnknownBody(String),
    #[error("{0:?} is not an actuator")]
    NotAnActuator(String),
    #[error("actuator {name:?} orientation {degrees}° is not a multiple of 90°")]
    UnsupportedOrientation { name: String, degrees: f64 },
    #[error("actuator schedule cannot change once the run has started")]
    RunInProgress,
    #[error("world already ran to its horizon")]
    AlreadyFinished,

    // engine defects: never recovered from
    #[error("collision log out of order at index {index}: step {prev} followed by {next}")]
    UnorderedCollisions { index: usize, prev: u32, next: u32 },
    #[error("outcome for {target:?} recorded twice")]
    OutcomeRecordedTwice { target: String },
}
