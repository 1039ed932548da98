pub mod scalar;
pub mod ids;
pub mod types;
pub mod hash;
pub mod time;
pub mod schedule;
pub mod rng;
pub mod config;

pub use scalar::Scalar;
pub use ids::BodyId;
pub use types::{Vec2, Pose, vec2, pose};
pub use hash::{StepHasher, digest_hex};
pub use time::StepStats;
pub use schedule::{StepStage, schedule_digest};
pub use rng::{SampleRng, derive_seed, sample_rng};
pub use config::{SimConfig, ConfigError};
