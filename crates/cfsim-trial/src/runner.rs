use cfsim_core::{digest_hex, sample_rng, ConfigError, SimConfig};
use cfsim_noise::{plan_activation, ActivationPlan, ActuatorTiming, Condition, NoiseError, NoiseParams, VelocityNoise};
use cfsim_viz::FrameObserver;
use cfsim_world::{EventLog, SimError, World};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::{Trial, TrialError};

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Trial(#[from] TrialError),
    #[error(transparent)]
    Noise(#[from] NoiseError),
    #[error(transparent)]
    Sim(#[from] SimError),
    #[error("trial {trial}: the balls never collide in the ground-truth run")]
    NoGroundTruthCollision { trial: u32 },
    #[error("trial {trial}: no outcome recorded, target {target:?} no longer exists")]
    MissingOutcome { trial: u32, target: String },
}

/// What actually happened in a trial.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroundTruth {
    pub events: EventLog,
    /// Step of the first ball-ball collision.
    pub collision_step: Option<u32>,
    pub outcome: u8,
    /// Whether the actuator's activation fired before the horizon.
    pub actuator_moved: bool,
    /// Hex digest of the final world state.
    pub state_hash: String,
}

impl GroundTruth {
    /// Collision step for perturbed runs; a trial without one cannot be judged.
    pub fn require_collision(&self, trial: &Trial) -> Result<u32, RunError> {
        self.collision_step.ok_or(RunError::NoGroundTruthCollision { trial: trial.trial })
    }
}

/// Outcome of one perturbed run plus how the actuator was scheduled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RemovedRun {
    pub outcome: u8,
    /// `None` for trials without an actuator.
    pub plan: Option<ActivationPlan>,
}

fn outcome_of(trial: &Trial, cfg: &SimConfig, log: &EventLog) -> Result<u8, RunError> {
    log.outcome_bit().ok_or_else(|| {
        error!(trial = trial.trial, target = %cfg.target, "run ended without an outcome");
        RunError::MissingOutcome { trial: trial.trial, target: cfg.target.clone() }
    })
}

/// An activation at or past the horizon leaves the actuator effectively still.
fn moved_before_horizon(world: &World) -> bool {
    world.actuators().iter().any(|a| a.activated && a.activation_step < world.horizon())
}

pub fn run_ground_truth(trial: &Trial, cfg: &SimConfig) -> Result<GroundTruth, RunError> {
    run_ground_truth_with(trial, cfg, None)
}

/// Replay the trial untouched: nothing removed, no noise.
pub fn run_ground_truth_with(
    trial: &Trial,
    cfg: &SimConfig,
    observer: Option<&mut dyn FrameObserver>,
) -> Result<GroundTruth, RunError> {
    trial.validate(cfg)?;
    let mut world = trial.build_world(cfg)?;
    // the noise is off, this generator never draws
    let mut rng = sample_rng(0, 0);
    let events = world.simulate_with(&VelocityNoise::off(), &mut rng, observer)?.clone();
    let outcome = outcome_of(trial, cfg, &events)?;
    let truth = GroundTruth {
        collision_step: events.first_collision_step(),
        outcome,
        actuator_moved: moved_before_horizon(&world),
        state_hash: digest_hex(&world.state_hash()),
        events,
    };
    debug!(trial = trial.trial, collision_step = ?truth.collision_step, outcome, moved = truth.actuator_moved, "ground truth");
    Ok(truth)
}

pub fn run_removed<R: Rng + ?Sized>(
    trial: &Trial,
    cfg: &SimConfig,
    condition: Condition,
    params: &NoiseParams,
    truth: &GroundTruth,
    rng: &mut R,
) -> Result<RemovedRun, RunError> {
    run_removed_with(trial, cfg, condition, params, truth, rng, None)
}

/// Replay the trial with the cause removed at step 0, the actuator scheduled
/// for `condition`, and the target's heading perturbed after the
/// ground-truth collision.
pub fn run_removed_with<R: Rng + ?Sized>(
    trial: &Trial,
    cfg: &SimConfig,
    condition: Condition,
    params: &NoiseParams,
    truth: &GroundTruth,
    rng: &mut R,
    observer: Option<&mut dyn FrameObserver>,
) -> Result<RemovedRun, RunError> {
    trial.validate(cfg)?;
    params.validate()?;
    let collision_step = truth.require_collision(trial)?;
    let mut world: World = trial.build_world(cfg)?;

    let plan = match trial.actuator() {
        Some(act) => {
            let timing = ActuatorTiming {
                scripted_step: cfg.scaled_step(act.step),
                moved_in_ground_truth: truth.actuator_moved,
                nominal_step: cfg.scale_steps(trial.nominal_step()),
                std_dev: cfg.scale_steps(params.actuator_noise),
            };
            let plan = plan_activation(condition, &timing, collision_step, world.horizon(), rng)?;
            world.set_activation_step(&act.name, plan.activation_step)?;
            Some(plan)
        }
        None => None,
    };

    world.remove(&cfg.cause, 0)?;
    let noise = VelocityNoise::new(params.ball_noise, collision_step)?;
    let events = world.simulate_with(&noise, rng, observer)?;
    let outcome = outcome_of(trial, cfg, events)?;
    Ok(RemovedRun { outcome, plan })
}
