use std::{collections::BTreeSet, path::Path};

use anyhow::{Context, Result};
use cfsim_core::{SimConfig, Vec2};
use cfsim_geom::is_right_angle;
use cfsim_world::{ActuatorSpec, SimError, World};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrialError {
    #[error("invalid trial json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("actuator is missing field `{0}`")]
    MissingActuatorField(&'static str),
    #[error("trial {trial}: at most one actuator is supported, found {count}")]
    TooManyActuators { trial: u32, count: usize },
    #[error("trial {trial}: no ball named {name:?}")]
    MissingBall { trial: u32, name: String },
    #[error("trial {trial}: name {name:?} used twice")]
    DuplicateName { trial: u32, name: String },
    #[error("trial {trial}: actuator orientation {degrees}° is not a multiple of 90°")]
    BadOrientation { trial: u32, degrees: f64 },
    #[error("trial {trial}: {field} is not finite")]
    NonFinite { trial: u32, field: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BallDesc {
    pub name: String,
    pub position: [f64; 2],
    /// Unit trial velocity; the world multiplies it by its speed.
    pub velocity: [f64; 2],
}

/// The gate brick. Every field except `nominal_step` is required.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawActuator")]
pub struct ActuatorDesc {
    pub name: String,
    /// Degrees.
    pub orientation: f64,
    pub position: [f64; 2],
    pub velocity: [f64; 2],
    /// Scripted activation step at speed multiplier 1.
    pub step: f64,
    pub sensor_pos: [f64; 2],
    /// Centre of the timing distribution, at speed multiplier 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nominal_step: Option<f64>,
}

#[derive(Deserialize)]
struct RawActuator {
    name: Option<String>,
    orientation: Option<f64>,
    position: Option<[f64; 2]>,
    velocity: Option<[f64; 2]>,
    step: Option<f64>,
    sensor_pos: Option<[f64; 2]>,
    nominal_step: Option<f64>,
}

impl TryFrom<RawActuator> for ActuatorDesc {
    type Error = TrialError;

    fn try_from(r: RawActuator) -> Result<Self, Self::Error> {
        use TrialError::MissingActuatorField as Missing;
        Ok(Self {
            name: r.name.ok_or(Missing("name"))?,
            orientation: r.orientation.ok_or(Missing("orientation"))?,
            position: r.position.ok_or(Missing("position"))?,
            velocity: r.velocity.ok_or(Missing("velocity"))?,
            step: r.step.ok_or(Missing("step"))?,
            sensor_pos: r.sensor_pos.ok_or(Missing("sensor_pos"))?,
            nominal_step: r.nominal_step,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    /// Index in the trial file; picks the fallback nominal activation step.
    pub trial: u32,
    pub balls: Vec<BallDesc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bricks: Vec<ActuatorDesc>,
}

impl Trial {
    pub fn actuator(&self) -> Option<&ActuatorDesc> { self.bricks.first() }

    /// Unscaled centre of the actuator timing distribution. Without an
    /// explicit value the first four trials used 280 and the rest 290.
    pub fn nominal_step(&self) -> f64 {
        self.actuator()
            .and_then(|a| a.nominal_step)
            .unwrap_or(if self.trial < 4 { 280.0 } else { 290.0 })
    }

    pub fn validate(&self, cfg: &SimConfig) -> Result<(), TrialError> {
        let trial = self.trial;
        if self.bricks.len() > 1 {
            return Err(TrialError::TooManyActuators { trial, count: self.bricks.len() });
        }

        let mut names = BTreeSet::new();
        let mut claim = |name: &str| {
            if names.insert(name.to_string()) { Ok(()) } else { Err(TrialError::DuplicateName { trial, name: name.to_string() }) }
        };
        let finite = |field: String, v: &[f64]| {
            if v.iter().all(|x| x.is_finite()) { Ok(()) } else { Err(TrialError::NonFinite { trial, field }) }
        };

        for b in &self.balls {
            claim(&b.name)?;
            finite(format!("{}.position", b.name), &b.position)?;
            finite(format!("{}.velocity", b.name), &b.velocity)?;
        }
        if let Some(a) = self.actuator() {
            claim(&a.name)?;
            claim(&format!("{}_sensor", a.name))?;
            finite(format!("{}.position", a.name), &a.position)?;
            finite(format!("{}.velocity", a.name), &a.velocity)?;
            finite(format!("{}.sensor_pos", a.name), &a.sensor_pos)?;
            finite(format!("{}.step", a.name), &[a.step])?;
            finite(format!("{}.orientation", a.name), &[a.orientation])?;
            if !is_right_angle(a.orientation.to_radians()) {
                return Err(TrialError::BadOrientation { trial, degrees: a.orientation });
            }
        }

        for role in [&cfg.cause, &cfg.target] {
            if !self.balls.iter().any(|b| &b.name == role) {
                return Err(TrialError::MissingBall { trial, name: role.clone() });
            }
        }
        Ok(())
    }

    /// Fresh world with every ball and the actuator at its scripted step.
    pub fn build_world(&self, cfg: &SimConfig) -> Result<World, SimError> {
        let mut w = World::new(cfg.clone())?;
        for b in &self.balls {
            w.add_ball(Vec2::from_array(b.position), Vec2::from_array(b.velocity), cfg.ball_size, &b.name)?;
        }
        if let Some(a) = self.actuator() {
            w.add_actuator(&ActuatorSpec {
                name: a.name.clone(),
                orientation_deg: a.orientation,
                position: Vec2::from_array(a.position),
                velocity: Vec2::from_array(a.velocity),
                activation_step: cfg.scaled_step(a.step),
                sensor_pos: Vec2::from_array(a.sensor_pos),
            })?;
        }
        Ok(w)
    }
}

pub fn parse_trials(json: &str) -> Result<Vec<Trial>, TrialError> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON array of trials.
pub fn load_trials(path: &Path) -> Result<Vec<Trial>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read trials from {}", path.display()))?;
    parse_trials(&text).with_context(|| format!("failed to parse {}", path.display()))
}
