use cfsim_core::{Pose, Scalar, Vec2};
use cfsim_geom::MassProps;
use serde::Serialize;

/// Collision class of a body. The world's pair rules dispatch on these.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    /// Immovable wall.
    Static,
    /// Ball under elastic collision response.
    Dynamic,
    /// Scripted actuator: moves at a prescribed velocity, ignores impulses.
    Kinematic,
    /// Non-colliding trigger zone.
    Sensor,
}

impl BodyKind {
    #[inline] pub fn moves(self) -> bool { matches!(self, BodyKind::Dynamic | BodyKind::Kinematic) }
}

/// Input descriptor when creating a body.
#[derive(Copy, Clone, Debug)]
pub struct BodyDesc {
    pub pose: Pose,
    pub vel: Vec2,
    pub mass: MassProps,
    pub kind: BodyKind,
}

/// SoA body storage. Index = id; removed slots are tombstoned, never reused.
pub struct Bodies {
    pos: Vec<Vec2>,
    angle: Vec<Scalar>,
    linvel: Vec<Vec2>,
    mass: Vec<MassProps>,
    kind: Vec<BodyKind>,
    alive: Vec<bool>,
}

impl Bodies {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            pos:    Vec::with_capacity(cap),
            angle:  Vec::with_capacity(cap),
            linvel: Vec::with_capacity(cap),
            mass:   Vec::with_capacity(cap),
            kind:   Vec::with_capacity(cap),
            alive:  Vec::with_capacity(cap),
        }
    }

    pub fn add(&mut self, desc: BodyDesc) -> u32 {
        // only balls respond to impulses
        let mass = if desc.kind == BodyKind::Dynamic { desc.mass } else { MassProps::infinite() };
        self.pos.push(desc.pose.pos);
        self.angle.push(desc.pose.angle);
        self.linvel.push(desc.vel);
        self.mass.push(mass);
        self.kind.push(desc.kind);
        self.alive.push(true);
        (self.pos.len() as u32) - 1
    }

    /// Tombstone a slot. Returns false if it was already gone.
    pub fn remove(&mut self, id: u32) -> bool {
        let i = id as usize;
        let was = self.alive[i];
        self.alive[i] = false;
        self.linvel[i] = Vec2::ZERO;
        was
    }

    /// Slots ever allocated, including removed ones.
    #[inline] pub fn len(&self) -> usize { self.pos.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.pos.is_empty() }

    /// Explicit Euler on positions; velocities only change through impulses
    /// applied after the previous integrate, which makes the pair semi-implicit.
    pub fn integrate_all(&mut self, dt: Scalar) {
        for i in 0..self.len() {
            if !self.alive[i] || !self.kind[i].moves() { continue; }
            self.pos[i] += self.linvel[i] * dt;
        }
    }

    #[inline] pub fn pose(&self, id: u32) -> Pose {
        let i = id as usize;
        Pose { pos: self.pos[i], angle: self.angle[i] }
    }

    #[inline] pub fn vel(&self, id: u32) -> Vec2 { self.linvel[id as usize] }
    #[inline] pub fn set_vel(&mut self, id: u32, v: Vec2) { self.linvel[id as usize] = v; }

    #[inline] pub fn inv_mass_of(&self, id: u32) -> Scalar { self.mass[id as usize].inv_mass }
    #[inline] pub fn kind_of(&self, id: u32) -> BodyKind { self.kind[id as usize] }
    #[inline] pub fn is_alive(&self, id: u32) -> bool { self.alive.get(id as usize).copied().unwrap_or(false) }

    #[inline] pub fn apply_impulse(&mut self, id: u32, j: Vec2) {
        let i = id as usize;
        let im = self.mass[i].inv_mass;
        if im != 0.0 { self.linvel[i] += j * im; }
    }

    /// Add a position delta (already scaled for this body).
    #[inline] pub fn apply_position_delta(&mut self, id: u32, dp: Vec2) {
        self.pos[id as usize] += dp;
    }

    /// Live ids in insertion order.
    pub fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.len() as u32).filter(move |&i| self.alive[i as usize])
    }
}

impl Default for Bodies {
    fn default() -> Self { Self::with_capacity(0) }
}
