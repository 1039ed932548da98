use glam::DVec2;
use crate::Scalar;

pub type Vec2 = DVec2;

#[inline] pub fn vec2(x: Scalar, y: Scalar) -> Vec2 { Vec2::new(x, y) }
#[inline] pub fn pose(pos: Vec2, angle: Scalar) -> Pose { Pose { pos, angle } }

/// Planar pose: position plus orientation in radians.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Pose { pub pos: Vec2, pub angle: Scalar }
