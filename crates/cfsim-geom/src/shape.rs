use cfsim_core::{Pose, Scalar, Vec2};
use crate::aabb::Aabb;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    Circle { r: Scalar },
    /// Half extents in the body's local frame.
    Box { hx: Scalar, hy: Scalar },
}

impl Shape {
    #[inline] pub fn circle_from_diameter(d: Scalar) -> Self { Shape::Circle { r: d * 0.5 } }
    #[inline] pub fn box_from_size(w: Scalar, h: Scalar) -> Self { Shape::Box { hx: w * 0.5, hy: h * 0.5 } }
}

/// True when `angle` is a multiple of 90° (within float noise), i.e. the
/// rotated box stays axis-aligned and its AABB is the box itself.
pub fn is_right_angle(angle: Scalar) -> bool {
    let quarter = core::f64::consts::FRAC_PI_2;
    let k = (angle / quarter).round();
    (angle - k * quarter).abs() < 1e-9
}

#[inline]
pub fn aabb_of(shape: &Shape, xf: &Pose) -> Aabb {
    match *shape {
        Shape::Circle { r } => Aabb::from_center_half_extents(xf.pos, Vec2::splat(r)),
        Shape::Box { hx, hy } => {
            let (s, c) = xf.angle.sin_cos();
            let (s, c) = (s.abs(), c.abs());
            let he = Vec2::new(c * hx + s * hy, s * hx + c * hy);
            Aabb::from_center_half_extents(xf.pos, he)
        }
    }
}
