use cfsim_core::{Pose, Scalar, Vec2};
use cfsim_geom::{Aabb, Shape};

/// Penetrating contact. `normal` points from A to B.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact {
    pub normal: Vec2,
    pub depth: Scalar,
}

impl Contact {
    #[inline] fn flipped(self) -> Self { Self { normal: -self.normal, depth: self.depth } }
}

/// Narrowphase dispatch. Boxes are treated through their AABB, which is exact
/// for the right-angle orientations the world accepts. `approach` is A's
/// velocity relative to B.
pub fn contact(sa: &Shape, xa: &Pose, ba: &Aabb, sb: &Shape, xb: &Pose, bb: &Aabb, approach: Vec2) -> Option<Contact> {
    match (*sa, *sb) {
        (Shape::Circle { r: ra }, Shape::Circle { r: rb }) => circle_circle(xa.pos, ra, xb.pos, rb),
        (Shape::Circle { r }, Shape::Box { .. }) => circle_box(xa.pos, r, bb, approach),
        (Shape::Box { .. }, Shape::Circle { r }) => circle_box(xb.pos, r, ba, -approach).map(Contact::flipped),
        (Shape::Box { .. }, Shape::Box { .. }) => box_box(ba, bb),
    }
}

pub fn circle_circle(pa: Vec2, ra: Scalar, pb: Vec2, rb: Scalar) -> Option<Contact> {
    let d = pb - pa;
    let dist2 = d.length_squared();
    let rsum = ra + rb;
    if dist2 >= rsum * rsum { return None; }
    let dist = dist2.sqrt();
    let normal = if dist > 1.0e-9 { d / dist } else { Vec2::X };
    Some(Contact { normal, depth: rsum - dist })
}

/// Circle (A) against box (B). `vel` is the circle's velocity relative to the
/// box and only matters once the centre is inside the box.
pub fn circle_box(pc: Vec2, r: Scalar, bb: &Aabb, vel: Vec2) -> Option<Contact> {
    let q = bb.clamp_point(pc);
    let n = pc - q; // box -> circle
    let dist2 = n.length_squared();
    if dist2 > 1.0e-18 {
        if dist2 >= r * r { return None; }
        let dist = dist2.sqrt();
        return Some(Contact { normal: -n / dist, depth: r - dist });
    }

    // centre inside the box: leave through the nearest face the circle came
    // in by, so a fast ball deep in a thin wall is not pushed out the far side
    let faces = [
        (pc.x - bb.min.x, Vec2::NEG_X),
        (bb.max.x - pc.x, Vec2::X),
        (pc.y - bb.min.y, Vec2::NEG_Y),
        (bb.max.y - pc.y, Vec2::Y),
    ];
    let nearest = |entry_only: bool| {
        faces
            .iter()
            .filter(|(_, outward)| !entry_only || outward.dot(vel) < 0.0)
            .copied()
            .reduce(|best, f| if f.0 < best.0 { f } else { best })
    };
    let (gap, outward) = nearest(true).or_else(|| nearest(false))?;
    Some(Contact { normal: -outward, depth: r + gap })
}

pub fn box_box(aa: &Aabb, bb: &Aabb) -> Option<Contact> {
    if !aa.overlaps(bb) { return None; }
    let ca = aa.center();
    let cb = bb.center();
    let px = (aa.max.x - bb.min.x).min(bb.max.x - aa.min.x);
    let py = (aa.max.y - bb.min.y).min(bb.max.y - aa.min.y);
    let (normal, depth) = if px <= py {
        (Vec2::new(if cb.x > ca.x { 1.0 } else { -1.0 }, 0.0), px)
    } else {
        (Vec2::new(0.0, if cb.y > ca.y { 1.0 } else { -1.0 }), py)
    };
    if depth <= 0.0 { return None; }
    Some(Contact { normal, depth })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfsim_core::vec2;

    #[test] fn circles() {
        let c = circle_circle(vec2(0.0, 0.0), 30.0, vec2(50.0, 0.0), 30.0).unwrap();
        assert_eq!(c.normal, Vec2::X);
        assert!((c.depth - 10.0).abs() < 1e-12);
        assert!(circle_circle(vec2(0.0, 0.0), 30.0, vec2(60.0, 0.0), 30.0).is_none());
    }

    #[test] fn circle_outside_box() {
        let wall = Aabb::from_center_half_extents(vec2(400.0, 10.0), vec2(400.0, 10.0));
        let c = circle_box(vec2(300.0, 45.0), 30.0, &wall, vec2(0.0, -500.0)).unwrap();
        assert!((c.normal - Vec2::NEG_Y).length() < 1e-12);
        assert!((c.depth - 5.0).abs() < 1e-12);
    }

    #[test] fn circle_centre_inside_box() {
        let wall = Aabb::from_center_half_extents(vec2(10.0, 50.0), vec2(10.0, 100.0));
        let c = circle_box(vec2(18.0, 60.0), 30.0, &wall, Vec2::ZERO).unwrap();
        // nearest face is +X (2 px away); normal points from circle into the box
        assert_eq!(c.normal, Vec2::NEG_X);
        assert!((c.depth - 32.0).abs() < 1e-12);
    }

    #[test] fn deep_centre_exits_where_it_entered() {
        // top wall, ball came up from below and its centre is 4 px from the far face
        let wall = Aabb::from_center_half_extents(vec2(400.0, 590.0), vec2(400.0, 10.0));
        let c = circle_box(vec2(300.0, 596.0), 30.0, &wall, vec2(0.0, 2500.0)).unwrap();
        assert_eq!(c.normal, Vec2::Y);
        assert!((c.depth - 46.0).abs() < 1e-12);
        // moving away from every face falls back to the nearest one
        let c = circle_box(vec2(300.0, 596.0), 30.0, &wall, Vec2::ZERO).unwrap();
        assert_eq!(c.normal, Vec2::NEG_Y);
    }

    #[test] fn dispatch_flips_for_box_first() {
        let b = Aabb::from_center_half_extents(vec2(0.0, 0.0), vec2(10.0, 10.0));
        let circle = Shape::Circle { r: 5.0 };
        let xc = Pose { pos: vec2(12.0, 0.0), angle: 0.0 };
        let cb = Aabb::from_center_half_extents(xc.pos, vec2(5.0, 5.0));
        let boxed = Shape::Box { hx: 10.0, hy: 10.0 };
        let c = contact(&boxed, &Pose::default(), &b, &circle, &xc, &cb, Vec2::ZERO).unwrap();
        assert_eq!(c.normal, Vec2::X);
    }

    #[test] fn boxes() {
        let a = Aabb::from_center_half_extents(vec2(0.0, 0.0), vec2(10.0, 10.0));
        let b = Aabb::from_center_half_extents(vec2(0.0, 18.0), vec2(10.0, 10.0));
        let c = box_box(&a, &b).unwrap();
        assert_eq!(c.normal, Vec2::Y);
        assert!((c.depth - 2.0).abs() < 1e-12);
    }
}
