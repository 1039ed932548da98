use cfsim_core::Vec2;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Aabb { pub min: Vec2, pub max: Vec2 }

impl Aabb {
    #[inline] pub fn from_center_half_extents(c: Vec2, he: Vec2) -> Self {
        Self { min: c - he, max: c + he }
    }
    #[inline] pub fn center(&self) -> Vec2 { (self.min + self.max) * 0.5 }
    #[inline] pub fn half_extents(&self) -> Vec2 { (self.max - self.min) * 0.5 }
    /// Closed-interval test: boxes that merely touch count as overlapping.
    #[inline] pub fn overlaps(&self, other: &Aabb) -> bool {
        !(self.max.x < other.min.x || self.min.x > other.max.x ||
            self.max.y < other.min.y || self.min.y > other.max.y)
    }
    #[inline] pub fn clamp_point(&self, p: Vec2) -> Vec2 { p.clamp(self.min, self.max) }
}
