use core::fmt;

/// Stable arena handle of a body. Never reused inside one world, even after removal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BodyId(pub u32);
impl fmt::Display for BodyId { fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "BodyId({})", self.0) } }

impl BodyId {
    #[inline] pub fn index(self) -> usize { self.0 as usize }
}
