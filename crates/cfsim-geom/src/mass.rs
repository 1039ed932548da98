use cfsim_core::Scalar;

/// Contact response coefficients. Billiard physics: fully elastic, no friction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material { pub restitution: Scalar, pub friction: Scalar }
impl Default for Material {
    fn default() -> Self { Self { restitution: 1.0, friction: 0.0 } }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MassProps {
    pub mass: Scalar,
    pub inv_mass: Scalar,
    pub moment: Scalar,
}

impl MassProps {
    pub fn infinite() -> Self {
        Self { mass: Scalar::INFINITY, inv_mass: 0.0, moment: Scalar::INFINITY }
    }

    /// Solid disc.
    pub fn from_circle(mass: Scalar, radius: Scalar) -> Self {
        Self { mass, inv_mass: 1.0 / mass, moment: 0.5 * mass * radius * radius }
    }
}
