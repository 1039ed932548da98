pub mod aabb;
pub mod shape;
pub mod mass;

pub use aabb::Aabb;
pub use shape::{Shape, aabb_of, is_right_angle};
pub use mass::{MassProps, Material};
