use cfsim_core::{vec2, Vec2};

pub const ACTUATOR_SIZE: Vec2 = Vec2::new(36.0, 100.0);
pub const SENSOR_SIZE: Vec2 = Vec2::new(20.0, 20.0);

/// Boundary wall: center and full size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WallSpec {
    pub name: &'static str,
    pub center: Vec2,
    pub size: Vec2,
}

/// Walls along the top and bottom edges and two stubs on the left. The gate
/// is the opening between the stubs (x in 0..20, y in 150..450). The right
/// side is open, so balls can leave there.
pub fn default_walls() -> [WallSpec; 4] {
    [
        WallSpec { name: "top_wall",         center: vec2(400.0, 590.0), size: vec2(800.0, 20.0) },
        WallSpec { name: "bottom_wall",      center: vec2(400.0, 10.0),  size: vec2(800.0, 20.0) },
        WallSpec { name: "top_left_wall",    center: vec2(10.0, 550.0),  size: vec2(20.0, 200.0) },
        WallSpec { name: "bottom_left_wall", center: vec2(10.0, 50.0),   size: vec2(20.0, 200.0) },
    ]
}
