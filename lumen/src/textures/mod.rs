use lumen_core::models::color::Color;

use crate::geometry::vector3::Vector3;

pub mod brick;
pub mod checkerboard;
pub mod image_texture;
pub mod mandelbrot;
pub mod mosaic;

/// Base-color lookup at a hit point. Procedural patterns work off the world
/// position, image sampling works off the primitive's surface coordinates;
/// both are provided so each texture can pick what its pattern needs.
pub trait Texture {

    fn color_at(&self, uv: (f64, f64), point: &Vector3) -> Color;
}

pub struct SolidColor {

    color: Color,
}

impl SolidColor {

    pub const fn new(color: Color) -> Self {
        SolidColor { color }
    }
}

impl Texture for SolidColor {

    fn color_at(&self, _uv: (f64, f64), _point: &Vector3) -> Color {
        self.color
    }
}
