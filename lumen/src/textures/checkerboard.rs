use lumen_core::models::color::Color;

use crate::geometry::vector3::Vector3;

use super::Texture;

/// Procedural checkerboard over the XY world position of the hit point.
pub struct Checkerboard {

    color1: Color,
    color2: Color,
    check_size: f64,
}

impl Checkerboard {

    pub fn new(color1: Color, color2: Color, check_size: f64) -> Self {
        Checkerboard {
            color1,
            color2,
            check_size,
        }
    }

    pub fn default() -> Self {
        Self::new(Color::new(1.0, 0.0, 0.0), Color::new(1.0, 1.0, 0.0), 0.9)
    }
}

impl Texture for Checkerboard {

    fn color_at(&self, _uv: (f64, f64), point: &Vector3) -> Color {
        let u = (point.x * self.check_size).rem_euclid(1.0);
        let v = (point.y * self.check_size).rem_euclid(1.0);

        if (u < 0.5) ^ (v < 0.5) {
            self.color1
        } else {
            self.color2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_tiles() {
        let texture = Checkerboard::new(Color::black(), Color::white(), 1.0);

        let a = texture.color_at((0.0, 0.0), &Vector3::new(0.25, 0.25, 0.0));
        let b = texture.color_at((0.0, 0.0), &Vector3::new(0.75, 0.25, 0.0));
        let c = texture.color_at((0.0, 0.0), &Vector3::new(0.75, 0.75, 0.0));

        assert_eq!(a, Color::white());
        assert_eq!(b, Color::black());
        assert_eq!(c, Color::white());
    }

    #[test]
    fn test_negative_coordinates_keep_the_pattern() {
        let texture = Checkerboard::new(Color::black(), Color::white(), 1.0);

        let inside = texture.color_at((0.0, 0.0), &Vector3::new(0.25, 0.25, 0.0));
        let wrapped = texture.color_at((0.0, 0.0), &Vector3::new(-1.75, 0.25, 0.0));
        assert_eq!(inside, wrapped);
    }
}
