use lumen_core::models::color::Color;

use crate::geometry::vector3::Vector3;
use crate::scene::light::Light;

/// Directional source infinitely far away: constant direction and radiance,
/// shadow rays toward it are unbounded.
pub struct DistantLight {

    direction: Vector3,
    color: Color,
    intensity: f64,
}

impl DistantLight {

    /// `direction` is the travel direction of the light.
    pub fn new(direction: Vector3, color: Color, intensity: f64) -> Self {
        DistantLight {
            direction: direction.normalized(),
            color,
            intensity,
        }
    }
}

impl Light for DistantLight {

    fn direction_from(&self, _point: &Vector3) -> Vector3 {
        -self.direction
    }

    fn distance_from(&self, _point: &Vector3) -> f64 {
        f64::INFINITY
    }

    fn radiance_at(&self, _point: &Vector3) -> Color {
        self.color * self.intensity
    }
}
