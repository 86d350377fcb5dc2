use std::f64::consts::PI;

use lumen_core::models::color::Color;

use crate::geometry::vector3::Vector3;
use crate::scene::light::Light;

pub struct PointLight {

    position: Vector3,
    color: Color,
    intensity: f64,
}

impl PointLight {

    pub fn new(position: Vector3, color: Color, intensity: f64) -> Self {
        PointLight {
            position,
            color,
            intensity,
        }
    }
}

impl Light for PointLight {

    fn direction_from(&self, point: &Vector3) -> Vector3 {
        (self.position - *point).normalized()
    }

    fn distance_from(&self, point: &Vector3) -> f64 {
        point.distance_to(&self.position)
    }

    fn radiance_at(&self, point: &Vector3) -> Color {
        let distance_squared = (self.position - *point).length_squared().max(f64::EPSILON);
        self.color * (self.intensity / (4.0 * PI * distance_squared))
    }
}
