use lumen_core::models::color::Color;

use crate::geometry::vector3::Vector3;

/// Light source, read-only during rendering. Intensity is float RGB,
/// unbounded above zero.
pub trait Light {

    /// Unit direction from a surface point toward the light.
    fn direction_from(&self, point: &Vector3) -> Vector3;

    /// Distance to the light, `f64::INFINITY` for directional sources.
    /// Bounds the shadow ray so occluders behind the light are ignored.
    fn distance_from(&self, point: &Vector3) -> f64;

    /// Radiance arriving at the point, before any shadowing.
    fn radiance_at(&self, point: &Vector3) -> Color;
}
