use lumen_core::models::color::Color;

use crate::geometry::vector3::Vector3;
use crate::materials::material::Material;
use crate::render::intersection::Intersection;
use crate::scene::light::Light;

pub mod blinn_phong;
pub mod phong;

/// Shadow occlusion query supplied by the scene: transmittance in `[0, 1]`
/// from a surface point toward a light (0 fully blocked, 1 fully clear).
/// Illumination models get this callback instead of the spatial partition.
pub type ShadowTest<'a> = dyn Fn(&Vector3, &dyn Light) -> f64 + 'a;

/// Local light split into the part attenuated by surface transparency
/// (ambient + diffuse) and the highlight that stays at full strength.
pub struct LocalIllumination {
    pub ambient_diffuse: Color,
    pub specular: Color,
}

impl LocalIllumination {

    pub fn total(&self) -> Color {
        self.ambient_diffuse + self.specular
    }
}

pub trait IlluminationModel {

    fn illuminate(
        &self,
        base_color: Color,
        material: &Material,
        hit: &Intersection,
        view_dir: &Vector3,
        lights: &[Box<dyn Light + Sync + Send>],
        shadow_test: &ShadowTest,
    ) -> LocalIllumination;
}

pub fn reflect(incident: &Vector3, normal: &Vector3) -> Vector3 {
    *incident - *normal * (2.0 * incident.dot_product(normal))
}

/// Snell refraction of a unit incident direction at a surface whose unit
/// normal faces the incident ray. `None` signals total internal reflection.
pub fn refract(incident: &Vector3, normal: &Vector3, n1: f64, n2: f64) -> Option<Vector3> {
    let cos_i = -normal.dot_product(incident);
    let eta = n1 / n2;
    let sin2_t = eta * eta * (1.0 - cos_i * cos_i);
    if sin2_t > 1.0 {
        return None;
    }

    let cos_t = (1.0 - sin2_t).sqrt();
    Some((*incident * eta + *normal * (eta * cos_i - cos_t)).normalized())
}

/// Schlick approximation of the Fresnel reflectance.
pub fn fresnel_schlick(cos_i: f64, n1: f64, n2: f64) -> f64 {
    let f0 = ((n1 - n2) / (n1 + n2)).powi(2);
    f0 + (1.0 - f0) * (1.0 - cos_i).powi(5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect() {
        let incident = Vector3::new(1.0, -1.0, 0.0).normalized();
        let reflected = reflect(&incident, &Vector3::up());
        assert_eq!(reflected, Vector3::new(1.0, 1.0, 0.0).normalized());
    }

    #[test]
    fn test_refract_straight_through() {
        let incident = Vector3::new(0.0, -1.0, 0.0);
        let refracted = refract(&incident, &Vector3::up(), 1.0, 1.5).expect("no TIR head-on");
        assert_eq!(refracted, incident);
    }

    #[test]
    fn test_refract_bends_toward_normal() {
        let incident = Vector3::new(1.0, -1.0, 0.0).normalized();
        let refracted = refract(&incident, &Vector3::up(), 1.0, 1.5).expect("entering dense medium");
        // sin(45°) / 1.5
        let expected_sin = (0.5f64).sqrt() / 1.5;
        assert!((refracted.x - expected_sin).abs() < 1e-9);
        assert!(refracted.y < 0.0);
    }

    #[test]
    fn test_total_internal_reflection_at_60_degrees() {
        // glass to air at 60°: critical angle is asin(1/1.5) ≈ 41.8°
        let angle = 60f64.to_radians();
        let incident = Vector3::new(angle.sin(), -angle.cos(), 0.0);
        assert!(refract(&incident, &Vector3::up(), 1.5, 1.0).is_none());
    }

    #[test]
    fn test_refract_never_produces_nan() {
        for i in 0..90 {
            let angle = (i as f64).to_radians();
            let incident = Vector3::new(angle.sin(), -angle.cos(), 0.0);
            if let Some(direction) = refract(&incident, &Vector3::up(), 1.5, 1.0) {
                assert!(direction.is_finite());
            }
        }
    }

    #[test]
    fn test_fresnel_schlick_range() {
        let grazing = fresnel_schlick(0.0, 1.0, 1.5);
        let head_on = fresnel_schlick(1.0, 1.0, 1.5);
        assert!((grazing - 1.0).abs() < 1e-9);
        assert!(head_on < 0.05);
    }
}
