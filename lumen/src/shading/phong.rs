use lumen_core::models::color::Color;

use crate::geometry::vector3::Vector3;
use crate::materials::material::Material;
use crate::render::intersection::Intersection;
use crate::scene::light::Light;

use super::{IlluminationModel, LocalIllumination, ShadowTest};

/// Classic Phong: ambient + Lambert diffuse + reflection-vector highlight.
pub struct Phong {
    ambient: f64,
    diffuse: f64,
    specular: f64,
}

impl Phong {

    pub fn new() -> Self {
        Phong {
            ambient: 0.2,
            diffuse: 0.8,
            specular: 0.1,
        }
    }

    pub fn with_factors(ambient: f64, diffuse: f64, specular: f64) -> Self {
        Phong {
            ambient,
            diffuse,
            specular,
        }
    }
}

impl IlluminationModel for Phong {

    fn illuminate(
        &self,
        base_color: Color,
        material: &Material,
        hit: &Intersection,
        view_dir: &Vector3,
        lights: &[Box<dyn Light + Sync + Send>],
        shadow_test: &ShadowTest,
    ) -> LocalIllumination {
        let normal = hit.normal();

        let mut ambient_diffuse = base_color * material.ambient * self.ambient;
        let mut specular = Color::black();

        for light in lights {
            let transmittance = shadow_test(hit.point(), light.as_ref());
            if transmittance <= 0.0 {
                continue;
            }

            let light_dir = light.direction_from(hit.point());
            let n_dot_l = normal.dot_product(&light_dir);
            if n_dot_l <= 0.0 {
                continue;
            }

            let radiance = light.radiance_at(hit.point()) * transmittance;

            ambient_diffuse += base_color * radiance * (self.diffuse * n_dot_l);

            let reflection = *normal * (2.0 * n_dot_l) - light_dir;
            let r_dot_v = reflection.dot_product(view_dir).max(0.0);
            specular += material.specular * radiance * (self.specular * r_dot_v.powf(material.shininess));
        }

        LocalIllumination {
            ambient_diffuse,
            specular,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::geometry::ray::Ray;
    use crate::scene::distant_light::DistantLight;

    fn overhead_hit() -> Intersection {
        let ray = Ray::new(Vector3::new(0.0, 5.0, 0.0), Vector3::new(0.0, -1.0, 0.0));
        Intersection::with_outward_normal(&ray, 5.0, Vector3::up(), (0.0, 0.0))
            .expect("valid normal")
    }

    fn overhead_light() -> Vec<Box<dyn Light + Sync + Send>> {
        vec![Box::new(DistantLight::new(
            Vector3::new(0.0, -1.0, 0.0),
            Color::white(),
            1.0,
        ))]
    }

    #[test]
    fn test_fully_lit_surface() {
        let lights = overhead_light();
        let local = Phong::new().illuminate(
            Color::white(),
            &Material::matte(),
            &overhead_hit(),
            &Vector3::up(),
            &lights,
            &|_, _| 1.0,
        );

        // ambient 0.2 * 0.1 + diffuse 0.8, highlight straight back at 0.1
        assert_eq!(local.ambient_diffuse, Color::new(0.82, 0.82, 0.82));
        assert_eq!(local.specular, Color::new(0.1, 0.1, 0.1));
        assert_eq!(local.total(), Color::new(0.92, 0.92, 0.92));
    }

    #[test]
    fn test_shadowed_surface_keeps_only_ambient() {
        let lights = overhead_light();
        let local = Phong::new().illuminate(
            Color::white(),
            &Material::matte(),
            &overhead_hit(),
            &Vector3::up(),
            &lights,
            &|_, _| 0.0,
        );

        assert_eq!(local.ambient_diffuse, Color::new(0.02, 0.02, 0.02));
        assert_eq!(local.specular, Color::black());
    }

    #[test]
    fn test_half_transmittance_halves_direct_light() {
        let lights = overhead_light();
        let full = Phong::new().illuminate(
            Color::white(),
            &Material::matte(),
            &overhead_hit(),
            &Vector3::up(),
            &lights,
            &|_, _| 1.0,
        );
        let half = Phong::new().illuminate(
            Color::white(),
            &Material::matte(),
            &overhead_hit(),
            &Vector3::up(),
            &lights,
            &|_, _| 0.5,
        );

        let ambient = Color::new(0.02, 0.02, 0.02);
        let expected = ambient + (full.ambient_diffuse - ambient) * 0.5;
        assert_eq!(half.ambient_diffuse, expected);
        assert_eq!(half.specular, full.specular * 0.5);
    }

    #[test]
    fn test_light_below_horizon_contributes_nothing() {
        let lights: Vec<Box<dyn Light + Sync + Send>> = vec![Box::new(DistantLight::new(
            Vector3::new(0.0, 1.0, 0.0),
            Color::white(),
            1.0,
        ))];
        let local = Phong::new().illuminate(
            Color::white(),
            &Material::matte(),
            &overhead_hit(),
            &Vector3::up(),
            &lights,
            &|_, _| 1.0,
        );

        assert_eq!(local.total(), Color::new(0.02, 0.02, 0.02));
    }
}
