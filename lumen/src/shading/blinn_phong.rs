use lumen_core::models::color::Color;

use crate::geometry::vector3::Vector3;
use crate::materials::material::Material;
use crate::render::intersection::Intersection;
use crate::scene::light::Light;

use super::{IlluminationModel, LocalIllumination, ShadowTest};

/// Blinn-Phong variant: the highlight uses the halfway vector instead of the
/// mirrored light direction, which softens grazing highlights.
pub struct BlinnPhong {
    ambient: f64,
    diffuse: f64,
    specular: f64,
}

impl BlinnPhong {

    pub fn new() -> Self {
        BlinnPhong {
            ambient: 0.2,
            diffuse: 0.8,
            specular: 0.1,
        }
    }
}

impl IlluminationModel for BlinnPhong {

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

            let halfway = (light_dir + *view_dir).normalized();
            let n_dot_h = normal.dot_product(&halfway).max(0.0);
            specular += material.specular * radiance * (self.specular * n_dot_h.powf(material.shininess));
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

    #[test]
    fn test_overhead_light_matches_phong_diffuse() {
        let ray = Ray::new(Vector3::new(0.0, 5.0, 0.0), Vector3::new(0.0, -1.0, 0.0));
        let hit = Intersection::with_outward_normal(&ray, 5.0, Vector3::up(), (0.0, 0.0))
            .expect("valid normal");
        let lights: Vec<Box<dyn Light + Sync + Send>> = vec![Box::new(DistantLight::new(
            Vector3::new(0.0, -1.0, 0.0),
            Color::white(),
            1.0,
        ))];

        let local = BlinnPhong::new().illuminate(
            Color::white(),
            &Material::matte(),
            &hit,
            &Vector3::up(),
            &lights,
            &|_, _| 1.0,
        );

        // halfway vector coincides with the normal, so the highlight peaks too
        assert_eq!(local.ambient_diffuse, Color::new(0.82, 0.82, 0.82));
        assert_eq!(local.specular, Color::new(0.1, 0.1, 0.1));
    }
}
