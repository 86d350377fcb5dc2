use indicatif::ProgressBar;
use rayon::prelude::*;

use lumen_core::models::radiance::RadianceMap;

use crate::scene::scene::Scene;

use super::render::{checked_camera, render_pixel, Render, RenderError};

/// Rayon renderer: scanlines are handed to workers as disjoint chunks of
/// the film. The scene is read-only after `build()`, so there is nothing to
/// synchronize.
pub struct MultithreadedRender {

    samples_per_axis: u32,
}

impl MultithreadedRender {

    pub fn new() -> Self {
        Self {
            samples_per_axis: 1,
        }
    }

    pub fn with_supersampling() -> Self {
        Self {
            samples_per_axis: 2,
        }
    }
}

impl Render for MultithreadedRender {

    fn render(&self, scene: &Scene, render_to: &mut RadianceMap) -> Result<(), RenderError> {
        let camera = checked_camera(scene, render_to)?;

        let width = render_to.width;
        let progress = ProgressBar::new(render_to.height as u64);

        render_to.texels.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
            for (x, texel) in row.iter_mut().enumerate() {
                *texel = render_pixel(scene, camera, x, y, self.samples_per_axis);
            }
            progress.inc(1);
        });

        progress.finish_and_clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use lumen_core::models::color::Color;

    use crate::geometry::vector3::Vector3;
    use crate::materials::material::{Material, Surface};
    use crate::objects::cuboid::Cuboid;
    use crate::objects::sphere::Sphere;
    use crate::objects::Primitive;
    use crate::render::basic::BasicRender;
    use crate::scene::camera::Camera;
    use crate::scene::point_light::PointLight;

    #[test]
    fn test_matches_single_threaded_render() {
        let width = 12;
        let height = 12;

        let mut scene = Scene::new();
        scene.set_camera(Camera::new(
            Vector3::new(0.0, 1.0, 6.0),
            Vector3::zero(),
            Vector3::up(),
            70.0,
            width,
            height,
        ));
        scene.add_object(Primitive::Sphere(Sphere::new(
            Vector3::new(-0.6, 0.3, 0.0),
            0.9,
            Surface::colored(Color::new(1.0, 1.0, 0.2), Material::mirror(0.3)),
        )));
        scene.add_object(Primitive::Cuboid(Cuboid::new(
            Vector3::new(0.0, -1.5, 0.0),
            8.0,
            1.0,
            8.0,
            Surface::colored(Color::new(0.2, 0.8, 0.2), Material::matte()),
        )));
        scene.add_light(Box::new(PointLight::new(
            Vector3::new(5.0, 8.0, 5.0),
            Color::white(),
            2000.0,
        )));
        scene.build();

        let mut sequential = RadianceMap::new(width, height);
        BasicRender::new().render(&scene, &mut sequential).expect("valid scene renders");

        let mut parallel = RadianceMap::new(width, height);
        MultithreadedRender::new().render(&scene, &mut parallel).expect("valid scene renders");

        for (a, b) in sequential.texels.iter().zip(&parallel.texels) {
            assert_eq!(a, b);
        }
    }
}
