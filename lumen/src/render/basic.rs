use lumen_core::models::radiance::RadianceMap;

use crate::scene::scene::Scene;

use super::render::{checked_camera, render_pixel, Render, RenderError};

/// Single-threaded scanline renderer. The reference implementation the
/// multithreaded one is checked against.
pub struct BasicRender {

    samples_per_axis: u32,
}

impl BasicRender {

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

impl Render for BasicRender {

    fn render(&self, scene: &Scene, render_to: &mut RadianceMap) -> Result<(), RenderError> {
        let camera = checked_camera(scene, render_to)?;

        for y in 0..render_to.height {
            for x in 0..render_to.width {
                let color = render_pixel(scene, camera, x, y, self.samples_per_axis);
                render_to.set(x, y, color);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use lumen_core::models::color::Color;

    use crate::geometry::vector3::Vector3;
    use crate::materials::material::{Material, Surface};
    use crate::objects::sphere::Sphere;
    use crate::objects::Primitive;
    use crate::scene::camera::Camera;
    use crate::scene::distant_light::DistantLight;

    fn test_scene(width: usize, height: usize) -> Scene {
        let mut scene = Scene::new();
        scene.set_camera(Camera::new(
            Vector3::new(0.0, 0.0, 5.0),
            Vector3::zero(),
            Vector3::up(),
            60.0,
            width,
            height,
        ));
        scene.add_object(Primitive::Sphere(Sphere::new(
            Vector3::zero(),
            1.0,
            Surface::colored(Color::new(1.0, 0.2, 0.2), Material::matte()),
        )));
        scene.add_light(Box::new(DistantLight::new(
            Vector3::new(0.0, -1.0, -1.0),
            Color::white(),
            1.0,
        )));
        scene.build();
        scene
    }

    #[test]
    fn test_renders_sphere_against_background() {
        let scene = test_scene(9, 9);
        let mut film = RadianceMap::new(9, 9);

        BasicRender::new().render(&scene, &mut film).expect("valid scene renders");

        assert!(film.is_finite());
        // center pixel sees the sphere, the corner sees the background
        assert_ne!(film.get(4, 4), scene.background());
        assert_eq!(film.get(0, 0), scene.background());
    }

    #[test]
    fn test_missing_camera_is_reported_before_rendering() {
        let mut scene = Scene::new();
        scene.build();
        let mut film = RadianceMap::new(4, 4);

        match BasicRender::new().render(&scene, &mut film) {
            Err(RenderError::MissingCamera) => {},
            other => panic!("expected MissingCamera, got {:?}", other.err().map(|e| e.to_string())),
        }
    }

    #[test]
    fn test_dirty_scene_is_rejected() {
        let mut scene = test_scene(4, 4);
        scene.add_object(Primitive::Sphere(Sphere::new(
            Vector3::new(3.0, 0.0, 0.0),
            1.0,
            Surface::colored(Color::white(), Material::matte()),
        )));

        let mut film = RadianceMap::new(4, 4);
        match BasicRender::new().render(&scene, &mut film) {
            Err(RenderError::SceneNotBuilt) => {},
            other => panic!("expected SceneNotBuilt, got {:?}", other.err().map(|e| e.to_string())),
        }
    }

    #[test]
    fn test_empty_target_is_rejected() {
        let scene = test_scene(4, 4);
        let mut film = RadianceMap::new(0, 0);

        match BasicRender::new().render(&scene, &mut film) {
            Err(RenderError::EmptyTarget) => {},
            other => panic!("expected EmptyTarget, got {:?}", other.err().map(|e| e.to_string())),
        }
    }

    #[test]
    fn test_film_size_must_match_camera() {
        let scene = test_scene(8, 8);
        let mut film = RadianceMap::new(4, 4);

        match BasicRender::new().render(&scene, &mut film) {
            Err(RenderError::InvalidCamera { .. }) => {},
            other => panic!("expected InvalidCamera, got {:?}", other.err().map(|e| e.to_string())),
        }
    }

    #[test]
    fn test_supersampling_stays_finite() {
        let scene = test_scene(5, 5);
        let mut film = RadianceMap::new(5, 5);

        BasicRender::with_supersampling().render(&scene, &mut film).expect("valid scene renders");
        assert!(film.is_finite());
    }
}
