use std::collections::HashMap;
use std::sync::Arc;

use lumen_core::models::color::Color;

use crate::geometry::vector3::Vector3;
use crate::materials::material::{Material, Surface};
use crate::objects::cuboid::Cuboid;
use crate::objects::sphere::Sphere;
use crate::objects::Primitive;
use crate::scene::camera::Camera;
use crate::scene::point_light::PointLight;
use crate::scene::scene::Scene;
use crate::textures::mosaic::Mosaic;

use super::provider::{option_usize, SceneProvider, SceneError};

/// The classic two-spheres-over-a-patterned-floor arrangement from
/// Whitted's paper: one mirror sphere, one glass sphere, a mosaic slab.
pub struct WhittedSceneProvider {
}

impl WhittedSceneProvider {

    pub fn new() -> Self {
        WhittedSceneProvider {}
    }
}

impl SceneProvider for WhittedSceneProvider {

    fn scene(&self, options: &HashMap<String, String>) -> Result<Scene, SceneError> {
        let width = option_usize(options, "width", 500);
        let height = option_usize(options, "height", 500);

        let mut scene = Scene::new();

        scene.set_camera(Camera::new(
            Vector3::new(1.0, 3.0, -3.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 0.6, 0.0),
            90.0,
            width,
            height,
        ));

        scene.add_light(Box::new(PointLight::new(
            Vector3::new(7.0, 5.0, -40.0),
            Color::white(),
            25_000.0,
        )));

        scene.add_object(Primitive::Sphere(Sphere::new(
            Vector3::new(-0.5, 0.5, -0.9),
            1.1,
            Surface::colored(
                Color::new(1.0, 1.0, 0.0),
                Material::mirror(0.35).with_ambient(Color::black()),
            ),
        )));

        scene.add_object(Primitive::Sphere(Sphere::new(
            Vector3::new(1.2, 0.7, -1.7),
            1.2,
            Surface::colored(
                Color::new(0.0, 0.0, 1.0),
                Material::glass(0.8, 1.1).with_ambient(Color::black()),
            ),
        )));

        scene.add_object(Primitive::Cuboid(Cuboid::new(
            Vector3::new(0.0, 1.0, 0.3),
            5.5,
            4.0,
            0.7,
            Surface::textured(
                Arc::new(Mosaic::default()),
                Material::matte().with_ambient(Color::black()),
            ),
        )));

        Ok(scene)
    }
}
