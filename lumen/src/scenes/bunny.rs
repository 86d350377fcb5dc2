use std::collections::HashMap;

use lumen_core::models::color::Color;

use crate::geometry::transform::Transform;
use crate::geometry::vector3::Vector3;
use crate::io::obj::ObjFileLoader;
use crate::io::ply::PlyFileLoader;
use crate::io::traits::ModelLoader;
use crate::materials::material::{Material, Surface};
use crate::objects::cuboid::Cuboid;
use crate::objects::mesh::primitives_from_model;
use crate::objects::Primitive;
use crate::scene::camera::Camera;
use crate::scene::distant_light::DistantLight;
use crate::scene::scene::Scene;

use super::provider::{option_usize, SceneProvider, SceneError};

const DEFAULT_MODEL_PATH: &str = "assets/bunny.ply";

/// Scanned-mesh stress scene: a PLY model (the Stanford bunny by default)
/// over a ground slab. This is the scene the spatial partition earns its
/// keep on.
pub struct BunnySceneProvider {
}

impl BunnySceneProvider {

    pub fn new() -> Self {
        BunnySceneProvider {}
    }
}

impl SceneProvider for BunnySceneProvider {

    fn scene(&self, options: &HashMap<String, String>) -> Result<Scene, SceneError> {
        let width = option_usize(options, "width", 500);
        let height = option_usize(options, "height", 500);
        let model_path = options
            .get("model")
            .map(|path| path.as_str())
            .unwrap_or(DEFAULT_MODEL_PATH);

        let mut scene = Scene::new();

        scene.set_camera(Camera::new(
            Vector3::new(-0.02, 0.18, 0.28),
            Vector3::new(-0.02, 0.1, 0.0),
            Vector3::up(),
            50.0,
            width,
            height,
        ));

        scene.add_light(Box::new(DistantLight::new(
            Vector3::new(-0.4, -1.0, -0.3),
            Color::white(),
            2.0,
        )));

        let loader: Box<dyn ModelLoader> = if model_path.ends_with(".obj") {
            Box::new(ObjFileLoader::new())
        } else {
            Box::new(PlyFileLoader::new())
        };
        let model = loader.load(model_path)?;
        let bunny_surface = Surface::colored(Color::new(0.9, 0.85, 0.8), Material::matte());
        for primitive in primitives_from_model(&Transform::default(), model.as_ref(), &bunny_surface) {
            scene.add_object(primitive);
        }
        info!("bunny scene holds {} primitives", scene.objects().len());

        scene.add_object(Primitive::Cuboid(Cuboid::new(
            Vector3::new(0.0, 0.0, 0.0),
            2.0,
            0.066,
            2.0,
            Surface::colored(Color::new(0.3, 0.5, 0.3), Material::matte()),
        )));

        Ok(scene)
    }
}
