use std::sync::Arc;

use lumen_core::models::color::Color;

use crate::geometry::vector3::Vector3;
use crate::shading::phong::Phong;
use crate::shading::IlluminationModel;
use crate::textures::{SolidColor, Texture};

/// Immutable surface response, shared by reference across any number of
/// primitives.
#[derive(Clone, Debug)]
pub struct Material {
    pub ambient: Color,
    pub specular: Color,
    pub shininess: f64,
    pub reflectivity: f64,
    pub transparency: f64,
    pub refractive_index: f64,
}

impl Material {

    pub fn matte() -> Self {
        Material {
            ambient: Color::new(0.1, 0.1, 0.1),
            specular: Color::white(),
            shininess: 50.0,
            reflectivity: 0.0,
            transparency: 0.0,
            refractive_index: 1.0,
        }
    }

    pub fn mirror(reflectivity: f64) -> Self {
        Material {
            reflectivity,
            ..Self::matte()
        }
    }

    pub fn glass(transparency: f64, refractive_index: f64) -> Self {
        Material {
            transparency,
            refractive_index,
            ..Self::matte()
        }
    }

    pub fn with_ambient(self, ambient: Color) -> Self {
        Material { ambient, ..self }
    }

    pub fn with_specular(self, specular: Color) -> Self {
        Material { specular, ..self }
    }

    pub fn with_shininess(self, shininess: f64) -> Self {
        Material { shininess, ..self }
    }
}

/// Everything a primitive needs to be shaded: the material, the base-color
/// texture and the illumination model, all shared read-only handles.
#[derive(Clone)]
pub struct Surface {
    pub material: Arc<Material>,
    pub texture: Arc<dyn Texture + Send + Sync>,
    pub illumination: Arc<dyn IlluminationModel + Send + Sync>,
}

impl Surface {

    pub fn new(
        material: Arc<Material>,
        texture: Arc<dyn Texture + Send + Sync>,
        illumination: Arc<dyn IlluminationModel + Send + Sync>,
    ) -> Self {
        Surface {
            material,
            texture,
            illumination,
        }
    }

    /// Solid color under Phong: the common case in demo scenes.
    pub fn colored(color: Color, material: Material) -> Self {
        Self::new(
            Arc::new(material),
            Arc::new(SolidColor::new(color)),
            Arc::new(Phong::new()),
        )
    }

    pub fn textured(texture: Arc<dyn Texture + Send + Sync>, material: Material) -> Self {
        Self::new(Arc::new(material), texture, Arc::new(Phong::new()))
    }

    pub fn base_color(&self, uv: (f64, f64), point: &Vector3) -> Color {
        self.texture.color_at(uv, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_presets() {
        let mirror = Material::mirror(0.35);
        assert_eq!(mirror.reflectivity, 0.35);
        assert_eq!(mirror.transparency, 0.0);

        let glass = Material::glass(0.8, 1.1);
        assert_eq!(glass.transparency, 0.8);
        assert_eq!(glass.refractive_index, 1.1);
    }

    #[test]
    fn test_surface_is_shared_not_copied() {
        let surface = Surface::colored(Color::white(), Material::matte());
        let clone = surface.clone();
        assert!(Arc::ptr_eq(&surface.material, &clone.material));
    }

    #[test]
    fn test_base_color_comes_from_texture() {
        let surface = Surface::colored(Color::new(0.2, 0.4, 0.6), Material::matte());
        let color = surface.base_color((0.5, 0.5), &Vector3::zero());
        assert_eq!(color, Color::new(0.2, 0.4, 0.6));
    }
}
