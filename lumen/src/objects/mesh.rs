use crate::geometry::transform::Transform;
use crate::io::traits::Model;
use crate::materials::material::Surface;

use super::polygon::Polygon;
use super::Primitive;

/// Fan-triangulates a loaded model into scene primitives. The instance
/// transform is baked into every triangle here, so the scene partition works
/// entirely in world space.
pub fn primitives_from_model(transform: &Transform, model: &dyn Model, surface: &Surface) -> Vec<Primitive> {
    let mut primitives = Vec::new();

    for polygon in model.polygons() {
        let vertices = polygon.get_vertices();
        if vertices.len() < 3 {
            continue;
        }

        let pillar = &vertices[0];
        for i in 1..vertices.len() - 1 {
            primitives.push(Primitive::Polygon(Polygon::from_vertices(
                transform,
                pillar,
                &vertices[i],
                &vertices[i + 1],
                surface.clone(),
            )));
        }
    }

    primitives
}
