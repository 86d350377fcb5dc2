use crate::geometry::aabb::BoundingBox;
use crate::geometry::models::Vertex;
use crate::geometry::ray::Ray;
use crate::geometry::transform::Transform;
use crate::geometry::vector3::Vector3;
use crate::materials::material::Surface;
use crate::render::intersection::Intersection;

use super::Shape;

const DELTA: f64 = 1e-9;

/// Triangle in world space with per-vertex UVs and, for smooth meshes,
/// optional per-vertex normals.
pub struct Polygon {

    v0: Vector3,

    v0v1: Vector3,
    v0v2: Vector3,

    face_normal: Vector3,
    vertex_normals: Option<[Vector3; 3]>,
    uvs: [(f64, f64); 3],

    surface: Surface,
    bounds: BoundingBox,
}

impl Polygon {

    pub fn new(v0: Vector3, v1: Vector3, v2: Vector3, surface: Surface) -> Self {
        let v0v1 = v1 - v0;
        let v0v2 = v2 - v0;

        Polygon {
            v0,
            v0v1,
            v0v2,
            face_normal: v0v1.cross_product(&v0v2).normalized(),
            vertex_normals: None,
            uvs: [(0.0, 0.0); 3],
            surface,
            bounds: BoundingBox::from_points(&[v0, v1, v2]),
        }
    }

    pub fn with_uvs(mut self, uvs: [(f64, f64); 3]) -> Self {
        self.uvs = uvs;
        self
    }

    pub fn with_vertex_normals(mut self, normals: [Vector3; 3]) -> Self {
        self.vertex_normals = Some(normals);
        self
    }

    /// Builds a world-space triangle from loaded mesh vertices, applying the
    /// instance transform. Vertex normals are kept only when the model
    /// actually provided them.
    pub fn from_vertices(transform: &Transform, a: &Vertex, b: &Vertex, c: &Vertex, surface: Surface) -> Self {
        let polygon = Self::new(
            transform.apply_for_point(a.geometry()),
            transform.apply_for_point(b.geometry()),
            transform.apply_for_point(c.geometry()),
            surface,
        );

        let normals = [a.normal(), b.normal(), c.normal()];
        if normals.iter().any(|n| n.length_squared() > 0.0) {
            let transformed = [
                transform.apply_for_vector(normals[0]).normalized(),
                transform.apply_for_vector(normals[1]).normalized(),
                transform.apply_for_vector(normals[2]).normalized(),
            ];
            polygon.with_vertex_normals(transformed)
        } else {
            polygon
        }
    }
}

impl Shape for Polygon {

    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let direction = ray.direction();

        // Möller–Trumbore
        let p = direction.cross_product(&self.v0v2);
        let det = self.v0v1.dot_product(&p);
        if det.abs() < DELTA {
            return None;
        }

        let inv_det = 1.0 / det;

        let s = *ray.origin() - self.v0;
        let u = s.dot_product(&p) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross_product(&self.v0v1);
        let v = direction.dot_product(&q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = self.v0v2.dot_product(&q) * inv_det;
        if !ray.contains(t) {
            return None;
        }

        let w = 1.0 - u - v;
        let (u0, v0) = self.uvs[0];
        let (u1, v1) = self.uvs[1];
        let (u2, v2) = self.uvs[2];
        let uv = (
            w * u0 + u * u1 + v * u2,
            w * v0 + u * v1 + v * v2,
        );

        let outward_normal = match &self.vertex_normals {
            Some([n0, n1, n2]) => *n0 * w + *n1 * u + *n2 * v,
            None => self.face_normal,
        };

        Intersection::with_outward_normal(ray, t, outward_normal, uv)
    }

    fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }
}
