use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;

/// One surface hit. Transient: produced by an intersection query and
/// consumed within a single shading evaluation.
pub struct Intersection {

    ray_distance: f64,
    point: Vector3,
    normal: Vector3,
    front_face: bool,
    uv: (f64, f64),
}

impl Intersection {

    /// Builds the record from the geometric (outward) normal, orienting the
    /// stored normal against the incoming ray. A degenerate outward normal
    /// means broken geometry; the hit is discarded rather than letting NaNs
    /// leak into shading.
    pub fn with_outward_normal(
        ray: &Ray,
        ray_distance: f64,
        outward_normal: Vector3,
        uv: (f64, f64),
    ) -> Option<Self> {
        if !outward_normal.is_finite() || outward_normal.length_squared() == 0.0 {
            return None;
        }

        let outward_normal = outward_normal.normalized();
        let front_face = ray.direction().dot_product(&outward_normal) < 0.0;

        Some(Self {
            ray_distance,
            point: ray.point(ray_distance),
            normal: if front_face { outward_normal } else { -outward_normal },
            front_face,
            uv,
        })
    }

    pub fn ray_distance(&self) -> f64 {
        self.ray_distance
    }

    pub fn point(&self) -> &Vector3 {
        &self.point
    }

    /// Unit normal, oriented against the incoming ray.
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Whether the ray hit the geometric outside of the surface.
    pub fn front_face(&self) -> bool {
        self.front_face
    }

    pub fn uv(&self) -> (f64, f64) {
        self.uv
    }
}
