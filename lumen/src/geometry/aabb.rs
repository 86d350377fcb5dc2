use super::ray::Ray;
use super::vector3::Vector3;

/// Axis-aligned bounding box. Must fully contain the surface it stands for;
/// a box smaller than its primitive breaks acceleration correctness.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Vector3,
    pub max: Vector3,
}

impl BoundingBox {

    pub const fn new(min: Vector3, max: Vector3) -> Self {
        BoundingBox { min, max }
    }

    /// Inverted box that any `extend_*` call snaps onto.
    pub const fn empty() -> Self {
        BoundingBox {
            min: Vector3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Vector3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn around(center: Vector3, half_extents: Vector3) -> Self {
        BoundingBox {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn from_points(points: &[Vector3]) -> Self {
        let mut bounds = Self::empty();
        for point in points {
            bounds.extend_point(point);
        }
        bounds
    }

    pub fn extend_point(&mut self, point: &Vector3) {
        self.min = Vector3::new(
            self.min.x.min(point.x),
            self.min.y.min(point.y),
            self.min.z.min(point.z),
        );
        self.max = Vector3::new(
            self.max.x.max(point.x),
            self.max.y.max(point.y),
            self.max.z.max(point.z),
        );
    }

    pub fn extend(&mut self, other: &BoundingBox) {
        self.extend_point(&other.min);
        self.extend_point(&other.max);
    }

    pub fn centroid(&self) -> Vector3 {
        (self.min + self.max) * 0.5
    }

    pub fn extent(&self, axis: u8) -> f64 {
        self.max.component(axis) - self.min.component(axis)
    }

    pub fn longest_axis(&self) -> u8 {
        let mut axis = 0;
        for candidate in 1..3 {
            if self.extent(candidate) > self.extent(axis) {
                axis = candidate;
            }
        }
        axis
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Slab test clipped to the ray interval: entry and exit distances, or
    /// `None` when the ray misses the box within its interval.
    pub fn intersect(&self, ray: &Ray) -> Option<(f64, f64)> {
        let origin = ray.origin();
        let direction = ray.direction();

        let mut t_enter = ray.t_min();
        let mut t_exit = ray.t_max();

        for axis in 0..3 {
            let component = direction.component(axis);
            let origin_component = origin.component(axis);
            let slab_min = self.min.component(axis);
            let slab_max = self.max.component(axis);

            if component.abs() < f64::EPSILON {
                // parallel ray: inside the slab or a guaranteed miss
                if origin_component < slab_min || origin_component > slab_max {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / component;
            let mut t1 = (slab_min - origin_component) * inv;
            let mut t2 = (slab_max - origin_component) * inv;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }

            t_enter = t_enter.max(t1);
            t_exit = t_exit.min(t2);
            if t_enter > t_exit {
                return None;
            }
        }

        Some((t_enter, t_exit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> BoundingBox {
        BoundingBox::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_slab_hit() {
        let ray = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        let (enter, exit) = unit_box().intersect(&ray).expect("ray aims at the box");
        assert!((enter - 4.0).abs() < 1e-9);
        assert!((exit - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_slab_miss() {
        let ray = Ray::new(Vector3::new(0.0, 5.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(unit_box().intersect(&ray).is_none());
    }

    #[test]
    fn test_slab_behind_origin() {
        let ray = Ray::new(Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(unit_box().intersect(&ray).is_none());
    }

    #[test]
    fn test_slab_origin_inside() {
        let ray = Ray::new(Vector3::zero(), Vector3::new(1.0, 0.0, 0.0));
        let (enter, exit) = unit_box().intersect(&ray).expect("origin is inside the box");
        assert!((enter - crate::geometry::ray::RAY_BIAS).abs() < 1e-9);
        assert!((exit - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_parallel_ray_outside_slab() {
        let ray = Ray::new(Vector3::new(0.0, 2.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(unit_box().intersect(&ray).is_none());
    }

    #[test]
    fn test_extend_and_centroid() {
        let mut bounds = BoundingBox::empty();
        bounds.extend_point(&Vector3::new(-1.0, 0.0, 2.0));
        bounds.extend_point(&Vector3::new(3.0, 4.0, -2.0));
        assert_eq!(bounds.min, Vector3::new(-1.0, 0.0, -2.0));
        assert_eq!(bounds.max, Vector3::new(3.0, 4.0, 2.0));
        assert_eq!(bounds.centroid(), Vector3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_longest_axis() {
        let bounds = BoundingBox::new(Vector3::zero(), Vector3::new(1.0, 5.0, 2.0));
        assert_eq!(bounds.longest_axis(), 1);
    }

    #[test]
    fn test_zero_volume_box_is_hittable() {
        let flat = BoundingBox::new(Vector3::new(-1.0, 0.0, -1.0), Vector3::new(1.0, 0.0, 1.0));
        let ray = Ray::new(Vector3::new(0.0, 5.0, 0.0), Vector3::new(0.0, -1.0, 0.0));
        assert!(flat.intersect(&ray).is_some());
    }
}
