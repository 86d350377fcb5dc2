use crate::geometry::aabb::BoundingBox;
use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;
use crate::materials::material::Surface;
use crate::render::intersection::Intersection;

use super::Shape;

/// Axis-aligned box given by its center and full extents.
pub struct Cuboid {

    center: Vector3,
    surface: Surface,
    bounds: BoundingBox,
}

impl Cuboid {

    pub fn new(center: Vector3, width: f64, height: f64, depth: f64, surface: Surface) -> Self {
        let half_extents = Vector3::new(width / 2.0, height / 2.0, depth / 2.0);

        Cuboid {
            center,
            surface,
            bounds: BoundingBox::around(center, half_extents),
        }
    }

    /// Planar UV on the face orthogonal to `axis`, both coordinates
    /// normalized over the face extents.
    fn face_uv(&self, point: &Vector3, axis: u8) -> (f64, f64) {
        let (u_axis, v_axis) = match axis {
            0 => (2, 1),
            1 => (0, 2),
            _ => (0, 1),
        };

        let u_extent = self.bounds.extent(u_axis).max(f64::EPSILON);
        let v_extent = self.bounds.extent(v_axis).max(f64::EPSILON);

        (
            (point.component(u_axis) - self.bounds.min.component(u_axis)) / u_extent,
            (point.component(v_axis) - self.bounds.min.component(v_axis)) / v_extent,
        )
    }
}

impl Shape for Cuboid {

    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let origin = ray.origin();
        let direction = ray.direction();

        // slab test tracking which axis bounds the interval on each side
        let mut t_enter = f64::NEG_INFINITY;
        let mut t_exit = f64::INFINITY;
        let mut enter_axis = 0;
        let mut exit_axis = 0;

        for axis in 0..3 {
            let component = direction.component(axis);
            let origin_component = origin.component(axis);
            let slab_min = self.bounds.min.component(axis);
            let slab_max = self.bounds.max.component(axis);

            if component.abs() < f64::EPSILON {
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

            if t1 > t_enter {
                t_enter = t1;
                enter_axis = axis;
            }
            if t2 < t_exit {
                t_exit = t2;
                exit_axis = axis;
            }
            if t_enter > t_exit {
                return None;
            }
        }

        let (t, axis) = if ray.contains(t_enter) {
            (t_enter, enter_axis)
        } else if ray.contains(t_exit) {
            // origin inside the box: the exit face is the visible one
            (t_exit, exit_axis)
        } else {
            return None;
        };

        let point = ray.point(t);
        let mut outward_normal = Vector3::zero();
        let side = point.component(axis) - self.center.component(axis);
        match axis {
            0 => outward_normal.x = side.signum(),
            1 => outward_normal.y = side.signum(),
            _ => outward_normal.z = side.signum(),
        }

        let uv = self.face_uv(&point, axis);
        Intersection::with_outward_normal(ray, t, outward_normal, uv)
    }

    fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }
}
