use std::f64::consts::PI;

use crate::geometry::aabb::BoundingBox;
use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;
use crate::materials::material::Surface;
use crate::render::intersection::Intersection;

use super::Shape;

/// Finite cylinder aligned with the Y axis, with flat caps.
pub struct Cylinder {

    center: Vector3,
    radius: f64,
    half_height: f64,
    surface: Surface,
    bounds: BoundingBox,
}

impl Cylinder {

    pub fn new(center: Vector3, radius: f64, height: f64, surface: Surface) -> Self {
        let half_height = height / 2.0;
        let half_extents = Vector3::new(radius, half_height, radius);

        Cylinder {
            center,
            radius,
            half_height,
            surface,
            bounds: BoundingBox::around(center, half_extents),
        }
    }
}

impl Shape for Cylinder {

    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let o = *ray.origin() - self.center;
        let d = ray.direction();

        // side surface: project onto the XZ plane
        let a = d.x * d.x + d.z * d.z;
        let b = 2.0 * (o.x * d.x + o.z * d.z);
        let c = o.x * o.x + o.z * o.z - self.radius * self.radius;

        let mut t_side = None;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant >= 0.0 && a > f64::EPSILON {
            let sqrt_discriminant = discriminant.sqrt();
            for t in &[(-b - sqrt_discriminant) / (2.0 * a), (-b + sqrt_discriminant) / (2.0 * a)] {
                if !ray.contains(*t) {
                    continue;
                }
                let y = o.y + d.y * t;
                if y.abs() <= self.half_height && t_side.map_or(true, |best| *t < best) {
                    t_side = Some(*t);
                }
            }
        }

        // flat caps
        let mut t_cap = None;
        if d.y.abs() > f64::EPSILON {
            for cap_sign in &[-1.0, 1.0] {
                let cap_y = cap_sign * self.half_height;
                let t = (cap_y - o.y) / d.y;
                if !ray.contains(t) {
                    continue;
                }
                let x = o.x + d.x * t;
                let z = o.z + d.z * t;
                if x * x + z * z <= self.radius * self.radius
                    && t_cap.map_or(true, |best| t < best)
                {
                    t_cap = Some(t);
                }
            }
        }

        let t = match (t_side, t_cap) {
            (Some(side), Some(cap)) => side.min(cap),
            (Some(side), None) => side,
            (None, Some(cap)) => cap,
            (None, None) => return None,
        };

        let local = o + *d * t;
        let on_cap = t_cap == Some(t);
        let outward_normal = if on_cap {
            Vector3::new(0.0, local.y.signum(), 0.0)
        } else {
            Vector3::new(local.x, 0.0, local.z).normalized()
        };

        let u = (local.z.atan2(local.x) + PI) / (2.0 * PI);
        let v = (local.y + self.half_height) / (2.0 * self.half_height);

        Intersection::with_outward_normal(ray, t, outward_normal, (u, v))
    }

    fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use lumen_core::models::color::Color;

    use crate::materials::material::Material;

    fn unit_cylinder() -> Cylinder {
        Cylinder::new(
            Vector3::zero(),
            1.0,
            2.0,
            Surface::colored(Color::white(), Material::matte()),
        )
    }

    #[test]
    fn test_hit_side() {
        let cylinder = unit_cylinder();
        let ray = Ray::new(Vector3::new(-5.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));

        let hit = cylinder.intersect(&ray).expect("ray aims at the side");
        assert!((hit.ray_distance() - 4.0).abs() < 1e-9);
        assert_eq!(*hit.normal(), Vector3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_hit_top_cap() {
        let cylinder = unit_cylinder();
        let ray = Ray::new(Vector3::new(0.2, 5.0, 0.1), Vector3::new(0.0, -1.0, 0.0));

        let hit = cylinder.intersect(&ray).expect("ray falls onto the cap");
        assert!((hit.ray_distance() - 4.0).abs() < 1e-9);
        assert_eq!(*hit.normal(), Vector3::up());
    }

    #[test]
    fn test_miss_above_side() {
        let cylinder = unit_cylinder();
        // passes the infinite cylinder but above the finite extent
        let ray = Ray::new(Vector3::new(-5.0, 1.5, 0.0), Vector3::new(1.0, 0.0, 0.0));
        assert!(cylinder.intersect(&ray).is_none());
    }

    #[test]
    fn test_miss_beside_cap() {
        let cylinder = unit_cylinder();
        let ray = Ray::new(Vector3::new(2.0, 5.0, 0.0), Vector3::new(0.0, -1.0, 0.0));
        assert!(cylinder.intersect(&ray).is_none());
    }

    #[test]
    fn test_bounds_contain_surface() {
        let cylinder = Cylinder::new(
            Vector3::new(1.0, 2.0, 3.0),
            0.5,
            4.0,
            Surface::colored(Color::white(), Material::matte()),
        );
        assert_eq!(cylinder.bounds().min, Vector3::new(0.5, 0.0, 2.5));
        assert_eq!(cylinder.bounds().max, Vector3::new(1.5, 4.0, 3.5));
    }
}
