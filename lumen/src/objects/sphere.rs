use std::f64::consts::PI;

use crate::geometry::aabb::BoundingBox;
use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;
use crate::materials::material::Surface;
use crate::render::intersection::Intersection;

use super::Shape;

pub struct Sphere {

    center: Vector3,
    radius: f64,
    surface: Surface,
    bounds: BoundingBox,
}

impl Sphere {

    pub fn new(center: Vector3, radius: f64, surface: Surface) -> Self {
        let half_extents = Vector3::new(radius, radius, radius);

        Sphere {
            center,
            radius,
            surface,
            bounds: BoundingBox::around(center, half_extents),
        }
    }

    pub fn center(&self) -> &Vector3 {
        &self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Spherical coordinates of a unit direction from the center, nudged
    /// away from the wrap seam so u never lands exactly on 0 or 1.
    fn uv(direction: &Vector3) -> (f64, f64) {
        let theta = direction.z.atan2(direction.x);
        let phi = direction.y.clamp(-1.0, 1.0).acos();

        let mut u = ((theta + PI) / (2.0 * PI)).rem_euclid(1.0);
        let v = phi / PI;

        let epsilon = 1e-5;
        if u < epsilon {
            u += epsilon;
        } else if u > 1.0 - epsilon {
            u -= epsilon;
        }

        (u, v)
    }
}

impl Shape for Sphere {

    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let oc = *ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let b = 2.0 * oc.dot_product(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_discriminant = discriminant.sqrt();
        let t_near = (-b - sqrt_discriminant) / (2.0 * a);
        let t_far = (-b + sqrt_discriminant) / (2.0 * a);

        let t = if ray.contains(t_near) {
            t_near
        } else if ray.contains(t_far) {
            t_far
        } else {
            return None;
        };

        let outward_normal = (ray.point(t) - self.center) / self.radius;
        let uv = Self::uv(&outward_normal);

        Intersection::with_outward_normal(ray, t, outward_normal, uv)
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

    fn unit_sphere() -> Sphere {
        Sphere::new(Vector3::zero(), 1.0, Surface::colored(Color::white(), Material::matte()))
    }

    #[test]
    fn test_hit_from_front() {
        let sphere = unit_sphere();
        let ray = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));

        let hit = sphere.intersect(&ray).expect("ray aims at the sphere");
        assert!((hit.ray_distance() - 4.0).abs() < 1e-9);
        assert_eq!(*hit.normal(), Vector3::new(0.0, 0.0, -1.0));
        assert!(hit.front_face());
    }

    #[test]
    fn test_miss() {
        let sphere = unit_sphere();
        let ray = Ray::new(Vector3::new(0.0, 3.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_hit_from_inside_flips_normal() {
        let sphere = unit_sphere();
        let ray = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, 1.0));

        let hit = sphere.intersect(&ray).expect("origin is inside");
        assert!((hit.ray_distance() - 1.0).abs() < 1e-9);
        assert!(!hit.front_face());
        assert_eq!(*hit.normal(), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = unit_sphere();
        let ray = Ray::new(Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_interval_excludes_far_hit() {
        let sphere = unit_sphere();
        let ray = Ray::with_interval(
            Vector3::new(0.0, 0.0, -5.0),
            Vector3::new(0.0, 0.0, 1.0),
            1e-4,
            2.0,
        );
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_bounds() {
        let sphere = Sphere::new(
            Vector3::new(1.0, 2.0, 3.0),
            0.5,
            Surface::colored(Color::white(), Material::matte()),
        );
        assert_eq!(sphere.bounds().min, Vector3::new(0.5, 1.5, 2.5));
        assert_eq!(sphere.bounds().max, Vector3::new(1.5, 2.5, 3.5));
    }

    #[test]
    fn test_uv_stays_off_the_seam() {
        for direction in &[
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(-1.0, 0.0, -1e-9),
            Vector3::new(0.0, 1.0, 0.0),
        ] {
            let (u, v) = Sphere::uv(&direction.normalized());
            assert!(u > 0.0 && u < 1.0);
            assert!((0.0..=1.0).contains(&v));
        }
    }
}
