use crate::geometry::aabb::BoundingBox;
use crate::geometry::ray::Ray;
use crate::materials::material::Surface;
use crate::render::intersection::Intersection;

pub mod cuboid;
pub mod cylinder;
pub mod mesh;
pub mod polygon;
pub mod sphere;
pub mod torus;

use cuboid::Cuboid;
use cylinder::Cylinder;
use polygon::Polygon;
use sphere::Sphere;
use torus::Torus;

/// Capability interface every shape provides. `intersect` returns the
/// nearest hit inside the ray interval or `None`; `bounds` is cached at
/// construction and fully contains the surface.
pub trait Shape {

    fn intersect(&self, ray: &Ray) -> Option<Intersection>;

    fn bounds(&self) -> &BoundingBox;

    fn surface(&self) -> &Surface;
}

/// Closed set of scene primitives, dispatched by exhaustive match so the
/// hot intersection loop stays free of virtual calls.
pub enum Primitive {
    Sphere(Sphere),
    Cuboid(Cuboid),
    Cylinder(Cylinder),
    Torus(Torus),
    Polygon(Polygon),
}

impl Shape for Primitive {

    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        match self {
            Primitive::Sphere(sphere) => sphere.intersect(ray),
            Primitive::Cuboid(cuboid) => cuboid.intersect(ray),
            Primitive::Cylinder(cylinder) => cylinder.intersect(ray),
            Primitive::Torus(torus) => torus.intersect(ray),
            Primitive::Polygon(polygon) => polygon.intersect(ray),
        }
    }

    fn bounds(&self) -> &BoundingBox {
        match self {
            Primitive::Sphere(sphere) => sphere.bounds(),
            Primitive::Cuboid(cuboid) => cuboid.bounds(),
            Primitive::Cylinder(cylinder) => cylinder.bounds(),
            Primitive::Torus(torus) => torus.bounds(),
            Primitive::Polygon(polygon) => polygon.bounds(),
        }
    }

    fn surface(&self) -> &Surface {
        match self {
            Primitive::Sphere(sphere) => sphere.surface(),
            Primitive::Cuboid(cuboid) => cuboid.surface(),
            Primitive::Cylinder(cylinder) => cylinder.surface(),
            Primitive::Torus(torus) => torus.surface(),
            Primitive::Polygon(polygon) => polygon.surface(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use lumen_core::models::color::Color;

    use crate::geometry::vector3::Vector3;
    use crate::materials::material::Material;

    /// A hit reported by any primitive must lie on a ray that also passes
    /// its bounding box slab test: the box is necessary, not sufficient.
    #[test]
    fn test_bounds_conformance_for_all_primitives() {
        let surface = Surface::colored(Color::white(), Material::matte());
        let primitives = vec![
            Primitive::Sphere(Sphere::new(Vector3::new(0.3, -0.2, 0.5), 1.1, surface.clone())),
            Primitive::Cuboid(Cuboid::new(Vector3::zero(), 1.4, 0.8, 2.0, surface.clone())),
            Primitive::Cylinder(Cylinder::new(Vector3::new(-0.4, 0.1, 0.0), 0.7, 1.8, surface.clone())),
            Primitive::Torus(Torus::new(Vector3::zero(), 1.2, 0.4, surface.clone())),
            Primitive::Polygon(Polygon::new(
                Vector3::new(-1.0, 0.0, -1.0),
                Vector3::new(1.0, 0.0, -1.0),
                Vector3::new(0.0, 1.5, 1.0),
                surface,
            )),
        ];

        let origins = [
            Vector3::new(0.0, 0.0, -5.0),
            Vector3::new(4.0, 3.0, 2.0),
            Vector3::new(-3.0, 1.5, 0.5),
            Vector3::new(0.1, 5.0, 0.2),
        ];
        let directions = [
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(-1.0, -0.7, -0.4),
            Vector3::new(1.0, -0.5, 0.0),
            Vector3::new(0.0, -1.0, 0.1),
        ];

        for primitive in &primitives {
            for origin in &origins {
                for direction in &directions {
                    let ray = Ray::new(*origin, *direction);
                    if let Some(hit) = primitive.intersect(&ray) {
                        assert!(
                            primitive.bounds().intersect(&ray).is_some(),
                            "hit at t={} outside the primitive bounds",
                            hit.ray_distance()
                        );
                        assert!(ray.contains(hit.ray_distance()));
                        assert!(hit.normal().is_finite());
                        assert!((hit.normal().length() - 1.0).abs() < 1e-6);
                    }
                }
            }
        }
    }
}
