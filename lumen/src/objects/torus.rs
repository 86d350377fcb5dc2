use std::f64::consts::PI;

use crate::geometry::aabb::BoundingBox;
use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;
use crate::materials::material::Surface;
use crate::render::intersection::Intersection;

use super::Shape;

/// Torus with its ring in the XZ plane, centered on `center`.
/// Implicit surface: (|P|² + R² - r²)² = 4R²(Px² + Pz²).
pub struct Torus {

    center: Vector3,
    major_radius: f64,
    minor_radius: f64,
    surface: Surface,
    bounds: BoundingBox,
}

impl Torus {

    pub fn new(center: Vector3, major_radius: f64, minor_radius: f64, surface: Surface) -> Self {
        let reach = major_radius + minor_radius;
        let half_extents = Vector3::new(reach, minor_radius, reach);

        Torus {
            center,
            major_radius,
            minor_radius,
            surface,
            bounds: BoundingBox::around(center, half_extents),
        }
    }

    fn uv(&self, local: &Vector3) -> (f64, f64) {
        let theta = local.z.atan2(local.x);
        let u = ((theta + PI) / (2.0 * PI)).rem_euclid(1.0);

        // angle around the tube circle at this ring position
        let ring_x = self.major_radius * theta.cos();
        let ring_z = self.major_radius * theta.sin();
        let radial = ((local.x - ring_x).powi(2) + (local.z - ring_z).powi(2)).sqrt();
        let phi = local.y.atan2(radial);
        let v = (phi / (2.0 * PI) + 0.5).rem_euclid(1.0);

        let epsilon = 1e-5;
        (
            u.clamp(epsilon, 1.0 - epsilon),
            v.clamp(epsilon, 1.0 - epsilon),
        )
    }
}

impl Shape for Torus {

    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let o = *ray.origin() - self.center;
        let d = ray.direction();

        let big_r = self.major_radius;
        let small_r = self.minor_radius;

        let g = d.length_squared();
        let h = 2.0 * o.dot_product(d);
        let i = o.length_squared() + big_r * big_r - small_r * small_r;

        let c4 = g * g;
        let c3 = 2.0 * g * h;
        let c2 = 2.0 * g * i + h * h - 4.0 * big_r * big_r * (d.x * d.x + d.z * d.z);
        let c1 = 2.0 * h * i - 8.0 * big_r * big_r * (d.x * o.x + d.z * o.z);
        let c0 = i * i - 4.0 * big_r * big_r * (o.x * o.x + o.z * o.z);

        let roots = solve_quartic(c3 / c4, c2 / c4, c1 / c4, c0 / c4);

        let mut t_hit = None;
        for t in roots {
            if ray.contains(t) && t_hit.map_or(true, |best| t < best) {
                t_hit = Some(t);
            }
        }
        let t = t_hit?;

        // gradient of the implicit function
        let local = ray.point(t) - self.center;
        let sum2 = local.length_squared() + big_r * big_r - small_r * small_r;
        let outward_normal = Vector3::new(
            4.0 * local.x * sum2 - 8.0 * big_r * big_r * local.x,
            4.0 * local.y * sum2,
            4.0 * local.z * sum2 - 8.0 * big_r * big_r * local.z,
        );

        let uv = self.uv(&local);
        Intersection::with_outward_normal(ray, t, outward_normal, uv)
    }

    fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }
}

/// Real roots of x² + p x + q = 0.
fn solve_quadratic(p: f64, q: f64) -> Vec<f64> {
    let discriminant = p * p / 4.0 - q;
    if discriminant < 0.0 {
        return Vec::new();
    }

    let sqrt_discriminant = discriminant.sqrt();
    vec![-p / 2.0 - sqrt_discriminant, -p / 2.0 + sqrt_discriminant]
}

/// Real roots of x³ + a x² + b x + c = 0.
fn solve_cubic(a: f64, b: f64, c: f64) -> Vec<f64> {
    let q = (a * a - 3.0 * b) / 9.0;
    let r = (2.0 * a * a * a - 9.0 * a * b + 27.0 * c) / 54.0;

    if r * r < q * q * q {
        // three real roots
        let theta = (r / q.powi(3).sqrt()).clamp(-1.0, 1.0).acos();
        let scale = -2.0 * q.sqrt();
        (0..3)
            .map(|k| scale * ((theta + 2.0 * PI * k as f64) / 3.0).cos() - a / 3.0)
            .collect()
    } else {
        let big_a = -r.signum() * (r.abs() + (r * r - q * q * q).sqrt()).cbrt();
        let big_b = if big_a != 0.0 { q / big_a } else { 0.0 };
        vec![big_a + big_b - a / 3.0]
    }
}

/// Real roots of x⁴ + a x³ + b x² + c x + d = 0, by Ferrari's reduction to a
/// resolvent cubic and two quadratics.
fn solve_quartic(a: f64, b: f64, c: f64, d: f64) -> Vec<f64> {
    // depressed quartic y⁴ + p y² + q y + r with x = y - a/4
    let p = b - 3.0 * a * a / 8.0;
    let q = c - a * b / 2.0 + a * a * a / 8.0;
    let r = d - a * c / 4.0 + a * a * b / 16.0 - 3.0 * a.powi(4) / 256.0;

    let shift = -a / 4.0;

    if q.abs() < 1e-12 {
        // biquadratic: solve for y²
        let mut roots = Vec::new();
        for z in solve_quadratic(p, r) {
            if z >= 0.0 {
                let y = z.sqrt();
                roots.push(shift + y);
                roots.push(shift - y);
            }
        }
        return roots;
    }

    // resolvent cubic z³ + 2p z² + (p² - 4r) z - q² = 0 has a positive real
    // root (the roots multiply to q² > 0); take the largest for stability
    let z0 = solve_cubic(2.0 * p, p * p - 4.0 * r, -q * q)
        .into_iter()
        .filter(|z| *z > 0.0)
        .fold(f64::NAN, f64::max);
    if !z0.is_finite() {
        return Vec::new();
    }

    let u = z0.sqrt();
    let s = (p + z0 - q / u) / 2.0;
    let t = (p + z0 + q / u) / 2.0;

    let mut roots = Vec::new();
    for y in solve_quadratic(u, s) {
        roots.push(shift + y);
    }
    for y in solve_quadratic(-u, t) {
        roots.push(shift + y);
    }
    roots
}
