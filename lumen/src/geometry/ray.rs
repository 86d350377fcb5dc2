use super::vector3::Vector3;

/// Offset of the near bound for spawned rays: a ray restarting exactly at its
/// previous hit point must not report that surface again (shadow acne).
pub const RAY_BIAS: f64 = 1e-4;

/// Immutable ray with a valid parametric interval. Every spawned secondary
/// ray is a fresh value; nothing is shared or mutated during tracing.
pub struct Ray {
    origin: Vector3,
    direction: Vector3,
    t_min: f64,
    t_max: f64,
}

impl Ray {

    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self::with_interval(origin, direction, RAY_BIAS, f64::INFINITY)
    }

    pub fn with_interval(origin: Vector3, direction: Vector3, t_min: f64, t_max: f64) -> Self {
        Ray {
            origin,
            direction: direction.normalized(),
            t_min,
            t_max,
        }
    }

    pub fn origin(&self) -> &Vector3 {
        &self.origin
    }

    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    pub fn t_min(&self) -> f64 {
        self.t_min
    }

    pub fn t_max(&self) -> f64 {
        self.t_max
    }

    pub fn contains(&self, t: f64) -> bool {
        t >= self.t_min && t <= self.t_max
    }

    pub fn point(&self, distance: f64) -> Vector3 {
        self.origin + self.direction * distance
    }
}
