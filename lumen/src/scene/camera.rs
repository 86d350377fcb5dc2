use custom_error::custom_error;

use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;

custom_error! {pub CameraError
    InvalidResolution {width: usize, height: usize} = "Invalid resolution: {width}x{height}",
    InvalidFieldOfView {fov: f64} = "Field of view must be inside (0, 180) degrees: {fov}",
    DegenerateBasis = "Camera position, look-at point and up vector do not span a basis",
}

/// Pinhole camera: position, look-at basis and a film plane sized from the
/// vertical field of view. Emits the primary rays the scene consumes.
pub struct Camera {

    position: Vector3,
    forward: Vector3,
    right: Vector3,
    up: Vector3,

    fov: f64,
    width: usize,
    height: usize,

    film_width: f64,
    film_height: f64,
}

impl Camera {

    /// `fov` is the vertical field of view in degrees.
    pub fn new(position: Vector3, lookat: Vector3, up: Vector3, fov: f64, width: usize, height: usize) -> Self {
        let forward = (lookat - position).normalized();
        let right = forward.cross_product(&up).normalized();
        let up = right.cross_product(&forward).normalized();

        let aspect_ratio = width as f64 / height as f64;
        let film_height = 2.0 * (fov.to_radians() / 2.0).tan();
        let film_width = film_height * aspect_ratio;

        Self {
            position,
            forward,
            right,
            up,
            fov,
            width,
            height,
            film_width,
            film_height,
        }
    }

    /// Rejects configurations that would emit unusable rays. Callers check
    /// this before the first ray is cast, not mid-render.
    pub fn validate(&self) -> Result<(), CameraError> {
        if self.width == 0 || self.height == 0 {
            return Err(CameraError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(CameraError::InvalidFieldOfView { fov: self.fov });
        }

        let basis_ok = self.position.is_finite()
            && self.forward.is_finite()
            && self.right.is_finite()
            && self.up.is_finite()
            && self.forward.length_squared() > 0.0
            && self.right.length_squared() > 0.0
            && self.up.length_squared() > 0.0;
        if !basis_ok {
            return Err(CameraError::DegenerateBasis);
        }

        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Primary ray through film coordinates; `(px, py)` are fractional
    /// pixel positions, `(0, 0)` being the top-left pixel center offset.
    pub fn generate_ray(&self, px: f64, py: f64) -> Ray {
        let u = (2.0 * (px + 0.5) / self.width as f64 - 1.0) * self.film_width / 2.0;
        let v = (1.0 - 2.0 * (py + 0.5) / self.height as f64) * self.film_height / 2.0;

        let direction = self.forward + self.right * u + self.up * v;
        Ray::new(self.position, direction)
    }
}
