use custom_error::custom_error;

use lumen_core::models::color::Color;
use lumen_core::models::radiance::RadianceMap;

use crate::scene::camera::Camera;
use crate::scene::scene::Scene;

custom_error! {pub RenderError
    MissingCamera = "Scene has no camera",
    InvalidCamera {description: String} = "Invalid camera configuration: {description}",
    SceneNotBuilt = "Scene partition is dirty: call build() after the last add_object",
    EmptyTarget = "Render target has zero size",
}

pub trait Render {

    fn render(&self, scene: &Scene, render_to: &mut RadianceMap) -> Result<(), RenderError>;
}

/// Every unrecoverable condition is reported here, before the first ray.
pub fn checked_camera<'a>(scene: &'a Scene, render_to: &RadianceMap) -> Result<&'a Camera, RenderError> {
    if render_to.width == 0 || render_to.height == 0 {
        return Err(RenderError::EmptyTarget);
    }
    if !scene.is_built() {
        return Err(RenderError::SceneNotBuilt);
    }

    let camera = scene.camera().ok_or(RenderError::MissingCamera)?;
    camera.validate().map_err(|err| RenderError::InvalidCamera {
        description: err.to_string(),
    })?;

    if camera.width() != render_to.width || camera.height() != render_to.height {
        return Err(RenderError::InvalidCamera {
            description: format!(
                "camera film is {}x{} but target is {}x{}",
                camera.width(),
                camera.height(),
                render_to.width,
                render_to.height
            ),
        });
    }

    Ok(camera)
}

/// One pixel: average of an n×n grid of eye rays (n = 1 means the center).
pub fn render_pixel(scene: &Scene, camera: &Camera, x: usize, y: usize, samples_per_axis: u32) -> Color {
    let n = samples_per_axis.max(1);

    let mut color = Color::black();
    for i in 0..n {
        for j in 0..n {
            let dx = (i as f64 + 0.5) / n as f64 - 0.5;
            let dy = (j as f64 + 0.5) / n as f64 - 0.5;
            let ray = camera.generate_ray(x as f64 + dx, y as f64 + dy);
            color += scene.spawn_ray(&ray, 0);
        }
    }

    color * (1.0 / (n * n) as f64)
}
