use lumen_core::models::color::Color;

use crate::geometry::vector3::Vector3;

use super::Texture;

/// Smooth-colored Mandelbrot set sampled at the hit point's XY position.
pub struct Mandelbrot {

    zoom: f64,
    center_x: f64,
    center_y: f64,
    max_iterations: u32,
    inside_color: Color,
}

impl Mandelbrot {

    pub fn default() -> Self {
        Mandelbrot {
            zoom: 7.0,
            center_x: -0.75,
            center_y: 0.0,
            max_iterations: 300,
            inside_color: Color::black(),
        }
    }

    /// Smooth (fractional) escape iteration count, `None` when the point
    /// stays bounded.
    fn smooth_escape(&self, cr: f64, ci: f64) -> Option<f64> {
        let mut zr = 0.0;
        let mut zi = 0.0;

        for n in 0..self.max_iterations {
            let next_zr = zr * zr - zi * zi + cr;
            let next_zi = 2.0 * zr * zi + ci;
            zr = next_zr;
            zi = next_zi;

            let magnitude = (zr * zr + zi * zi).sqrt();
            if magnitude > 2.0 {
                return Some(n as f64 + 1.0 - magnitude.ln().ln() / 2f64.ln());
            }
        }

        None
    }

    fn map_color(&self, t: f64) -> Color {
        Color::new(
            (t * 4.0).min(1.0),
            (t * t * 1.5).min(1.0),
            (0.5 + t).min(1.0),
        )
    }
}

impl Texture for Mandelbrot {

    fn color_at(&self, _uv: (f64, f64), point: &Vector3) -> Color {
        let cr = (point.x * 2.0 - self.center_x) / self.zoom;
        let ci = (point.y * 2.0 - self.center_y) / self.zoom;

        match self.smooth_escape(cr, ci) {
            None => self.inside_color,
            Some(escape) => self.map_color(escape / self.max_iterations as f64),
        }
    }
}
