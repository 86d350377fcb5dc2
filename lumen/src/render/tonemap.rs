use lumen_core::models::color::Color;
use lumen_core::models::image::Image;
use lumen_core::models::pixel::Pixel;
use lumen_core::models::radiance::RadianceMap;

// keeps the log average defined on pure black films
const LUMINANCE_DELTA: f64 = 1e-4;

/// Post-render collaborator compressing unbounded radiance into display
/// range: exposure (auto key or manual), ACES filmic curve, then gamma.
pub struct ToneMapper {

    key_value: f64,
    exposure: Option<f64>,
    gamma: f64,
}

impl ToneMapper {

    /// Auto-exposure targeting 0.18 mid-gray, gamma 2.2.
    pub fn new() -> Self {
        Self {
            key_value: 0.18,
            exposure: None,
            gamma: 2.2,
        }
    }

    pub fn with_exposure(self, exposure: f64) -> Self {
        Self {
            exposure: Some(exposure),
            ..self
        }
    }

    pub fn apply(&self, film: &RadianceMap) -> Image {
        let exposure = self.exposure.unwrap_or_else(|| {
            let average = log_average_luminance(film);
            if average > 0.0 {
                self.key_value / average
            } else {
                1.0
            }
        });

        let mut image = Image::new(film.width, film.height);
        for y in 0..film.height {
            for x in 0..film.width {
                let texel = film.get(x, y) * exposure;
                image.set_pixel(x, y, self.compress(texel));
            }
        }

        image
    }

    fn compress(&self, texel: Color) -> Pixel {
        let inverse_gamma = 1.0 / self.gamma;
        let channel = |value: f64| -> u8 {
            let curved = aces_filmic(value).powf(inverse_gamma);
            (curved * 255.0).round().max(0.0).min(255.0) as u8
        };

        Pixel::from_rgb(channel(texel.r), channel(texel.g), channel(texel.b))
    }
}

/// ACES filmic curve, clamped to [0, 1]. Non-finite radiance is mapped to
/// the nearest end of the range instead of poisoning the pixel.
pub fn aces_filmic(x: f64) -> f64 {
    if !x.is_finite() {
        return if x > 0.0 { 1.0 } else { 0.0 };
    }

    let (a, b, c, d, e) = (2.51, 0.03, 2.43, 0.59, 0.14);
    let mapped = (x * (a * x + b)) / (x * (c * x + d) + e);
    mapped.max(0.0).min(1.0)
}

fn log_average_luminance(film: &RadianceMap) -> f64 {
    if film.texels.is_empty() {
        return 0.0;
    }

    let sum: f64 = film
        .texels
        .iter()
        .map(|texel| (LUMINANCE_DELTA + texel.luminance().max(0.0)).ln())
        .sum();
    (sum / film.texels.len() as f64).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aces_endpoints() {
        assert_eq!(aces_filmic(0.0), 0.0);
        assert!(aces_filmic(100.0) > 0.99);
        assert!(aces_filmic(-1.0) >= 0.0);
    }

    #[test]
    fn test_aces_is_monotonic() {
        let mut previous = 0.0;
        for i in 1..200 {
            let value = aces_filmic(i as f64 * 0.05);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_aces_handles_non_finite_radiance() {
        assert_eq!(aces_filmic(f64::INFINITY), 1.0);
        assert_eq!(aces_filmic(f64::NAN), 0.0);
    }

    #[test]
    fn test_black_film_stays_black() {
        let film = RadianceMap::new(2, 2);
        let image = ToneMapper::new().apply(&film);
        assert_eq!(image.get_pixel(1, 1), Pixel::black());
    }

    #[test]
    fn test_manual_exposure_scales_before_the_curve() {
        let mut film = RadianceMap::new(1, 1);
        film.set(0, 0, Color::new(0.5, 0.5, 0.5));

        let dim = ToneMapper::new().with_exposure(0.1).apply(&film);
        let bright = ToneMapper::new().with_exposure(2.0).apply(&film);

        assert!(dim.get_pixel(0, 0).red < bright.get_pixel(0, 0).red);
    }

    #[test]
    fn test_auto_key_brings_gray_to_mid_range() {
        let mut film = RadianceMap::new(2, 2);
        for y in 0..2 {
            for x in 0..2 {
                film.set(x, y, Color::new(4.0, 4.0, 4.0));
            }
        }

        let image = ToneMapper::new().apply(&film);
        let pixel = image.get_pixel(0, 0);
        // auto exposure pulls an arbitrary flat radiance toward mid-gray
        assert!(pixel.red > 60 && pixel.red < 160, "got {}", pixel.red);
    }

    #[test]
    fn test_nan_radiance_becomes_black_pixel() {
        let mut film = RadianceMap::new(1, 1);
        film.set(0, 0, Color::new(f64::NAN, f64::NAN, f64::NAN));

        let image = ToneMapper::new().with_exposure(1.0).apply(&film);
        assert_eq!(image.get_pixel(0, 0), Pixel::black());
    }
}
