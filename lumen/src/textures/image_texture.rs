use std::fs;

use lumen_core::models::color::Color;
use lumen_core::models::image::Image;
use lumen_core::models::io::{ImageIOError, ImageReader};

use bmp_support::reader::BMPReader;

use crate::geometry::vector3::Vector3;

use super::Texture;

/// Nearest-pixel image sampling over the primitive's UV coordinates.
pub struct ImageTexture {

    image: Image,
}

impl ImageTexture {

    pub fn new(image: Image) -> Self {
        ImageTexture { image }
    }

    pub fn from_bmp_file(path: &str) -> Result<Self, ImageIOError> {
        let data = fs::read(path).map_err(|err| ImageIOError::FailedToRead {
            description: format!("{}: {}", path, err),
        })?;
        let image = BMPReader::new().read(&data)?;
        Ok(Self::new(image))
    }
}

impl Texture for ImageTexture {

    fn color_at(&self, uv: (f64, f64), _point: &Vector3) -> Color {
        let u = uv.0.rem_euclid(1.0);
        let v = uv.1.rem_euclid(1.0);

        let x = ((u * self.image.width as f64) as usize).min(self.image.width - 1);
        // flip v so 0 is the bottom of the image
        let y = (((1.0 - v) * self.image.height as f64) as usize).min(self.image.height - 1);

        let pixel = self.image.get_pixel(x, y);
        Color::new(
            pixel.red as f64 / 255.0,
            pixel.green as f64 / 255.0,
            pixel.blue as f64 / 255.0,
        )
    }
}
