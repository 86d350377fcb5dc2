use std::time::Duration;

use minifb::{Key, Window, WindowOptions};

use lumen_core::models::image::Image;

/// Preview window for a finished render; stays open until Escape or close.
pub struct WindowOutput {

    window: Window,
}

impl WindowOutput {

    pub fn new(width: usize, height: usize) -> Result<Self, minifb::Error> {
        let mut window = Window::new("lumen", width, height, WindowOptions::default())?;
        window.limit_update_rate(Some(Duration::from_micros(16600))); // 60fps max

        Ok(WindowOutput {
            window,
        })
    }

    pub fn show(&mut self, image: &Image) {
        let buffer: Vec<u32> = image
            .pixels
            .iter()
            .map(|pixel| {
                (pixel.red as u32) << 16 | (pixel.green as u32) << 8 | pixel.blue as u32
            })
            .collect();

        while self.window.is_open() && !self.window.is_key_down(Key::Escape) {
            if let Err(err) = self.window.update_with_buffer(&buffer, image.width, image.height) {
                error!("failed to update preview window: {}", err);
                break;
            }
        }
    }
}
