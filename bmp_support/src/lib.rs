extern crate custom_error;

use lumen_core::models::io::{ImageReader, ImageWriter};
use lumen_core::plugins::ImageFormatSupportPlugin;

use reader::BMPReader;
use writer::BMPWriter;

mod common;
pub mod reader;
pub mod writer;

pub struct BMPFormatSupportPlugin {
}

impl BMPFormatSupportPlugin {

    pub fn new() -> Self {
        BMPFormatSupportPlugin {}
    }
}

impl ImageFormatSupportPlugin for BMPFormatSupportPlugin {

    fn format_name(&self) -> String {
        "BMP".to_string()
    }

    fn reader(&self) -> Box<dyn ImageReader> {
        Box::new(BMPReader::new())
    }

    fn writer(&self) -> Box<dyn ImageWriter> {
        Box::new(BMPWriter::new())
    }
}
