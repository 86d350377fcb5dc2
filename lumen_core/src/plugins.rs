use crate::models::io::{ImageReader, ImageWriter};

/// Support for one image format, statically bound by the binary that needs it.
pub trait ImageFormatSupportPlugin {

    fn format_name(&self) -> String;

    fn reader(&self) -> Box<dyn ImageReader>;

    fn writer(&self) -> Box<dyn ImageWriter>;
}
