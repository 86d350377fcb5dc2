use std::collections::HashMap;

use custom_error::custom_error;

use super::image::Image;

custom_error! {pub ImageIOError
    FailedToRead {description: String} = "Failed to read image: {description}",
    FailedToWrite {description: String} = "Failed to write image: {description}",
    InvalidOptions {description: String} = "Invalid options are set for this io operation: {description}",
}

pub trait ImageReader {

    fn read(&self, data: &[u8]) -> Result<Image, ImageIOError>;
}

pub trait ImageWriter {

    fn write(&self, image: &Image, options: &ImageWriterOptions) -> Result<Vec<u8>, ImageIOError>;
}

pub struct ImageWriterOptions {

    options: HashMap<String, String>,
}

impl ImageWriterOptions {

    pub fn default() -> Self {
        Self {
            options: HashMap::new(),
        }
    }

    pub fn with_option(&self, key: &str, value: &str) -> Self {
        let mut options = self.options.clone();
        options.insert(key.to_string(), value.to_string());

        Self {
            options,
        }
    }

    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool, ImageIOError> {
        let value = match self.options.get(key) {
            Some(v) => v,
            None => return Ok(default),
        };

        match value.to_lowercase().trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(ImageIOError::InvalidOptions {
                description: format!("failed to parse option value as a bool: {}", other),
            }),
        }
    }

    pub fn get_u32(&self, key: &str, default: u32) -> Result<u32, ImageIOError> {
        let value = match self.options.get(key) {
            Some(v) => v,
            None => return Ok(default),
        };

        value.parse().map_err(|err| ImageIOError::InvalidOptions {
            description: format!("failed to parse option as u32: {}", err),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_defaults() {
        let options = ImageWriterOptions::default();
        assert_eq!(options.get_bool("missing", true).unwrap(), true);
        assert_eq!(options.get_u32("missing", 42).unwrap(), 42);
    }

    #[test]
    fn test_options_parse() {
        let options = ImageWriterOptions::default()
            .with_option("flip", "true")
            .with_option("quality", "90");
        assert_eq!(options.get_bool("flip", false).unwrap(), true);
        assert_eq!(options.get_u32("quality", 0).unwrap(), 90);
    }

    #[test]
    fn test_options_invalid() {
        let options = ImageWriterOptions::default().with_option("flip", "maybe");
        assert!(options.get_bool("flip", false).is_err());
    }
}
