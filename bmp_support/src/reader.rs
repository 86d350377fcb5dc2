use std::convert::TryInto;

use byteorder::{ByteOrder, LittleEndian};
use custom_error::custom_error;

use lumen_core::models::image::Image;
use lumen_core::models::io::{ImageIOError, ImageReader};
use lumen_core::models::pixel::Pixel;

use crate::common::{row_size, BITS_PER_PIXEL, COMPRESSION_NONE, MAGIC};

custom_error! {pub BMPReaderError
    InvalidHeader {description: String} = "Invalid header: {description}",
    InvalidDIBHeader {description: String} = "Invalid DIB header: {description}",
    UnexpectedEndOfData {description: String} = "Unexpected end of data: {description}",
    NotImplemented {description: String} = "Not implemented: {description}"
}

pub struct BMPReader {
}

struct Header {
    offset: u32,
}

struct DIBHeader {
    width: usize,
    height: usize,
}

impl BMPReader {

    pub fn new() -> Self {
        BMPReader {}
    }
}

impl ImageReader for BMPReader {

    fn read(&self, data: &[u8]) -> Result<Image, ImageIOError> {
        if data.len() < 14 {
            return Err(ImageIOError::FailedToRead {
                description: format!("expected at least 14 bytes for header, got {}", data.len()),
            });
        }

        let header = read_header(data[0..14].try_into().expect("slice is exactly 14 bytes"))
            .map_err(|err| ImageIOError::FailedToRead {
                description: format!("failed to read bmp header: {}", err),
            })?;
        let dib_header = read_dib_header(&data[14..]).map_err(|err| ImageIOError::FailedToRead {
            description: format!("failed to read dib header: {}", err),
        })?;

        read_pixel_array(&data[header.offset as usize..], &dib_header)
            .map_err(|err| ImageIOError::FailedToRead {
                description: format!("failed to read as bmp: {}", err),
            })
    }
}

fn read_header(header: &[u8; 14]) -> Result<Header, BMPReaderError> {
    // 0 - 2 bytes - header - "BM"
    if header[0] != MAGIC[0] || header[1] != MAGIC[1] {
        return Err(BMPReaderError::InvalidHeader {
            description: "file does not start with 0x42 0x4D".to_string(),
        });
    }

    // 2 - 4 bytes - size of BMP file in bytes
    // 6 - 2 bytes - reserved
    // 8 - 2 bytes - reserved
    // 10 - 4 bytes - offset of the byte where the pixel array starts
    let offset = LittleEndian::read_u32(&header[10..14]);

    Ok(Header {
        offset,
    })
}

fn read_dib_header(header: &[u8]) -> Result<DIBHeader, BMPReaderError> {
    if header.len() < 20 {
        return Err(BMPReaderError::InvalidDIBHeader {
            description: format!("dib header is truncated: {} bytes", header.len()),
        });
    }

    // 0 - 4 bytes - size of this header: 40 for BITMAPINFOHEADER, 108 for BITMAPV4HEADER
    let size_of_header = LittleEndian::read_u32(&header[0..4]);
    if size_of_header != 40 && size_of_header != 108 {
        return Err(BMPReaderError::InvalidDIBHeader {
            description: format!("Unexpected length of DIB header: {}", size_of_header),
        });
    }

    let width = LittleEndian::read_i32(&header[4..8]);
    let height = LittleEndian::read_i32(&header[8..12]);
    if width <= 0 || height <= 0 {
        return Err(BMPReaderError::NotImplemented {
            description: format!("non bottom-up image: {}x{}", width, height),
        });
    }

    let _planes = LittleEndian::read_u16(&header[12..14]);
    let bit_count = LittleEndian::read_u16(&header[14..16]);
    if bit_count != BITS_PER_PIXEL {
        return Err(BMPReaderError::NotImplemented {
            description: format!("this image uses {} bits", bit_count),
        });
    }

    let compression = LittleEndian::read_u32(&header[16..20]);
    if compression != COMPRESSION_NONE {
        return Err(BMPReaderError::NotImplemented {
            description: format!("compression type: {}", compression),
        });
    }

    Ok(DIBHeader {
        width: width as usize,
        height: height as usize,
    })
}

fn read_pixel_array(data: &[u8], dib_header: &DIBHeader) -> Result<Image, BMPReaderError> {
    let width = dib_header.width;
    let height = dib_header.height;
    let row_size = row_size(width);

    if data.len() < row_size * height {
        return Err(BMPReaderError::UnexpectedEndOfData {
            description: format!(
                "pixel array needs {} bytes, got {}",
                row_size * height,
                data.len()
            ),
        });
    }

    let mut image = Image::new(width, height);

    // rows are stored bottom-up, pixels as BGR
    for y in 0..height {
        let row = &data[(height - 1 - y) * row_size..];
        for x in 0..width {
            let offset = x * 3;
            image.set_pixel(x, y, Pixel::from_rgb(
                row[offset + 2],
                row[offset + 1],
                row[offset],
            ));
        }
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    use lumen_core::models::io::{ImageWriter, ImageWriterOptions};

    use crate::writer::BMPWriter;

    #[test]
    fn test_rejects_bad_magic() {
        let reader = BMPReader::new();
        assert!(reader.read(&[0u8; 64]).is_err());
    }

    #[test]
    fn test_rejects_truncated() {
        let reader = BMPReader::new();
        assert!(reader.read(&MAGIC).is_err());
    }

    #[test]
    fn test_read_written_image() {
        let mut image = Image::new(3, 2);
        image.set_pixel(0, 0, Pixel::from_rgb(255, 0, 0));
        image.set_pixel(2, 0, Pixel::from_rgb(0, 255, 0));
        image.set_pixel(1, 1, Pixel::from_rgb(0, 0, 255));

        let bytes = BMPWriter::new()
            .write(&image, &ImageWriterOptions::default())
            .expect("failed to write test image");

        let decoded = BMPReader::new().read(&bytes).expect("failed to read test image");

        assert_eq!(decoded.width, 3);
        assert_eq!(decoded.height, 2);
        assert_eq!(decoded.get_pixel(0, 0), Pixel::from_rgb(255, 0, 0));
        assert_eq!(decoded.get_pixel(2, 0), Pixel::from_rgb(0, 255, 0));
        assert_eq!(decoded.get_pixel(1, 1), Pixel::from_rgb(0, 0, 255));
        assert_eq!(decoded.get_pixel(1, 0), Pixel::black());
    }
}
