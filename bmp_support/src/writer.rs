use byteorder::{ByteOrder, LittleEndian};
use custom_error::custom_error;

use lumen_core::models::image::Image;
use lumen_core::models::io::{ImageIOError, ImageWriter, ImageWriterOptions};

use crate::common::{row_size, BITS_PER_PIXEL, COMPRESSION_NONE, FILE_HEADER_SIZE, INFO_HEADER_SIZE, MAGIC};

custom_error! {pub BMPWriterError
    EmptyImage = "Image has zero width or height",
    TooLarge {description: String} = "Image is too large for bmp: {description}",
}

pub struct BMPWriter {
}

impl BMPWriter {

    pub fn new() -> Self {
        BMPWriter {}
    }
}

impl ImageWriter for BMPWriter {

    fn write(&self, image: &Image, _options: &ImageWriterOptions) -> Result<Vec<u8>, ImageIOError> {
        write_bmp(image).map_err(|err| ImageIOError::FailedToWrite {
            description: format!("failed to write as bmp: {}", err),
        })
    }
}

fn write_bmp(image: &Image) -> Result<Vec<u8>, BMPWriterError> {
    if image.width == 0 || image.height == 0 {
        return Err(BMPWriterError::EmptyImage);
    }
    if image.width > i32::MAX as usize || image.height > i32::MAX as usize {
        return Err(BMPWriterError::TooLarge {
            description: format!("{}x{}", image.width, image.height),
        });
    }

    let row_size = row_size(image.width);
    let pixel_array_size = row_size * image.height;
    let file_size = FILE_HEADER_SIZE + INFO_HEADER_SIZE + pixel_array_size as u32;

    let mut data = Vec::with_capacity(file_size as usize);

    // file header
    data.extend_from_slice(&MAGIC);
    push_u32(&mut data, file_size);
    push_u16(&mut data, 0); // reserved
    push_u16(&mut data, 0); // reserved
    push_u32(&mut data, FILE_HEADER_SIZE + INFO_HEADER_SIZE);

    // BITMAPINFOHEADER
    push_u32(&mut data, INFO_HEADER_SIZE);
    push_i32(&mut data, image.width as i32);
    push_i32(&mut data, image.height as i32);
    push_u16(&mut data, 1); // color planes
    push_u16(&mut data, BITS_PER_PIXEL);
    push_u32(&mut data, COMPRESSION_NONE);
    push_u32(&mut data, pixel_array_size as u32);
    push_i32(&mut data, 2835); // 72 dpi
    push_i32(&mut data, 2835);
    push_u32(&mut data, 0); // palette size
    push_u32(&mut data, 0); // important colors

    // pixel array, bottom-up, BGR, rows padded to four bytes
    let padding = row_size - image.width * 3;
    for y in (0..image.height).rev() {
        for x in 0..image.width {
            let pixel = image.get_pixel(x, y);
            data.push(pixel.blue);
            data.push(pixel.green);
            data.push(pixel.red);
        }
        for _ in 0..padding {
            data.push(0);
        }
    }

    Ok(data)
}

fn push_u16(data: &mut Vec<u8>, value: u16) {
    let mut buffer = [0u8; 2];
    LittleEndian::write_u16(&mut buffer, value);
    data.extend_from_slice(&buffer);
}

fn push_u32(data: &mut Vec<u8>, value: u32) {
    let mut buffer = [0u8; 4];
    LittleEndian::write_u32(&mut buffer, value);
    data.extend_from_slice(&buffer);
}

fn push_i32(data: &mut Vec<u8>, value: i32) {
    let mut buffer = [0u8; 4];
    LittleEndian::write_i32(&mut buffer, value);
    data.extend_from_slice(&buffer);
}
