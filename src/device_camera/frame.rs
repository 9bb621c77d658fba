use image::{DynamicImage, ImageFormat, RgbImage};
use std::io::Cursor;

pub fn encode_png(frame: RgbImage) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(frame).write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Wraps a tightly packed RGB buffer. `None` when the buffer length does not match the size.
pub fn rgb_from_raw(width: u32, height: u32, raw: Vec<u8>) -> Option<RgbImage> {
    RgbImage::from_raw(width, height, raw)
}
