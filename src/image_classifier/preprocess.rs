use crate::image_classifier::error::ClassifyError;
use image::{imageops, RgbImage};
use tract_onnx::prelude::*;

/// Any alpha channel is dropped and grayscale is expanded, so the result always has 3 channels.
pub fn decode_rgb(bytes: &[u8]) -> Result<RgbImage, ClassifyError> {
    let image = image::load_from_memory(bytes)?;
    Ok(image.to_rgb8())
}

/// Bilinear resize to exactly `width` x `height`. Aspect ratio is not preserved.
pub fn resize_image(image: &RgbImage, width: u32, height: u32) -> RgbImage {
    if image.width() == width && image.height() == height {
        return image.clone();
    }
    imageops::resize(image, width, height, imageops::FilterType::Triangle)
}

/// Lays the pixels out as `[1, height, width, 3]` with every value scaled into `[0, 1]`.
pub fn image_to_tensor(image: &RgbImage) -> Tensor {
    let (width, height) = image.dimensions();

    tract_ndarray::Array4::from_shape_fn(
        (1, height as usize, width as usize, 3),
        |(_, y, x, c)| {
            let pixel = image.get_pixel(x as u32, y as u32);
            pixel[c] as f32 / 255.0
        },
    )
    .into_tensor()
}

pub fn bytes_to_tensor(bytes: &[u8], width: u32, height: u32) -> Result<Tensor, ClassifyError> {
    let rgb = decode_rgb(bytes)?;
    let resized = resize_image(&rgb, width, height);
    Ok(image_to_tensor(&resized))
}
