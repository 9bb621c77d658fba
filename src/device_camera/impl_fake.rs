use crate::device_camera::frame::encode_png;
use crate::device_camera::interface::{CameraCapability, DeviceCamera};
use crate::library::logger::interface::Logger;
use image::RgbImage;
use std::sync::Arc;

pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
        }
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn capability(&self) -> CameraCapability {
        CameraCapability { available: true }
    }

    fn capture_frame(&self) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Capturing frame...")?;
        let frame = RgbImage::from_pixel(100, 100, image::Rgb([230, 140, 40]));
        let bytes = encode_png(frame)?;
        self.logger.info("Frame captured")?;
        Ok(bytes)
    }
}
