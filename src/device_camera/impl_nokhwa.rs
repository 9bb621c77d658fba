use crate::device_camera::frame::{encode_png, rgb_from_raw};
use crate::device_camera::interface::{CameraCapability, DeviceCamera};
use crate::library::logger::interface::Logger;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{ApiBackend, CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;
use std::sync::Arc;

pub struct NokhwaCameraConfig {
    pub device_index: u32,
    pub warmup_frames: u32,
}

impl Default for NokhwaCameraConfig {
    fn default() -> Self {
        Self {
            device_index: 0,
            // First frames come out dark while auto exposure settles
            warmup_frames: 5,
        }
    }
}

/// Opens the webcam only for the duration of one capture.
pub struct DeviceCameraNokhwa {
    config: NokhwaCameraConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraNokhwa {
    pub fn new(config: NokhwaCameraConfig, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            config,
            logger: logger.with_namespace("camera").with_namespace("nokhwa"),
        }
    }
}

impl DeviceCamera for DeviceCameraNokhwa {
    fn capability(&self) -> CameraCapability {
        let available = match nokhwa::query(ApiBackend::Auto) {
            Ok(devices) => {
                let _ = self
                    .logger
                    .info(&format!("Found {} camera device(s)", devices.len()));
                devices.len() > self.config.device_index as usize
            }
            Err(e) => {
                let _ = self.logger.error(&format!("Camera query failed: {}", e));
                false
            }
        };

        CameraCapability { available }
    }

    fn capture_frame(&self) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Opening camera")?;
        let requested =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution);
        let mut camera = Camera::new(CameraIndex::Index(self.config.device_index), requested)?;
        camera.open_stream()?;

        for _ in 0..self.config.warmup_frames {
            camera.frame()?;
        }

        let frame = camera.frame()?;
        camera.stop_stream()?;

        let decoded = frame.decode_image::<RgbFormat>()?;
        let (width, height) = (decoded.width(), decoded.height());
        let rgb = rgb_from_raw(width, height, decoded.into_raw())
            .ok_or("camera frame does not match its resolution")?;

        self.logger
            .info(&format!("Frame captured ({}x{})", width, height))?;
        Ok(encode_png(rgb)?)
    }
}
