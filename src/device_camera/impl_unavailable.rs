use crate::device_camera::interface::{CameraCapability, DeviceCamera};

#[derive(Debug, Default)]
pub struct DeviceCameraUnavailable {}

impl DeviceCameraUnavailable {
    pub fn new() -> Self {
        Self {}
    }
}

impl DeviceCamera for DeviceCameraUnavailable {
    fn capability(&self) -> CameraCapability {
        CameraCapability { available: false }
    }

    fn capture_frame(&self) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        Err("Kamera tidak tersedia".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_no_capture() {
        let camera = DeviceCameraUnavailable::new();

        assert!(!camera.capability().available);
        assert!(camera.capture_frame().is_err());
    }
}
