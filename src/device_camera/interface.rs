/// Whether live capture is possible at all. The shell hides the capture button when it is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraCapability {
    pub available: bool,
}

pub trait DeviceCamera: Send + Sync {
    fn capability(&self) -> CameraCapability;
    /// Returns one encoded frame (PNG or JPEG).
    fn capture_frame(&self) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>>;
}
