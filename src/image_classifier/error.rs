use std::path::PathBuf;
use thiserror::Error;

/// Per-request failures. None of them are fatal to the process.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("model predicted class index {index} but only {available} labels are configured")]
    LabelMapping { index: usize, available: usize },
    #[error("inference failed: {0}")]
    Inference(String),
}

impl ClassifyError {
    pub fn user_message(&self) -> String {
        match self {
            ClassifyError::Decode(_) => {
                format!("❌ Gambar tidak dapat dibaca: {}", self)
            }
            ClassifyError::LabelMapping { .. } => {
                format!("❌ Konfigurasi label tidak sesuai dengan model: {}", self)
            }
            ClassifyError::Inference(_) => format!("❌ Error prediksi: {}", self),
        }
    }
}

#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("model file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to load model from {}: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },
}
