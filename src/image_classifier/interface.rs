use crate::image_classifier::error::ClassifyError;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

pub trait ImageClassifier: Send + Sync {
    /// Takes encoded PNG or JPEG bytes and returns the single most likely class.
    fn classify(&self, image: &[u8]) -> Result<Classification, ClassifyError>;
}
