use crate::image_classifier::error::ClassifyError;
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::library::logger::interface::Logger;
use std::sync::Arc;

pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    classification: Classification,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, classification: Classification) -> Self {
        Self {
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
            classification,
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(&self, image: &[u8]) -> Result<Classification, ClassifyError> {
        let _ = self
            .logger
            .info(&format!("Classifying {} bytes with fake classifier", image.len()));

        if image.is_empty() {
            return Err(ClassifyError::Inference("empty image".to_string()));
        }

        Ok(self.classification.clone())
    }
}
