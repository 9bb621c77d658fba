use crate::image_classifier::error::ClassifyError;
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::image_classifier::labels::{argmax, ClassLabelSet};
use crate::image_classifier::model::interface::Model;
use crate::image_classifier::preprocess::bytes_to_tensor;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

/// Decode, resize, normalize, run the model once, then map the top score to a label.
pub struct InferencePipeline {
    model: Arc<dyn Model + Send + Sync>,
    labels: ClassLabelSet,
    input_shape: (u32, u32),
    logger: Arc<dyn Logger + Send + Sync>,
}

impl InferencePipeline {
    pub fn new(
        model: Arc<dyn Model + Send + Sync>,
        labels: &[String],
        input_shape: (u32, u32),
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        let labels = ClassLabelSet::new(labels.to_vec()).truncated_to(model.num_classes());

        Self {
            model,
            labels,
            input_shape,
            logger: logger.with_namespace("pipeline"),
        }
    }

    #[cfg(test)]
    pub fn labels(&self) -> &ClassLabelSet {
        &self.labels
    }
}

impl ImageClassifier for InferencePipeline {
    fn classify(&self, image: &[u8]) -> Result<Classification, ClassifyError> {
        let (height, width) = self.input_shape;
        let input = bytes_to_tensor(image, width, height)?;

        let scores = self
            .model
            .predict(input)
            .map_err(|e| ClassifyError::Inference(e.to_string()))?;

        let index = argmax(&scores).ok_or_else(|| {
            ClassifyError::Inference(format!("model returned no usable scores: {:?}", scores))
        })?;

        let label = match self.labels.label(index) {
            Ok(label) => label,
            Err(e) => {
                let _ = self
                    .logger
                    .error(&format!("Label set does not match the model: {}", e));
                return Err(e);
            }
        };

        let classification = Classification {
            label: label.to_string(),
            confidence: scores[index],
        };

        let _ = self
            .logger
            .info(&format!("Classified image: {:?}", classification));

        Ok(classification)
    }
}
