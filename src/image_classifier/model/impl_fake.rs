use crate::image_classifier::model::interface::Model;
use std::sync::Mutex;
use tract_onnx::prelude::Tensor;

#[derive(Debug, Clone, PartialEq)]
pub struct InputSummary {
    pub shape: Vec<usize>,
    pub min: f32,
    pub max: f32,
}

/// Returns the same scores for every input and remembers what it was fed.
pub struct ModelFake {
    scores: Vec<f32>,
    num_classes: Option<usize>,
    failure: Option<String>,
    inputs: Mutex<Vec<InputSummary>>,
}

impl ModelFake {
    pub fn new(scores: Vec<f32>) -> Self {
        Self {
            num_classes: Some(scores.len()),
            scores,
            failure: None,
            inputs: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            scores: vec![],
            num_classes: Some(3),
            failure: Some(message.to_string()),
            inputs: Mutex::new(Vec::new()),
        }
    }

    pub fn with_num_classes(mut self, num_classes: Option<usize>) -> Self {
        self.num_classes = num_classes;
        self
    }

    pub fn inputs(&self) -> Vec<InputSummary> {
        self.inputs.lock().unwrap().clone()
    }
}

impl Model for ModelFake {
    fn num_classes(&self) -> Option<usize> {
        self.num_classes
    }

    fn predict(&self, input: Tensor) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        let values = input.as_slice::<f32>()?;
        let summary = InputSummary {
            shape: input.shape().to_vec(),
            min: values.iter().copied().fold(f32::INFINITY, f32::min),
            max: values.iter().copied().fold(f32::NEG_INFINITY, f32::max),
        };
        self.inputs.lock().unwrap().push(summary);

        match &self.failure {
            Some(message) => Err(message.clone().into()),
            None => Ok(self.scores.clone()),
        }
    }
}
