use tract_onnx::prelude::Tensor;

/// A loaded classifier. Immutable after load, so it can be shared across threads freely.
pub trait Model: Send + Sync {
    /// Length of the prediction vector, when the artifact declares it.
    fn num_classes(&self) -> Option<usize>;

    /// Runs the model on a `[1, height, width, 3]` tensor and returns one score per class.
    fn predict(&self, input: Tensor) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>>;
}
