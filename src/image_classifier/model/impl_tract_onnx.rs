use crate::image_classifier::error::ModelLoadError;
use crate::image_classifier::model::interface::Model;
use crate::image_classifier::model::model_config::ModelConfig;
use crate::library::logger::interface::Logger;
use std::fmt::Display;
use std::path::Path;
use std::sync::Arc;
use tract_onnx::prelude::*;

pub struct ModelTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    num_classes: Option<usize>,
}

impl ModelTractOnnx {
    pub fn load(
        config: &ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ModelLoadError> {
        let logger = logger.with_namespace("model").with_namespace("tract_onnx");
        let path = config.model_path.as_path();

        if !path.is_file() {
            return Err(ModelLoadError::NotFound(path.to_path_buf()));
        }

        let _ = logger.info(&format!("Loading model from {}", path.display()));

        let (height, width) = config.input_shape;
        let input_fact = InferenceFact::dt_shape(
            f32::datum_type(),
            tvec!(1, height as usize, width as usize, 3),
        );

        let model = tract_onnx::onnx()
            .model_for_path(path)
            .map_err(|e| invalid(path, e))?
            .with_input_fact(0, input_fact)
            .map_err(|e| invalid(path, e))?
            .into_optimized()
            .map_err(|e| invalid(path, e))?;

        let num_classes = model
            .output_fact(0)
            .ok()
            .and_then(|fact| fact.shape.as_concrete().and_then(|shape| shape.last().copied()));

        let model = model.into_runnable().map_err(|e| invalid(path, e))?;

        let _ = logger.info(&format!(
            "Model loaded, output classes: {}",
            num_classes.map_or("unknown".to_string(), |n| n.to_string())
        ));

        Ok(Self { model, num_classes })
    }
}

fn invalid(path: &Path, reason: impl Display) -> ModelLoadError {
    ModelLoadError::Invalid {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

impl Model for ModelTractOnnx {
    fn num_classes(&self) -> Option<usize> {
        self.num_classes
    }

    fn predict(&self, input: Tensor) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        let outputs = self.model.run(tvec!(input.into_tvalue()))?;
        let output = outputs.first().ok_or("model produced no outputs")?;
        let scores = output.to_array_view::<f32>()?;

        Ok(scores.iter().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_fake::LoggerFake;
    use std::io::Write;
    use std::path::PathBuf;

    // ReduceMean over height and width, a 3x3 dense layer weighting each channel by 10, then Softmax.
    fn tiny_model_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("src/image_classifier/model/testdata/papaya_tiny.onnx")
    }

    fn solid_input(rgb: [f32; 3]) -> Tensor {
        tract_ndarray::Array4::from_shape_fn((1, 224, 224, 3), |(_, _, _, c)| rgb[c]).into_tensor()
    }

    fn config_for(path: PathBuf) -> ModelConfig {
        ModelConfig {
            model_path: path,
            input_shape: (224, 224),
        }
    }

    #[test]
    fn test_missing_model_file() {
        let logger = Arc::new(LoggerFake::new());
        let config = config_for(PathBuf::from("./does/not/exist/mobilenetv2_pepaya.onnx"));

        let result = ModelTractOnnx::load(&config, logger);

        assert!(matches!(result, Err(ModelLoadError::NotFound(_))));
    }

    #[test]
    fn test_directory_is_not_a_model() {
        let logger = Arc::new(LoggerFake::new());
        let dir = tempfile::tempdir().unwrap();

        let result = ModelTractOnnx::load(&config_for(dir.path().to_path_buf()), logger);

        assert!(matches!(result, Err(ModelLoadError::NotFound(_))));
    }

    #[test]
    fn test_corrupt_model_file() {
        let logger = Arc::new(LoggerFake::new());
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not an onnx protobuf").unwrap();

        let result = ModelTractOnnx::load(&config_for(file.path().to_path_buf()), logger);

        match result {
            Err(ModelLoadError::Invalid { path, .. }) => assert_eq!(path, file.path()),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("corrupt model loaded"),
        }
    }

    #[test]
    fn test_num_classes_from_output_shape() {
        let logger = Arc::new(LoggerFake::new());

        let model = ModelTractOnnx::load(&config_for(tiny_model_path()), logger).unwrap();

        assert_eq!(model.num_classes(), Some(3));
    }

    #[test]
    fn test_predict_returns_one_probability_per_class() {
        let logger = Arc::new(LoggerFake::new());
        let model = ModelTractOnnx::load(&config_for(tiny_model_path()), logger).unwrap();

        let scores = model.predict(solid_input([0.5, 0.5, 0.5])).unwrap();

        assert_eq!(scores.len(), 3);
        assert!(scores.iter().all(|s| s.is_finite() && (0.0..=1.0).contains(s)));
        assert!((scores.iter().sum::<f32>() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_predict_follows_dominant_channel() {
        let logger = Arc::new(LoggerFake::new());
        let model = ModelTractOnnx::load(&config_for(tiny_model_path()), logger).unwrap();

        let red = model.predict(solid_input([1.0, 0.0, 0.0])).unwrap();
        let blue = model.predict(solid_input([0.0, 0.1, 0.9])).unwrap();

        assert!(red[0] > red[1] && red[0] > red[2]);
        assert!(blue[2] > blue[0] && blue[2] > blue[1]);
    }

    #[test]
    fn test_successful_load_is_logged() {
        let logger = Arc::new(LoggerFake::new());

        ModelTractOnnx::load(&config_for(tiny_model_path()), logger.clone()).unwrap();

        assert!(logger
            .lines()
            .iter()
            .any(|line| line.message == "Model loaded, output classes: 3"));
    }
}
