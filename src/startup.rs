use crate::config::Config;
#[cfg(feature = "camera")]
use crate::device_camera::impl_nokhwa::{DeviceCameraNokhwa, NokhwaCameraConfig};
#[cfg(not(feature = "camera"))]
use crate::device_camera::impl_unavailable::DeviceCameraUnavailable;
use crate::device_camera::interface::DeviceCamera;
use crate::image_classifier::error::ModelLoadError;
use crate::image_classifier::impl_pipeline::InferencePipeline;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::model::impl_tract_onnx::ModelTractOnnx;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

/// Loads the model once. Nothing that serves requests is built when this fails.
pub fn load_image_classifier(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<Arc<dyn ImageClassifier + Send + Sync>, ModelLoadError> {
    let model = ModelTractOnnx::load(&config.model, logger.clone())?;

    let pipeline = InferencePipeline::new(
        Arc::new(model),
        &config.class_labels,
        config.model.input_shape,
        logger,
    );

    Ok(Arc::new(pipeline))
}

#[cfg(feature = "camera")]
pub fn device_camera(
    logger: Arc<dyn Logger + Send + Sync>,
) -> Arc<dyn DeviceCamera + Send + Sync> {
    Arc::new(DeviceCameraNokhwa::new(NokhwaCameraConfig::default(), logger))
}

#[cfg(not(feature = "camera"))]
pub fn device_camera(
    logger: Arc<dyn Logger + Send + Sync>,
) -> Arc<dyn DeviceCamera + Send + Sync> {
    let _ = logger.info("Built without the `camera` feature, capture is disabled");
    Arc::new(DeviceCameraUnavailable::new())
}
