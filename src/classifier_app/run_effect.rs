use crate::classifier_app::core::{AcquireError, Effect, Event, SubmittedImage};
use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    #[cfg_attr(not(feature = "file-dialog"), allow(dead_code))]
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    event_sender: Sender<Event>,
}

impl RunEffect {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        event_sender: Sender<Event>,
    ) -> Self {
        Self {
            config,
            logger,
            image_classifier,
            device_camera,
            event_sender,
        }
    }

    pub fn run_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::PickImage => {
                let picked = self.pick_image();
                let _ = self.event_sender.send(Event::AcquireDone(picked));
            }
            Effect::CaptureImage => {
                let captured = self
                    .device_camera
                    .capture_frame()
                    .map(|bytes| Some(SubmittedImage::from_camera(bytes)))
                    .map_err(|e| AcquireError::Camera(e.to_string()));
                let _ = self.event_sender.send(Event::AcquireDone(captured));
            }
            Effect::Classify { image } => {
                let classified = self.image_classifier.classify(&image.bytes);
                if let Err(e) = &classified {
                    let _ = self
                        .logger
                        .info(&format!("Classification of {:?} failed: {}", image, e));
                }
                let _ = self.event_sender.send(Event::ClassifyDone(classified));
            }
        }
    }

    #[cfg(feature = "file-dialog")]
    fn pick_image(&self) -> Result<Option<SubmittedImage>, AcquireError> {
        use crate::classifier_app::image_file::read_image_file;

        let picked = rfd::FileDialog::new()
            .set_title("Pilih foto pepaya")
            .add_filter("Gambar", self.config.accepted_extensions.as_slice())
            .pick_file();

        match picked {
            Some(path) => read_image_file(&self.config, &path).map(Some),
            None => Ok(None),
        }
    }

    #[cfg(not(feature = "file-dialog"))]
    fn pick_image(&self) -> Result<Option<SubmittedImage>, AcquireError> {
        Err(AcquireError::PickerUnavailable)
    }
}
