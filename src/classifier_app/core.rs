use crate::config::Config;
use crate::image_classifier::error::ClassifyError;
use crate::image_classifier::interface::Classification;
use std::fmt;
use std::sync::Arc;

pub const PROMPT: &str = "Pilih atau ambil foto untuk memulai prediksi.";

#[derive(Debug, Clone, PartialEq)]
pub enum ImageOrigin {
    Camera,
    File { name: String },
}

#[derive(Clone, PartialEq)]
pub struct SubmittedImage {
    pub bytes: Arc<[u8]>,
    pub origin: ImageOrigin,
}

impl SubmittedImage {
    pub fn from_file(name: &str, bytes: Vec<u8>) -> Self {
        Self {
            bytes: bytes.into(),
            origin: ImageOrigin::File {
                name: name.to_string(),
            },
        }
    }

    pub fn from_camera(bytes: Vec<u8>) -> Self {
        Self {
            bytes: bytes.into(),
            origin: ImageOrigin::Camera,
        }
    }

    pub fn describe(&self) -> String {
        match &self.origin {
            ImageOrigin::Camera => "Foto kamera".to_string(),
            ImageOrigin::File { name } => name.clone(),
        }
    }
}

// The bytes can be megabytes long, keep logs readable.
impl fmt::Debug for SubmittedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmittedImage")
            .field("origin", &self.origin)
            .field("bytes", &format_args!("{} bytes", self.bytes.len()))
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RejectReason {
    UnsupportedFormat,
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AcquireError {
    Rejected { name: String, reason: RejectReason },
    Camera(String),
    #[cfg_attr(feature = "file-dialog", allow(dead_code))]
    PickerUnavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Classified(Classification),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum State {
    Waiting {
        notice: Option<String>,
    },
    Acquiring {
        previous: Box<State>,
    },
    Ready {
        image: SubmittedImage,
        outcome: Option<Outcome>,
    },
    Classifying {
        image: SubmittedImage,
    },
}

impl Default for State {
    fn default() -> Self {
        State::Waiting { notice: None }
    }
}

impl State {
    pub fn image(&self) -> Option<&SubmittedImage> {
        match self {
            State::Waiting { .. } => None,
            State::Acquiring { previous } => previous.image(),
            State::Ready { image, .. } | State::Classifying { image } => Some(image),
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, State::Acquiring { .. } | State::Classifying { .. })
    }
}

#[derive(Debug)]
pub enum Event {
    PickImageRequested,
    CaptureRequested,
    /// `Ok(None)` when the user closed the dialog without choosing anything.
    AcquireDone(Result<Option<SubmittedImage>, AcquireError>),
    ImageSubmitted(SubmittedImage),
    ImageRejected(AcquireError),
    ClassifyRequested,
    ClassifyDone(Result<Classification, ClassifyError>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    PickImage,
    CaptureImage,
    Classify { image: SubmittedImage },
}

pub fn init() -> (State, Vec<Effect>) {
    (State::default(), vec![])
}

pub fn transition(config: &Config, state: State, event: Event) -> (State, Vec<Effect>) {
    match (state, event) {
        (State::Acquiring { .. }, Event::AcquireDone(Ok(Some(image)))) => (
            State::Ready {
                image,
                outcome: None,
            },
            vec![],
        ),
        (State::Acquiring { previous }, Event::AcquireDone(Ok(None))) => (*previous, vec![]),
        (State::Acquiring { previous }, Event::AcquireDone(Err(error))) => (
            with_notice(
                previous.image().cloned(),
                acquire_error_message(config, &error),
            ),
            vec![],
        ),

        (State::Classifying { image }, Event::ClassifyDone(result)) => {
            let outcome = match result {
                Ok(classification) => Outcome::Classified(classification),
                Err(error) => Outcome::Failed(error.user_message()),
            };
            (
                State::Ready {
                    image,
                    outcome: Some(outcome),
                },
                vec![],
            )
        }

        // One request at a time
        (state, _) if state.is_busy() => (state, vec![]),

        (state, Event::PickImageRequested) => (
            State::Acquiring {
                previous: Box::new(state),
            },
            vec![Effect::PickImage],
        ),
        (state, Event::CaptureRequested) => (
            State::Acquiring {
                previous: Box::new(state),
            },
            vec![Effect::CaptureImage],
        ),
        (_, Event::ImageSubmitted(image)) => (
            State::Ready {
                image,
                outcome: None,
            },
            vec![],
        ),
        (state, Event::ImageRejected(error)) => {
            let message = acquire_error_message(config, &error);
            (with_notice(state.image().cloned(), message), vec![])
        }
        (State::Ready { image, .. }, Event::ClassifyRequested) => (
            State::Classifying {
                image: image.clone(),
            },
            vec![Effect::Classify { image }],
        ),

        (state, _) => (state, vec![]),
    }
}

fn with_notice(image: Option<SubmittedImage>, notice: String) -> State {
    match image {
        Some(image) => State::Ready {
            image,
            outcome: Some(Outcome::Failed(notice)),
        },
        None => State::Waiting {
            notice: Some(notice),
        },
    }
}

pub fn acquire_error_message(config: &Config, error: &AcquireError) -> String {
    match error {
        AcquireError::Rejected {
            name,
            reason: RejectReason::UnsupportedFormat,
        } => format!(
            "❌ Format file tidak didukung: {} (gunakan {})",
            name,
            config.accepted_extensions.join(", ")
        ),
        AcquireError::Rejected {
            name,
            reason: RejectReason::Unreadable(reason),
        } => format!("❌ Gagal membaca {}: {}", name, reason),
        AcquireError::Camera(reason) => format!("❌ Gagal mengambil foto: {}", reason),
        AcquireError::PickerUnavailable => "❌ Pemilih file tidak tersedia".to_string(),
    }
}

pub fn describe_classification(classification: &Classification) -> String {
    format!(
        "✅ Hasil: {} ({:.2}%)",
        classification.label.to_uppercase(),
        classification.confidence * 100.0
    )
}
