use crate::image_classifier::model::model_config::ModelConfig;
use std::path::{Path, PathBuf};

pub const MODEL_FILE_NAME: &str = "mobilenetv2_pepaya.onnx";

#[derive(Debug, Clone)]
pub struct Config {
    pub model: ModelConfig,
    pub class_labels: Vec<String>,
    pub accepted_extensions: Vec<String>,
    pub logger_timezone: chrono::FixedOffset,
    pub window_title: String,
    pub window_size: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig {
                model_path: default_model_path(),
                input_shape: (224, 224),
            },
            class_labels: vec![
                "matang".to_string(),
                "mentah".to_string(),
                "setengah".to_string(),
            ],
            accepted_extensions: vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()],
            logger_timezone: western_indonesia_time(),
            window_title: "Pepaya Classifier".to_string(),
            window_size: [420.0, 640.0],
        }
    }
}

impl Config {
    /// Extension check is case-insensitive; names without an extension are rejected.
    pub fn is_accepted_file_name(&self, name: &str) -> bool {
        Path::new(name)
            .extension()
            .and_then(|extension| extension.to_str())
            .map(|extension| {
                self.accepted_extensions
                    .iter()
                    .any(|accepted| accepted.eq_ignore_ascii_case(extension))
            })
            .unwrap_or(false)
    }
}

/// Next to the executable when it is there, otherwise relative to the working directory.
fn default_model_path() -> PathBuf {
    let beside_executable = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(MODEL_FILE_NAME)));

    match beside_executable {
        Some(path) if path.exists() => path,
        _ => PathBuf::from(MODEL_FILE_NAME),
    }
}

fn western_indonesia_time() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(7 * 3600).unwrap()
}
