use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub model_path: PathBuf,
    /// (height, width) of the image the model expects
    pub input_shape: (u32, u32),
}
