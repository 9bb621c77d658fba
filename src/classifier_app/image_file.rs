use crate::classifier_app::core::{AcquireError, RejectReason, SubmittedImage};
use crate::config::Config;
use std::path::Path;

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Extension is checked before the file is read.
pub fn read_image_file(config: &Config, path: &Path) -> Result<SubmittedImage, AcquireError> {
    let name = file_name(path);

    if !config.is_accepted_file_name(&name) {
        return Err(AcquireError::Rejected {
            name,
            reason: RejectReason::UnsupportedFormat,
        });
    }

    match std::fs::read(path) {
        Ok(bytes) => Ok(SubmittedImage::from_file(&name, bytes)),
        Err(e) => Err(AcquireError::Rejected {
            name,
            reason: RejectReason::Unreadable(e.to_string()),
        }),
    }
}
