use thiserror::Error;

use crate::config::MAX_TEXT_LENGTH;

/// Rejections raised while validating text object content
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextContentError {
    #[error("Text content cannot be empty")]
    Empty,

    #[error("Text content exceeds maximum length of {} characters", MAX_TEXT_LENGTH)]
    TooLong { length: usize },
}

/// Failures while turning a file into an image payload
#[derive(Debug, Error)]
pub enum ImageIntakeError {
    #[error("Failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported or corrupt image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Not a base64 data URL: {0}")]
    NotDataUrl(String),

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}
