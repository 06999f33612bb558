use serde::{Deserialize, Serialize};

use super::{ObjectKind, SlideObject};
use crate::config::MAX_TEXT_LENGTH;
use crate::error::TextContentError;

/// Text-specific data of a slide object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Hex color such as `#1A1A1A`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Trim and bound-check user supplied text.
pub fn validate_text_content(content: &str) -> Result<String, TextContentError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(TextContentError::Empty);
    }
    let length = trimmed.chars().count();
    if length > MAX_TEXT_LENGTH {
        return Err(TextContentError::TooLong { length });
    }
    Ok(trimmed.to_owned())
}

fn with_text(object: &SlideObject, edit: impl FnOnce(&mut TextContent)) -> SlideObject {
    let mut updated = object.clone();
    if let ObjectKind::Text(text) = &mut updated.kind {
        edit(text);
    }
    updated
}

impl SlideObject {
    /// Replace the text of a text object after validation.
    /// Image objects are returned unchanged.
    pub fn with_text_content(&self, content: &str) -> Result<SlideObject, TextContentError> {
        let content = validate_text_content(content)?;
        Ok(with_text(self, |text| text.content = content))
    }

    pub fn with_font_size(&self, font_size: f32) -> SlideObject {
        with_text(self, |text| text.font_size = Some(font_size.max(1.0)))
    }

    pub fn with_font_family(&self, font_family: &str) -> SlideObject {
        with_text(self, |text| text.font_family = Some(font_family.to_owned()))
    }

    pub fn with_text_color(&self, color: &str) -> SlideObject {
        with_text(self, |text| text.color = Some(color.to_owned()))
    }
}
