use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::geometry::Bounds;
use crate::id_generator::ObjectId;

mod common;
pub(crate) mod image;
pub(crate) mod text;

pub use image::{ImageContent, ImagePayload};
pub use text::{TextContent, validate_text_content};

/// An item placed on a slide.
///
/// Geometry and stacking order are shared by every kind; the kind carries
/// what differs between text boxes and images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideObject {
    pub id: ObjectId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub z_index: i32,
    #[serde(flatten)]
    pub kind: ObjectKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ObjectKind {
    Text(TextContent),
    Image(ImageContent),
}

impl SlideObject {
    pub fn position(&self) -> Pos2 {
        Pos2::new(self.x, self.y)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }

    pub fn object_type(&self) -> &'static str {
        match self.kind {
            ObjectKind::Text(_) => "text",
            ObjectKind::Image(_) => "image",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, ObjectKind::Text(_))
    }

    pub fn as_text(&self) -> Option<&TextContent> {
        match &self.kind {
            ObjectKind::Text(text) => Some(text),
            ObjectKind::Image(_) => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageContent> {
        match &self.kind {
            ObjectKind::Image(image) => Some(image),
            ObjectKind::Text(_) => None,
        }
    }

    pub fn contains(&self, point: Pos2) -> bool {
        self.bounds().contains(point)
    }
}

/// Factory functions for creating slide objects
pub mod factory {
    use super::*;
    use crate::config::{
        DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_PADDING, DEFAULT_IMAGE_WIDTH, DEFAULT_TEXT_CONTENT,
        DEFAULT_TEXT_HEIGHT, DEFAULT_TEXT_WIDTH, DEFAULT_TEXT_X, DEFAULT_TEXT_Y, SLIDE_WIDTH,
    };

    /// Optional overrides for a new text box; unset fields use the defaults
    #[derive(Debug, Clone, Default)]
    pub struct TextParams {
        pub content: Option<String>,
        pub bounds: Option<Bounds>,
        pub z_index: i32,
        pub font_size: Option<f32>,
        pub font_family: Option<String>,
        pub color: Option<String>,
    }

    pub fn create_text_object(params: TextParams) -> SlideObject {
        let bounds = params.bounds.unwrap_or(Bounds::new(
            DEFAULT_TEXT_X,
            DEFAULT_TEXT_Y,
            DEFAULT_TEXT_WIDTH,
            DEFAULT_TEXT_HEIGHT,
        ));

        SlideObject {
            id: ObjectId::new(),
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            z_index: params.z_index,
            kind: ObjectKind::Text(TextContent {
                content: params
                    .content
                    .unwrap_or_else(|| DEFAULT_TEXT_CONTENT.to_owned()),
                font_family: params.font_family,
                font_size: params.font_size,
                color: params.color,
            }),
        }
    }

    /// New image placed in the top-right corner of the slide, sized to fit
    /// the default image box without distorting the picture
    pub fn create_image_object(payload: &ImagePayload, z_index: i32) -> SlideObject {
        let size = super::image::fit_within(
            payload.natural_width,
            payload.natural_height,
            DEFAULT_IMAGE_WIDTH,
            DEFAULT_IMAGE_HEIGHT,
        );

        SlideObject {
            id: ObjectId::new(),
            x: SLIDE_WIDTH - DEFAULT_IMAGE_WIDTH - DEFAULT_IMAGE_PADDING,
            y: DEFAULT_TEXT_Y,
            width: size.x,
            height: size.y,
            z_index,
            kind: ObjectKind::Image(ImageContent {
                src: payload.src.clone(),
            }),
        }
    }
}
