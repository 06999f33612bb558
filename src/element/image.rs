use egui::Vec2;
use serde::{Deserialize, Serialize};

/// Image-specific data of a slide object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageContent {
    /// Data URL or path the renderer resolves to pixels
    pub src: String,
}

/// What an image picker hands over when the user chooses a picture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    pub src: String,
    pub natural_width: u32,
    pub natural_height: u32,
}

/// Scale `natural` down (never up) so it fits in `max_width` x `max_height`
/// with its aspect ratio intact. Degenerate sizes get the whole box.
pub(crate) fn fit_within(
    natural_width: u32,
    natural_height: u32,
    max_width: f32,
    max_height: f32,
) -> Vec2 {
    if natural_width == 0 || natural_height == 0 {
        return Vec2::new(max_width, max_height);
    }

    let width = natural_width as f32;
    let height = natural_height as f32;
    let scale = (max_width / width).min(max_height / height).min(1.0);
    Vec2::new(width * scale, height * scale)
}
