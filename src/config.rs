use serde::{Deserialize, Serialize};

/// Pointer travel (in pixels) before a press becomes a drag
pub const DRAG_THRESHOLD: f32 = 3.0;

pub const DEFAULT_MIN_WIDTH: f32 = 20.0;
pub const DEFAULT_MIN_HEIGHT: f32 = 20.0;

/// Logical slide size; every object coordinate lives in this space
pub const SLIDE_WIDTH: f32 = 960.0;
pub const SLIDE_HEIGHT: f32 = 540.0;

pub const MAX_TEXT_LENGTH: usize = 500;

pub const DEFAULT_PRESENTATION_TITLE: &str = "Untitled Presentation";
pub const DEFAULT_SLIDE_TITLE: &str = "New Slide";
pub const DEFAULT_SLIDE_BACKGROUND: &str = "#FFFFFF";

pub const DEFAULT_TEXT_CONTENT: &str = "New text";
pub const DEFAULT_TEXT_X: f32 = 20.0;
pub const DEFAULT_TEXT_Y: f32 = 20.0;
pub const DEFAULT_TEXT_WIDTH: f32 = 300.0;
pub const DEFAULT_TEXT_HEIGHT: f32 = 80.0;
pub const DEFAULT_FONT_SIZE: f32 = 24.0;

pub const DEFAULT_IMAGE_WIDTH: f32 = 240.0;
pub const DEFAULT_IMAGE_HEIGHT: f32 = 160.0;
pub const DEFAULT_IMAGE_PADDING: f32 = 30.0;

/// Tunables for the editor and its host UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Smallest width a resize may produce
    pub min_object_width: f32,
    /// Smallest height a resize may produce
    pub min_object_height: f32,
    pub slide_width: f32,
    pub slide_height: f32,
    /// Screen-space grab radius around each resize handle
    pub handle_radius: f32,
    /// Height of a row in the slide list
    pub slide_row_height: f32,
    /// Directory for saved presentations
    pub state_dir: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_object_width: DEFAULT_MIN_WIDTH,
            min_object_height: DEFAULT_MIN_HEIGHT,
            slide_width: SLIDE_WIDTH,
            slide_height: SLIDE_HEIGHT,
            handle_radius: 6.0,
            slide_row_height: 96.0,
            state_dir: "slide_editor_state".to_owned(),
        }
    }
}

impl EditorConfig {
    pub fn slide_size(&self) -> egui::Vec2 {
        egui::vec2(self.slide_width, self.slide_height)
    }
}
