use egui::Pos2;

use super::CommandResult;
use crate::config::EditorConfig;
use crate::element::ImagePayload;
use crate::geometry::Bounds;
use crate::id_generator::{ObjectId, SlideId};
use crate::slide::SlideBackground;
use crate::state::Editor;
use crate::widgets::resize_handle::ResizeHandle;

/// Every way the editor can be asked to change
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // Selection
    SelectSlide(SlideId),
    ToggleSlideSelection(SlideId),
    SelectObject {
        slide_id: SlideId,
        object_id: ObjectId,
    },
    ToggleObjectSelection {
        slide_id: SlideId,
        object_id: ObjectId,
    },
    ClearSelection,
    ClearObjectSelection,

    // Dragging
    StartObjectDrag {
        slide_id: SlideId,
        object_ids: Vec<ObjectId>,
        mouse: Pos2,
    },
    StartSlidesDrag {
        slide_ids: Vec<SlideId>,
        mouse_y: f32,
    },
    UpdateDrag {
        mouse: Pos2,
    },
    UpdateSlidesDrag {
        mouse: Pos2,
        target_index: Option<i32>,
    },
    FinishDrag,
    CancelDrag,

    // Resizing
    StartResize {
        object_id: ObjectId,
        handle: ResizeHandle,
        mouse: Pos2,
    },
    /// Commit the preview for a release at `mouse`
    FinishResize {
        mouse: Pos2,
    },
    ApplyResize {
        bounds: Bounds,
    },
    CancelResize,

    // Text editing
    StartEditingText(ObjectId),
    StopEditingText,
    UpdateText {
        object_id: ObjectId,
        content: String,
    },

    // Document
    AddSlide,
    DeleteSlide,
    MoveSelectedSlides(i32),
    AddTextObject,
    AddImageObject(ImagePayload),
    DeleteObject,
    UpdateObjectPosition {
        object_id: ObjectId,
        x: f32,
        y: f32,
    },
    UpdateObjectSize {
        object_id: ObjectId,
        width: f32,
        height: f32,
    },
    BringForward,
    SendBackward,
    ChangePresentationTitle(String),
    ChangeSlideBackground(SlideBackground),
    ClearUiState,
    Reset,
}

impl Command {
    /// Compute the editor that results from this command
    pub fn apply(&self, editor: &Editor, config: &EditorConfig) -> CommandResult<Editor> {
        let next = match self {
            Command::SelectSlide(slide_id) => editor.select_slide(*slide_id),
            Command::ToggleSlideSelection(slide_id) => editor.toggle_slide_selection(*slide_id),
            Command::SelectObject {
                slide_id,
                object_id,
            } => editor.select_object(*slide_id, *object_id),
            Command::ToggleObjectSelection {
                slide_id,
                object_id,
            } => editor.toggle_object_selection(*slide_id, *object_id),
            Command::ClearSelection => editor.clear_selection(),
            Command::ClearObjectSelection => editor.clear_object_selection(),

            Command::StartObjectDrag {
                slide_id,
                object_ids,
                mouse,
            } => editor.start_object_drag(*slide_id, object_ids, *mouse),
            Command::StartSlidesDrag { slide_ids, mouse_y } => {
                editor.start_slides_drag(slide_ids, *mouse_y)
            }
            Command::UpdateDrag { mouse } => editor.update_drag(*mouse),
            Command::UpdateSlidesDrag {
                mouse,
                target_index,
            } => editor.update_slides_drag(*mouse, *target_index),
            Command::FinishDrag => editor.finish_drag(),
            Command::CancelDrag => editor.cancel_drag(),

            Command::StartResize {
                object_id,
                handle,
                mouse,
            } => editor.start_resize(*object_id, *handle, *mouse),
            Command::FinishResize { mouse } => editor.finish_resize(
                *mouse,
                config.min_object_width,
                config.min_object_height,
            ),
            Command::ApplyResize { bounds } => editor.apply_resize(*bounds),
            Command::CancelResize => editor.cancel_resize(),

            Command::StartEditingText(object_id) => editor.start_editing_text(*object_id),
            Command::StopEditingText => editor.stop_editing_text(),
            Command::UpdateText { object_id, content } => {
                editor.update_text_object(*object_id, content)?
            }

            Command::AddSlide => editor.add_slide(),
            Command::DeleteSlide => editor.delete_slide(),
            Command::MoveSelectedSlides(target_index) => editor.move_selected_slides(*target_index),
            Command::AddTextObject => editor.add_text_object(),
            Command::AddImageObject(payload) => editor.add_image_object(payload),
            Command::DeleteObject => editor.delete_object(),
            Command::UpdateObjectPosition { object_id, x, y } => {
                editor.update_object_position(*object_id, *x, *y)
            }
            Command::UpdateObjectSize {
                object_id,
                width,
                height,
            } => editor.update_object_size(*object_id, *width, *height),
            Command::BringForward => editor.bring_forward(),
            Command::SendBackward => editor.send_backward(),
            Command::ChangePresentationTitle(title) => editor.change_presentation_title(title),
            Command::ChangeSlideBackground(background) => {
                editor.change_slide_background(background.clone())
            }
            Command::ClearUiState => editor.clear_ui_state(),
            Command::Reset => editor.reset(),
        };
        Ok(next)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::SelectSlide(_) => "select_slide",
            Command::ToggleSlideSelection(_) => "toggle_slide_selection",
            Command::SelectObject { .. } => "select_object",
            Command::ToggleObjectSelection { .. } => "toggle_object_selection",
            Command::ClearSelection => "clear_selection",
            Command::ClearObjectSelection => "clear_object_selection",
            Command::StartObjectDrag { .. } => "start_object_drag",
            Command::StartSlidesDrag { .. } => "start_slides_drag",
            Command::UpdateDrag { .. } => "update_drag",
            Command::UpdateSlidesDrag { .. } => "update_slides_drag",
            Command::FinishDrag => "finish_drag",
            Command::CancelDrag => "cancel_drag",
            Command::StartResize { .. } => "start_resize",
            Command::FinishResize { .. } => "finish_resize",
            Command::ApplyResize { .. } => "apply_resize",
            Command::CancelResize => "cancel_resize",
            Command::StartEditingText(_) => "start_editing_text",
            Command::StopEditingText => "stop_editing_text",
            Command::UpdateText { .. } => "update_text",
            Command::AddSlide => "add_slide",
            Command::DeleteSlide => "delete_slide",
            Command::MoveSelectedSlides(_) => "move_selected_slides",
            Command::AddTextObject => "add_text_object",
            Command::AddImageObject(_) => "add_image_object",
            Command::DeleteObject => "delete_object",
            Command::UpdateObjectPosition { .. } => "update_object_position",
            Command::UpdateObjectSize { .. } => "update_object_size",
            Command::BringForward => "bring_forward",
            Command::SendBackward => "send_backward",
            Command::ChangePresentationTitle(_) => "change_presentation_title",
            Command::ChangeSlideBackground(_) => "change_slide_background",
            Command::ClearUiState => "clear_ui_state",
            Command::Reset => "reset",
        }
    }

    /// Pointer-move traffic, too chatty to log at debug level
    pub fn is_pointer_update(&self) -> bool {
        matches!(
            self,
            Command::UpdateDrag { .. } | Command::UpdateSlidesDrag { .. }
        )
    }
}
