use egui::Pos2;

use crate::document::update_slide_in_presentation;
use crate::geometry::Bounds;
use crate::id_generator::ObjectId;
use crate::selection::EditorSelection;
use crate::state::Editor;
use crate::widgets::resize_handle::ResizeHandle;

/// An object being resized through one of its handles
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeState {
    pub object_id: ObjectId,
    pub handle: ResizeHandle,
    pub start_mouse: Pos2,
    /// Bounds at the moment the handle was grabbed
    pub original: Bounds,
}

/// Bounds the object would get if the resize ended at `mouse`.
///
/// Edges touched by the handle follow the pointer; the others stay put.
/// When the result falls under the minimum size it is clamped, and for
/// left/top handles the moving edge is pulled back so the opposite edge
/// stays where it was.
pub fn compute_resize_preview(
    resizing: &ResizeState,
    mouse: Pos2,
    min_width: f32,
    min_height: f32,
) -> Bounds {
    let delta = mouse - resizing.start_mouse;
    let handle = resizing.handle;
    let mut bounds = resizing.original;

    if handle.moves_left_edge() {
        bounds.x += delta.x;
        bounds.width -= delta.x;
    } else if handle.moves_right_edge() {
        bounds.width += delta.x;
    }

    if handle.moves_top_edge() {
        bounds.y += delta.y;
        bounds.height -= delta.y;
    } else if handle.moves_bottom_edge() {
        bounds.height += delta.y;
    }

    if bounds.width < min_width {
        if handle.moves_left_edge() {
            bounds.x -= min_width - bounds.width;
        }
        bounds.width = min_width;
    }
    if bounds.height < min_height {
        if handle.moves_top_edge() {
            bounds.y -= min_height - bounds.height;
        }
        bounds.height = min_height;
    }

    bounds
}

impl Editor {
    /// Grab a handle of an object that is part of the current selection
    pub fn start_resize(&self, object_id: ObjectId, handle: ResizeHandle, mouse: Pos2) -> Editor {
        let Some(EditorSelection::Objects {
            slide_id,
            object_ids,
        }) = &self.selection
        else {
            log::debug!("start_resize: no object selection");
            return self.clone();
        };
        if !object_ids.contains(&object_id) {
            log::debug!("start_resize: object {object_id} is not selected");
            return self.clone();
        }
        let Some(object) = self
            .presentation
            .slide(*slide_id)
            .and_then(|slide| slide.object(object_id))
        else {
            return self.clone();
        };

        Editor {
            resizing: Some(ResizeState {
                object_id,
                handle,
                start_mouse: mouse,
                original: object.bounds(),
            }),
            dragging: None,
            editing_text_object_id: None,
            ..self.clone()
        }
    }

    /// Write `final_bounds` into the object being resized and leave resize mode
    pub fn apply_resize(&self, final_bounds: Bounds) -> Editor {
        let Some(resizing) = &self.resizing else {
            return self.clone();
        };
        let finished = Editor {
            resizing: None,
            ..self.clone()
        };
        let Some(EditorSelection::Objects { slide_id, .. }) = &self.selection else {
            return finished;
        };
        let updated_slide = self
            .presentation
            .slide(*slide_id)
            .and_then(|slide| slide.with_object_updated(resizing.object_id, |object| object.with_bounds(final_bounds)));
        let Some(updated_slide) = updated_slide else {
            return finished;
        };

        log::info!("Resized object {} to {:?}", resizing.object_id, final_bounds);
        Editor {
            presentation: update_slide_in_presentation(&self.presentation, updated_slide),
            ..finished
        }
    }

    /// Commit the preview for a release at `mouse`
    pub fn finish_resize(&self, mouse: Pos2, min_width: f32, min_height: f32) -> Editor {
        match &self.resizing {
            Some(resizing) => {
                let bounds = compute_resize_preview(resizing, mouse, min_width, min_height);
                self.apply_resize(bounds)
            }
            None => self.clone(),
        }
    }

    pub fn cancel_resize(&self) -> Editor {
        if self.resizing.is_none() {
            return self.clone();
        }
        Editor {
            resizing: None,
            ..self.clone()
        }
    }
}
