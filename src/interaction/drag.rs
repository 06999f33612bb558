use egui::{Pos2, Vec2};
use std::collections::HashMap;

use crate::config::DRAG_THRESHOLD;
use crate::document::{move_slides, update_slide_in_presentation};
use crate::id_generator::{ObjectId, SlideId};
use crate::selection::EditorSelection;
use crate::slide::Slide;
use crate::state::Editor;

/// The one drag that may be in flight
#[derive(Debug, Clone, PartialEq)]
pub enum DragState {
    /// Moving objects within a slide
    Objects(ObjectDrag),
    /// Reordering slides in the deck
    Slides(SlidesDrag),
}

impl DragState {
    pub fn is_object_drag(&self) -> bool {
        matches!(self, DragState::Objects(_))
    }

    pub fn is_slides_drag(&self) -> bool {
        matches!(self, DragState::Slides(_))
    }

    pub fn threshold_passed(&self) -> bool {
        match self {
            DragState::Objects(drag) => drag.threshold_passed,
            DragState::Slides(drag) => drag.threshold_passed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDrag {
    pub slide_id: SlideId,
    /// Dragged objects; the first one is the object that was grabbed
    pub object_ids: Vec<ObjectId>,
    pub start_mouse: Pos2,
    pub current_mouse: Pos2,
    pub original_positions: HashMap<ObjectId, Pos2>,
    /// Mouse position relative to the grabbed object's origin
    pub drag_offset: Vec2,
    pub threshold_passed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlidesDrag {
    pub slide_ids: Vec<SlideId>,
    pub start_mouse_y: f32,
    pub current_mouse_y: f32,
    /// Drop position in the current slide order, supplied by the slide list
    pub target_index: Option<i32>,
    pub threshold_passed: bool,
}

/// Where every dragged object would sit if the drag ended now
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DragPreview {
    pub positions: HashMap<ObjectId, Pos2>,
}

impl DragPreview {
    pub fn position_of(&self, object_id: ObjectId) -> Option<Pos2> {
        self.positions.get(&object_id).copied()
    }
}

impl ObjectDrag {
    /// Shared offset applied to every dragged object. Zero until the pointer
    /// has travelled far enough to count as a drag.
    pub fn delta(&self) -> Vec2 {
        if !self.threshold_passed {
            return Vec2::ZERO;
        }
        let Some(primary_origin) = self
            .object_ids
            .first()
            .and_then(|id| self.original_positions.get(id))
        else {
            return Vec2::ZERO;
        };
        let primary_now = self.current_mouse - self.drag_offset;
        primary_now - *primary_origin
    }

    pub fn preview(&self) -> DragPreview {
        let delta = self.delta();
        DragPreview {
            positions: self
                .original_positions
                .iter()
                .map(|(id, origin)| (*id, *origin + delta))
                .collect(),
        }
    }
}

/// Preview for the active object drag, if any
pub fn compute_drag_preview(drag: &DragState) -> Option<DragPreview> {
    match drag {
        DragState::Objects(drag) => Some(drag.preview()),
        DragState::Slides(_) => None,
    }
}

impl Editor {
    /// Begin moving objects of the slide the current object selection is scoped to
    pub fn start_object_drag(&self, slide_id: SlideId, object_ids: &[ObjectId], mouse: Pos2) -> Editor {
        let scoped = matches!(
            &self.selection,
            Some(EditorSelection::Objects { slide_id: scope, .. }) if *scope == slide_id
        );
        if !scoped {
            log::debug!("start_object_drag: selection is not scoped to slide {slide_id}");
            return self.clone();
        }
        let Some(slide) = self.presentation.slide(slide_id) else {
            return self.clone();
        };

        let mut resolved = Vec::with_capacity(object_ids.len());
        let mut original_positions = HashMap::with_capacity(object_ids.len());
        for id in object_ids {
            if let Some(object) = slide.object(*id) {
                if original_positions.insert(*id, object.position()).is_none() {
                    resolved.push(*id);
                }
            }
        }
        let Some(primary) = resolved.first().and_then(|id| original_positions.get(id)) else {
            log::debug!("start_object_drag: no draggable objects");
            return self.clone();
        };
        let drag_offset = mouse - *primary;

        Editor {
            dragging: Some(DragState::Objects(ObjectDrag {
                slide_id,
                object_ids: resolved,
                start_mouse: mouse,
                current_mouse: mouse,
                original_positions,
                drag_offset,
                threshold_passed: false,
            })),
            resizing: None,
            editing_text_object_id: None,
            ..self.clone()
        }
    }

    /// Begin reordering slides; requires a slide selection
    pub fn start_slides_drag(&self, slide_ids: &[SlideId], mouse_y: f32) -> Editor {
        if !matches!(self.selection, Some(EditorSelection::Slides { .. })) {
            log::debug!("start_slides_drag: selection is not a slide selection");
            return self.clone();
        }
        let mut resolved: Vec<SlideId> = Vec::with_capacity(slide_ids.len());
        for id in slide_ids {
            if self.presentation.contains_slide(*id) && !resolved.contains(id) {
                resolved.push(*id);
            }
        }
        if resolved.is_empty() {
            return self.clone();
        }

        Editor {
            dragging: Some(DragState::Slides(SlidesDrag {
                slide_ids: resolved,
                start_mouse_y: mouse_y,
                current_mouse_y: mouse_y,
                target_index: None,
                threshold_passed: false,
            })),
            resizing: None,
            editing_text_object_id: None,
            ..self.clone()
        }
    }

    /// Feed a pointer move to whichever drag is active
    pub fn update_drag(&self, mouse: Pos2) -> Editor {
        match &self.dragging {
            Some(DragState::Objects(drag)) => {
                let travelled = (mouse - drag.start_mouse).length();
                let updated = ObjectDrag {
                    current_mouse: mouse,
                    threshold_passed: drag.threshold_passed || travelled >= DRAG_THRESHOLD,
                    ..drag.clone()
                };
                Editor {
                    dragging: Some(DragState::Objects(updated)),
                    ..self.clone()
                }
            }
            Some(DragState::Slides(_)) => self.update_slides_drag(mouse, None),
            None => self.clone(),
        }
    }

    /// Pointer move during a slide reorder. Only vertical travel counts toward
    /// the threshold. A `None` target keeps the previous one.
    pub fn update_slides_drag(&self, mouse: Pos2, target_index: Option<i32>) -> Editor {
        let Some(DragState::Slides(drag)) = &self.dragging else {
            return self.clone();
        };
        let travelled = (mouse.y - drag.start_mouse_y).abs();
        let updated = SlidesDrag {
            current_mouse_y: mouse.y,
            target_index: target_index.or(drag.target_index),
            threshold_passed: drag.threshold_passed || travelled >= DRAG_THRESHOLD,
            ..drag.clone()
        };
        Editor {
            dragging: Some(DragState::Slides(updated)),
            ..self.clone()
        }
    }

    /// Pointer released: commit a real drag, treat anything else as a click
    pub fn finish_drag(&self) -> Editor {
        match &self.dragging {
            None => self.clone(),
            Some(DragState::Objects(drag)) if drag.threshold_passed => self.commit_object_drag(drag),
            Some(DragState::Slides(drag)) if drag.threshold_passed => match drag.target_index {
                Some(target_index) => self.commit_slides_drag(drag, target_index),
                None => self.cancel_drag(),
            },
            Some(_) => self.cancel_drag(),
        }
    }

    pub fn cancel_drag(&self) -> Editor {
        if self.dragging.is_none() {
            return self.clone();
        }
        Editor {
            dragging: None,
            ..self.clone()
        }
    }

    fn commit_object_drag(&self, drag: &ObjectDrag) -> Editor {
        let Some(slide) = self.presentation.slide(drag.slide_id) else {
            log::warn!("finish_drag: slide {} vanished mid-drag", drag.slide_id);
            return self.cancel_drag();
        };
        let preview = drag.preview();
        let moved = Slide {
            objects: slide
                .objects
                .iter()
                .map(|object| match preview.position_of(object.id) {
                    Some(position) => object.moved_to(position.x, position.y),
                    None => object.clone(),
                })
                .collect(),
            ..Slide::clone(slide)
        };

        log::info!(
            "Moved {} object(s) on slide {} by {:?}",
            drag.object_ids.len(),
            drag.slide_id,
            drag.delta()
        );
        Editor {
            presentation: update_slide_in_presentation(&self.presentation, moved),
            dragging: None,
            ..self.clone()
        }
    }

    fn commit_slides_drag(&self, drag: &SlidesDrag, target_index: i32) -> Editor {
        log::info!(
            "Moving {} slide(s) to index {target_index}",
            drag.slide_ids.len()
        );
        Editor {
            presentation: move_slides(&self.presentation, &drag.slide_ids, target_index),
            dragging: None,
            ..self.clone()
        }
    }
}
