//! The editor aggregate: the presentation plus every piece of interaction state.
//!
//! All transitions are pure `&Editor -> Editor` functions. A transition whose
//! preconditions fail returns a clone that still shares the same
//! presentation `Arc`, so callers can detect "nothing happened" with
//! [`Editor::is_unchanged_from`].
//!
//! # Interaction modes
//!
//! At most one transient gesture is active at a time:
//! ```text
//!                 ┌──────────────────┐
//!           ┌─────►  DraggingObjects ├─────┐
//!           │     └──────────────────┘     │
//!           │     ┌──────────────────┐     │
//!           ├─────►  DraggingSlides  ├─────┤
//! ┌──────┐  │     └──────────────────┘     │  ┌──────┐
//! │ Idle ├──┤     ┌──────────────────┐     ├──► Idle │
//! └──────┘  ├─────►     Resizing     ├─────┤  └──────┘
//!           │     └──────────────────┘     │
//!           │     ┌──────────────────┐     │
//!           └─────►   EditingText    ├─────┘
//!                 └──────────────────┘
//! ```
//! Starting any gesture clears the others, and every selection change
//! clears all of them.
use std::sync::Arc;

use crate::document::{Presentation, create_presentation};
use crate::id_generator::ObjectId;
use crate::interaction::{DragState, ResizeState};
use crate::selection::EditorSelection;

/// Which gesture, if any, the editor is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    Idle,
    DraggingObjects,
    DraggingSlides,
    Resizing,
    EditingText,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Editor {
    pub presentation: Arc<Presentation>,
    pub selection: Option<EditorSelection>,
    pub dragging: Option<DragState>,
    pub resizing: Option<ResizeState>,
    pub editing_text_object_id: Option<ObjectId>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// A new untitled presentation with its only slide selected
    pub fn new() -> Self {
        Self::with_presentation(create_presentation())
    }

    /// Wrap a presentation, selecting its first slide when there is one
    pub fn with_presentation(presentation: Presentation) -> Self {
        let selection = presentation
            .slides
            .first()
            .map(|slide| EditorSelection::slides([slide.id]));
        Self {
            presentation: Arc::new(presentation),
            selection,
            dragging: None,
            resizing: None,
            editing_text_object_id: None,
        }
    }

    /// True when `other` shares this editor's presentation and has identical
    /// interaction state. Presentations are compared by pointer.
    pub fn is_unchanged_from(&self, other: &Editor) -> bool {
        Arc::ptr_eq(&self.presentation, &other.presentation)
            && self.selection == other.selection
            && self.dragging == other.dragging
            && self.resizing == other.resizing
            && self.editing_text_object_id == other.editing_text_object_id
    }

    pub fn interaction_mode(&self) -> InteractionMode {
        match (&self.dragging, &self.resizing, &self.editing_text_object_id) {
            (Some(DragState::Objects(_)), _, _) => InteractionMode::DraggingObjects,
            (Some(DragState::Slides(_)), _, _) => InteractionMode::DraggingSlides,
            (None, Some(_), _) => InteractionMode::Resizing,
            (None, None, Some(_)) => InteractionMode::EditingText,
            (None, None, None) => InteractionMode::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    pub fn is_resizing(&self) -> bool {
        self.resizing.is_some()
    }

    pub fn is_editing_text(&self) -> bool {
        self.editing_text_object_id.is_some()
    }

    pub fn has_active_ui_state(&self) -> bool {
        self.dragging.is_some() || self.resizing.is_some() || self.editing_text_object_id.is_some()
    }

    /// Drop every transient gesture, keeping document and selection
    pub fn clear_ui_state(&self) -> Editor {
        if !self.has_active_ui_state() {
            return self.clone();
        }
        Editor {
            dragging: None,
            resizing: None,
            editing_text_object_id: None,
            ..self.clone()
        }
    }

    /// Build an editor with a new selection and no transient state
    pub(crate) fn reselected(&self, selection: Option<EditorSelection>) -> Editor {
        Editor {
            presentation: Arc::clone(&self.presentation),
            selection,
            dragging: None,
            resizing: None,
            editing_text_object_id: None,
        }
    }
}
