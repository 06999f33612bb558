use serde::{Deserialize, Serialize};

use crate::id_generator::{ObjectId, SlideId};
use crate::state::Editor;

/// What the user currently has selected.
///
/// Slides and objects never mix: an object selection is always scoped to
/// exactly one slide. "Nothing selected" is `Option::None` on the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EditorSelection {
    Slides {
        slide_ids: Vec<SlideId>,
    },
    Objects {
        slide_id: SlideId,
        object_ids: Vec<ObjectId>,
    },
}

impl EditorSelection {
    pub fn slides(slide_ids: impl IntoIterator<Item = SlideId>) -> Self {
        EditorSelection::Slides {
            slide_ids: slide_ids.into_iter().collect(),
        }
    }

    pub fn objects(slide_id: SlideId, object_ids: impl IntoIterator<Item = ObjectId>) -> Self {
        EditorSelection::Objects {
            slide_id,
            object_ids: object_ids.into_iter().collect(),
        }
    }

    pub fn slide_ids(&self) -> Vec<SlideId> {
        match self {
            EditorSelection::Slides { slide_ids } => slide_ids.clone(),
            EditorSelection::Objects { slide_id, .. } => vec![*slide_id],
        }
    }

    /// First selected slide, or the scope of an object selection
    pub fn primary_slide_id(&self) -> Option<SlideId> {
        match self {
            EditorSelection::Slides { slide_ids } => slide_ids.first().copied(),
            EditorSelection::Objects { slide_id, .. } => Some(*slide_id),
        }
    }

    pub fn object_ids(&self) -> &[ObjectId] {
        match self {
            EditorSelection::Slides { .. } => &[],
            EditorSelection::Objects { object_ids, .. } => object_ids,
        }
    }

    pub fn contains_slide(&self, id: SlideId) -> bool {
        matches!(self, EditorSelection::Slides { slide_ids } if slide_ids.contains(&id))
    }

    pub fn contains_object(&self, slide: SlideId, object: ObjectId) -> bool {
        matches!(
            self,
            EditorSelection::Objects { slide_id, object_ids }
                if *slide_id == slide && object_ids.contains(&object)
        )
    }
}

// Queries
impl Editor {
    pub fn selected_slide_ids(&self) -> Vec<SlideId> {
        self.selection
            .as_ref()
            .map(EditorSelection::slide_ids)
            .unwrap_or_default()
    }

    pub fn selected_slide_id(&self) -> Option<SlideId> {
        self.selection
            .as_ref()
            .and_then(EditorSelection::primary_slide_id)
    }

    pub fn selected_object_ids(&self) -> Vec<ObjectId> {
        self.selection
            .as_ref()
            .map(|selection| selection.object_ids().to_vec())
            .unwrap_or_default()
    }

    pub fn is_slide_selected(&self, slide_id: SlideId) -> bool {
        self.selection
            .as_ref()
            .is_some_and(|selection| selection.contains_slide(slide_id))
    }

    pub fn is_object_selected(&self, slide_id: SlideId, object_id: ObjectId) -> bool {
        self.selection
            .as_ref()
            .is_some_and(|selection| selection.contains_object(slide_id, object_id))
    }
}

// Transitions
impl Editor {
    pub fn select_slide(&self, slide_id: SlideId) -> Editor {
        if !self.presentation.contains_slide(slide_id) {
            log::debug!("select_slide: unknown slide {slide_id}");
            return self.clone();
        }
        self.reselected(Some(EditorSelection::slides([slide_id])))
    }

    /// Add or remove a slide from a slide selection. The last selected slide
    /// cannot be toggled off.
    pub fn toggle_slide_selection(&self, slide_id: SlideId) -> Editor {
        let Some(EditorSelection::Slides { slide_ids }) = &self.selection else {
            return self.select_slide(slide_id);
        };
        if !self.presentation.contains_slide(slide_id) {
            log::debug!("toggle_slide_selection: unknown slide {slide_id}");
            return self.clone();
        }

        let mut slide_ids = slide_ids.clone();
        if let Some(index) = slide_ids.iter().position(|id| *id == slide_id) {
            if slide_ids.len() == 1 {
                return self.clone();
            }
            slide_ids.remove(index);
        } else {
            slide_ids.push(slide_id);
        }
        self.reselected(Some(EditorSelection::Slides { slide_ids }))
    }

    pub fn select_object(&self, slide_id: SlideId, object_id: ObjectId) -> Editor {
        let exists = self
            .presentation
            .slide(slide_id)
            .is_some_and(|slide| slide.contains_object(object_id));
        if !exists {
            log::debug!("select_object: object {object_id} is not on slide {slide_id}");
            return self.clone();
        }
        self.reselected(Some(EditorSelection::objects(slide_id, [object_id])))
    }

    /// Add or remove an object from the selection. Removing the last object
    /// falls back to selecting its slide; a different scope starts over.
    pub fn toggle_object_selection(&self, slide_id: SlideId, object_id: ObjectId) -> Editor {
        let object_ids = match &self.selection {
            Some(EditorSelection::Objects {
                slide_id: scope,
                object_ids,
            }) if *scope == slide_id => object_ids,
            _ => return self.select_object(slide_id, object_id),
        };

        let mut object_ids = object_ids.clone();
        if let Some(index) = object_ids.iter().position(|id| *id == object_id) {
            object_ids.remove(index);
            if object_ids.is_empty() {
                return self.reselected(Some(EditorSelection::slides([slide_id])));
            }
        } else {
            let exists = self
                .presentation
                .slide(slide_id)
                .is_some_and(|slide| slide.contains_object(object_id));
            if !exists {
                log::debug!("toggle_object_selection: object {object_id} is not on slide {slide_id}");
                return self.clone();
            }
            object_ids.push(object_id);
        }
        self.reselected(Some(EditorSelection::Objects {
            slide_id,
            object_ids,
        }))
    }

    pub fn clear_selection(&self) -> Editor {
        if self.selection.is_none() && !self.has_active_ui_state() {
            return self.clone();
        }
        self.reselected(None)
    }

    /// Drop back from an object selection to its slide
    pub fn clear_object_selection(&self) -> Editor {
        match &self.selection {
            Some(EditorSelection::Objects { slide_id, .. }) => {
                self.reselected(Some(EditorSelection::slides([*slide_id])))
            }
            _ => self.clone(),
        }
    }
}
