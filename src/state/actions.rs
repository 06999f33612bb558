//! Document-level actions: creating and deleting slides and objects and
//! editing their fields. Each one keeps the selection consistent with what
//! it changed.

use std::sync::Arc;

use super::Editor;
use crate::document::{
    add_slide_to_presentation, delete_slides_from_presentation, move_slides,
    update_presentation_title, update_slide_in_presentation,
};
use crate::element::factory::{self, TextParams};
use crate::element::{ImagePayload, SlideObject};
use crate::error::TextContentError;
use crate::id_generator::ObjectId;
use crate::selection::EditorSelection;
use crate::slide::{Slide, SlideBackground, create_slide};

impl Editor {
    /// Append a new slide and select it
    pub fn add_slide(&self) -> Editor {
        let slide = create_slide();
        let slide_id = slide.id;
        log::info!("Adding slide {slide_id}");
        Editor {
            presentation: add_slide_to_presentation(&self.presentation, slide),
            ..self.reselected(Some(EditorSelection::slides([slide_id])))
        }
    }

    /// Delete every selected slide and select the neighbour of the first one
    pub fn delete_slide(&self) -> Editor {
        let Some(EditorSelection::Slides { slide_ids }) = &self.selection else {
            log::debug!("delete_slide: no slide selection");
            return self.clone();
        };
        let Some(first_index) = slide_ids
            .iter()
            .find_map(|id| self.presentation.slide_index(*id))
        else {
            return self.clone();
        };

        let presentation = delete_slides_from_presentation(&self.presentation, slide_ids);
        let selection = if presentation.slides.is_empty() {
            None
        } else {
            let index = first_index.min(presentation.slides.len() - 1);
            Some(EditorSelection::slides([presentation.slides[index].id]))
        };

        log::info!("Deleted {} slide(s)", slide_ids.len());
        Editor {
            presentation,
            ..self.reselected(selection)
        }
    }

    /// Reorder the selected slides without a drag
    pub fn move_selected_slides(&self, target_index: i32) -> Editor {
        let Some(EditorSelection::Slides { slide_ids }) = &self.selection else {
            return self.clone();
        };
        Editor {
            presentation: move_slides(&self.presentation, slide_ids, target_index),
            ..self.clone()
        }
    }

    /// Add a default text box to the selected slide, select it and start
    /// editing it
    pub fn add_text_object(&self) -> Editor {
        let Some(slide) = self.selected_slide() else {
            log::debug!("add_text_object: no slide selected");
            return self.clone();
        };
        let object = factory::create_text_object(TextParams {
            z_index: slide.next_z_index(),
            ..Default::default()
        });
        let object_id = object.id;
        let slide_id = slide.id;

        Editor {
            presentation: update_slide_in_presentation(
                &self.presentation,
                slide.with_object_added(object),
            ),
            editing_text_object_id: Some(object_id),
            ..self.reselected(Some(EditorSelection::objects(slide_id, [object_id])))
        }
    }

    pub fn add_image_object(&self, payload: &ImagePayload) -> Editor {
        let Some(slide) = self.selected_slide() else {
            log::debug!("add_image_object: no slide selected");
            return self.clone();
        };
        let object = factory::create_image_object(payload, slide.next_z_index());
        let object_id = object.id;
        let slide_id = slide.id;

        log::info!(
            "Adding {}x{} image to slide {slide_id}",
            payload.natural_width,
            payload.natural_height
        );
        Editor {
            presentation: update_slide_in_presentation(
                &self.presentation,
                slide.with_object_added(object),
            ),
            ..self.reselected(Some(EditorSelection::objects(slide_id, [object_id])))
        }
    }

    /// Remove the selected objects; the selection falls back to their slide
    pub fn delete_object(&self) -> Editor {
        let Some(EditorSelection::Objects {
            slide_id,
            object_ids,
        }) = &self.selection
        else {
            return self.clone();
        };
        let Some(updated) = self
            .presentation
            .slide(*slide_id)
            .and_then(|slide| slide.with_objects_removed(object_ids))
        else {
            return self.clone();
        };

        log::info!("Deleted {} object(s) from slide {slide_id}", object_ids.len());
        Editor {
            presentation: update_slide_in_presentation(&self.presentation, updated),
            ..self.reselected(Some(EditorSelection::slides([*slide_id])))
        }
    }

    pub fn change_presentation_title(&self, title: &str) -> Editor {
        let presentation = update_presentation_title(&self.presentation, title);
        if Arc::ptr_eq(&presentation, &self.presentation) {
            return self.clone();
        }
        Editor {
            presentation,
            ..self.clone()
        }
    }

    /// Set the background of the selected slide
    pub fn change_slide_background(&self, background: SlideBackground) -> Editor {
        let Some(updated) = self
            .selected_slide()
            .and_then(|slide| slide.with_background(background))
        else {
            return self.clone();
        };
        Editor {
            presentation: update_slide_in_presentation(&self.presentation, updated),
            ..self.clone()
        }
    }

    /// Replace the text of a selected-slide text object. Content is trimmed
    /// and length checked; a rejected edit leaves the editor untouched.
    pub fn update_text_object(
        &self,
        object_id: ObjectId,
        content: &str,
    ) -> Result<Editor, TextContentError> {
        let Some(slide) = self.object_scope_slide() else {
            return Ok(self.clone());
        };
        let Some(object) = slide.object(object_id).filter(|object| object.is_text()) else {
            return Ok(self.clone());
        };
        let edited = object.with_text_content(content)?;
        let updated = slide.with_object_updated(object_id, |_| edited);

        Ok(self.with_slide_replaced(updated))
    }

    pub fn update_object_position(&self, object_id: ObjectId, x: f32, y: f32) -> Editor {
        self.update_scoped_object(object_id, |object| object.moved_to(x, y))
    }

    pub fn update_object_size(&self, object_id: ObjectId, width: f32, height: f32) -> Editor {
        self.update_scoped_object(object_id, |object| object.resized_to(width, height))
    }

    /// Raise every selected object by one stacking step
    pub fn bring_forward(&self) -> Editor {
        self.restack_selected(|z_index| z_index.saturating_add(1))
    }

    /// Lower every selected object by one stacking step, never below zero
    pub fn send_backward(&self) -> Editor {
        self.restack_selected(|z_index| (z_index - 1).max(0))
    }

    /// Start over with a fresh presentation
    pub fn reset(&self) -> Editor {
        Editor::new()
    }

    pub fn selected_slide(&self) -> Option<&Arc<Slide>> {
        self.selected_slide_id()
            .and_then(|slide_id| self.presentation.slide(slide_id))
    }

    fn object_scope_slide(&self) -> Option<&Arc<Slide>> {
        match &self.selection {
            Some(EditorSelection::Objects { slide_id, .. }) => self.presentation.slide(*slide_id),
            _ => None,
        }
    }

    fn update_scoped_object(
        &self,
        object_id: ObjectId,
        update: impl FnOnce(&SlideObject) -> SlideObject,
    ) -> Editor {
        let updated = self
            .object_scope_slide()
            .and_then(|slide| slide.with_object_updated(object_id, update));
        self.with_slide_replaced(updated)
    }

    fn restack_selected(&self, restack: impl Fn(i32) -> i32) -> Editor {
        let Some(EditorSelection::Objects {
            slide_id,
            object_ids,
        }) = &self.selection
        else {
            return self.clone();
        };
        let Some(slide) = self.presentation.slide(*slide_id) else {
            return self.clone();
        };

        let mut updated: Option<Slide> = None;
        for object_id in object_ids {
            let current = updated.as_ref().unwrap_or(slide.as_ref());
            if let Some(next) = current.with_object_updated(*object_id, |object| {
                object.with_z_index(restack(object.z_index))
            }) {
                updated = Some(next);
            }
        }
        self.with_slide_replaced(updated)
    }

    fn with_slide_replaced(&self, slide: Option<Slide>) -> Editor {
        match slide {
            Some(slide) => Editor {
                presentation: update_slide_in_presentation(&self.presentation, slide),
                ..self.clone()
            },
            None => self.clone(),
        }
    }
}
