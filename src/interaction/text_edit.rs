use crate::id_generator::ObjectId;
use crate::state::Editor;

impl Editor {
    /// Enter inline editing for a text object on the selected slide.
    /// Image objects and unknown ids are ignored.
    pub fn start_editing_text(&self, object_id: ObjectId) -> Editor {
        let is_text = self
            .selected_slide_id()
            .and_then(|slide_id| self.presentation.slide(slide_id))
            .and_then(|slide| slide.object(object_id))
            .is_some_and(|object| object.is_text());
        if !is_text {
            log::debug!("start_editing_text: {object_id} is not a text object on the selected slide");
            return self.clone();
        }
        if self.editing_text_object_id == Some(object_id) {
            return self.clone();
        }

        Editor {
            editing_text_object_id: Some(object_id),
            dragging: None,
            resizing: None,
            ..self.clone()
        }
    }

    pub fn stop_editing_text(&self) -> Editor {
        if self.editing_text_object_id.is_none() {
            return self.clone();
        }
        Editor {
            editing_text_object_id: None,
            ..self.clone()
        }
    }
}
