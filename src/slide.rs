use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_SLIDE_BACKGROUND, DEFAULT_SLIDE_TITLE};
use crate::element::SlideObject;
use crate::id_generator::{ObjectId, SlideId};

/// What fills a slide behind its objects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum SlideBackground {
    /// Hex color such as `#FFFFFF`
    Color(String),
    /// Image source (data URL or path)
    Image(String),
}

impl Default for SlideBackground {
    fn default() -> Self {
        SlideBackground::Color(DEFAULT_SLIDE_BACKGROUND.to_owned())
    }
}

/// A page of the presentation and the objects placed on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub id: SlideId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<SlideBackground>,
    #[serde(default)]
    pub objects: Vec<SlideObject>,
}

pub fn create_slide() -> Slide {
    Slide {
        id: SlideId::new(),
        title: Some(DEFAULT_SLIDE_TITLE.to_owned()),
        background: Some(SlideBackground::default()),
        objects: Vec::new(),
    }
}

impl Slide {
    pub fn object(&self, object_id: ObjectId) -> Option<&SlideObject> {
        self.objects.iter().find(|object| object.id == object_id)
    }

    pub fn contains_object(&self, object_id: ObjectId) -> bool {
        self.object(object_id).is_some()
    }

    /// Stacking value that places a new object above everything on the slide
    pub fn next_z_index(&self) -> i32 {
        self.objects
            .iter()
            .map(|object| object.z_index)
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Objects in paint order: lowest `z_index` first, insertion order on ties
    pub fn objects_in_paint_order(&self) -> Vec<&SlideObject> {
        let mut objects: Vec<&SlideObject> = self.objects.iter().collect();
        objects.sort_by_key(|object| object.z_index);
        objects
    }

    pub fn with_object_added(&self, object: SlideObject) -> Slide {
        let mut slide = self.clone();
        slide.objects.push(object);
        slide
    }

    /// `None` when none of the ids are on this slide
    pub fn with_objects_removed(&self, object_ids: &[ObjectId]) -> Option<Slide> {
        if !self
            .objects
            .iter()
            .any(|object| object_ids.contains(&object.id))
        {
            return None;
        }
        let mut slide = self.clone();
        slide.objects.retain(|object| !object_ids.contains(&object.id));
        Some(slide)
    }

    /// Apply `update` to one object. `None` when the object is missing or the
    /// update leaves it unchanged.
    pub fn with_object_updated(
        &self,
        object_id: ObjectId,
        update: impl FnOnce(&SlideObject) -> SlideObject,
    ) -> Option<Slide> {
        let index = self
            .objects
            .iter()
            .position(|object| object.id == object_id)?;
        let updated = update(&self.objects[index]);
        if updated == self.objects[index] {
            return None;
        }
        let mut slide = self.clone();
        slide.objects[index] = updated;
        Some(slide)
    }

    /// `None` when the background is already the requested one
    pub fn with_background(&self, background: SlideBackground) -> Option<Slide> {
        if self.background.as_ref() == Some(&background) {
            return None;
        }
        Some(Slide {
            background: Some(background),
            ..self.clone()
        })
    }
}
