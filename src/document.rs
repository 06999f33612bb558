//! The presentation document and its immutable update helpers.
//!
//! Every helper takes the current `Arc<Presentation>` and returns either the
//! very same `Arc` (nothing changed) or a new presentation whose untouched
//! slides are still the original `Arc<Slide>`s.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::DEFAULT_PRESENTATION_TITLE;
use crate::id_generator::{PresentationId, SlideId};
use crate::slide::{Slide, create_slide};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    pub id: PresentationId,
    pub title: String,
    pub slides: Vec<Arc<Slide>>,
}

/// A fresh presentation holding a single default slide
pub fn create_presentation() -> Presentation {
    Presentation {
        id: PresentationId::new(),
        title: DEFAULT_PRESENTATION_TITLE.to_owned(),
        slides: vec![Arc::new(create_slide())],
    }
}

impl Presentation {
    pub fn slide(&self, slide_id: SlideId) -> Option<&Arc<Slide>> {
        self.slides.iter().find(|slide| slide.id == slide_id)
    }

    pub fn slide_index(&self, slide_id: SlideId) -> Option<usize> {
        self.slides.iter().position(|slide| slide.id == slide_id)
    }

    pub fn contains_slide(&self, slide_id: SlideId) -> bool {
        self.slide_index(slide_id).is_some()
    }

    pub fn slide_ids(&self) -> Vec<SlideId> {
        self.slides.iter().map(|slide| slide.id).collect()
    }
}

pub fn update_presentation_title(
    presentation: &Arc<Presentation>,
    title: &str,
) -> Arc<Presentation> {
    if presentation.title == title {
        return Arc::clone(presentation);
    }
    Arc::new(Presentation {
        title: title.to_owned(),
        ..Presentation::clone(presentation)
    })
}

pub fn add_slide_to_presentation(
    presentation: &Arc<Presentation>,
    slide: Slide,
) -> Arc<Presentation> {
    let mut updated = Presentation::clone(presentation);
    updated.slides.push(Arc::new(slide));
    Arc::new(updated)
}

pub fn delete_slides_from_presentation(
    presentation: &Arc<Presentation>,
    slide_ids: &[SlideId],
) -> Arc<Presentation> {
    if !presentation
        .slides
        .iter()
        .any(|slide| slide_ids.contains(&slide.id))
    {
        return Arc::clone(presentation);
    }
    let mut updated = Presentation::clone(presentation);
    updated.slides.retain(|slide| !slide_ids.contains(&slide.id));
    Arc::new(updated)
}

/// Replace the slide with the same id. Unknown ids leave the presentation as is.
pub fn update_slide_in_presentation(
    presentation: &Arc<Presentation>,
    slide: Slide,
) -> Arc<Presentation> {
    let Some(index) = presentation.slide_index(slide.id) else {
        return Arc::clone(presentation);
    };
    if *presentation.slides[index] == slide {
        return Arc::clone(presentation);
    }
    let mut updated = Presentation::clone(presentation);
    updated.slides[index] = Arc::new(slide);
    Arc::new(updated)
}

/// Move the given slides as one block so that it lands at `target_index`.
///
/// `target_index` is a drop position expressed against the current order
/// (0 = before the first slide, `len` = after the last). Selected slides
/// sitting before the target shift it down by one each, the result is
/// clamped to the remaining range, and the block keeps the slides' current
/// relative order. Non-contiguous selections are gathered into one block.
pub fn move_slides(
    presentation: &Arc<Presentation>,
    slide_ids: &[SlideId],
    target_index: i32,
) -> Arc<Presentation> {
    let mut selected: Vec<usize> = slide_ids
        .iter()
        .filter_map(|id| presentation.slide_index(*id))
        .collect();
    selected.sort_unstable();
    selected.dedup();
    if selected.is_empty() {
        return Arc::clone(presentation);
    }

    let target = i64::from(target_index).max(0) as usize;
    let shift = selected.iter().filter(|&&index| index < target).count();
    let adjusted = target.saturating_sub(shift);

    let moving: Vec<Arc<Slide>> = selected
        .iter()
        .map(|&index| Arc::clone(&presentation.slides[index]))
        .collect();
    let mut remaining: Vec<Arc<Slide>> = presentation
        .slides
        .iter()
        .enumerate()
        .filter(|(index, _)| selected.binary_search(index).is_err())
        .map(|(_, slide)| Arc::clone(slide))
        .collect();

    let insert_at = adjusted.min(remaining.len());
    remaining.splice(insert_at..insert_at, moving);

    let unchanged = remaining
        .iter()
        .zip(presentation.slides.iter())
        .all(|(a, b)| Arc::ptr_eq(a, b));
    if unchanged {
        return Arc::clone(presentation);
    }

    Arc::new(Presentation {
        slides: remaining,
        ..Presentation::clone(presentation)
    })
}
