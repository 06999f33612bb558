use egui::{Pos2, Rangef};

use super::Bounds;
use crate::id_generator::ObjectId;
use crate::slide::Slide;
use crate::widgets::resize_handle::ResizeHandle;

/// The handle of `bounds` within `radius` of `point`, corners first
pub fn handle_at(bounds: &Bounds, point: Pos2, radius: f32) -> Option<ResizeHandle> {
    ResizeHandle::ALL
        .into_iter()
        .find(|handle| handle.anchor(bounds).distance(point) <= radius)
}

/// Topmost object under `point`. Higher `z_index` wins, and on equal
/// stacking the object added later wins.
pub fn object_at(slide: &Slide, point: Pos2) -> Option<ObjectId> {
    slide
        .objects
        .iter()
        .enumerate()
        .filter(|(_, object)| object.contains(point))
        .max_by_key(|(index, object)| (object.z_index, *index))
        .map(|(_, object)| object.id)
}

/// Drop index for a pointer at `y` over a list of slide rows (top to bottom).
///
/// The upper half of row `i` means "before i", the lower half "after i".
/// Above the first row is 0, below the last row is `rows.len()`.
pub fn slide_drop_index(rows: &[Rangef], y: f32) -> Option<i32> {
    let first = rows.first()?;
    if y < first.min {
        return Some(0);
    }
    for (index, row) in rows.iter().enumerate() {
        if y <= row.max {
            let middle = row.center();
            let slot = if y < middle { index } else { index + 1 };
            return i32::try_from(slot).ok();
        }
    }
    i32::try_from(rows.len()).ok()
}
