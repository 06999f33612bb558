//! Transient gestures layered on top of the selection: moving objects,
//! reordering slides, resizing through handles and inline text editing.

mod drag;
mod resize;
mod text_edit;

pub use drag::{DragPreview, DragState, ObjectDrag, SlidesDrag, compute_drag_preview};
pub use resize::{ResizeState, compute_resize_preview};
