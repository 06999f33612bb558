use egui::{Color32, CursorIcon, Id, Painter, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2};
use serde::{Deserialize, Serialize};

use crate::geometry::Bounds;
use crate::id_generator::ObjectId;

/// One of the eight grab points around a selected object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeHandle {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl ResizeHandle {
    /// Corners first so they win over edges when hit areas overlap
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::TopLeft,
        ResizeHandle::TopRight,
        ResizeHandle::BottomRight,
        ResizeHandle::BottomLeft,
        ResizeHandle::Top,
        ResizeHandle::Right,
        ResizeHandle::Bottom,
        ResizeHandle::Left,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResizeHandle::TopLeft => "top-left",
            ResizeHandle::Top => "top",
            ResizeHandle::TopRight => "top-right",
            ResizeHandle::Right => "right",
            ResizeHandle::BottomRight => "bottom-right",
            ResizeHandle::Bottom => "bottom",
            ResizeHandle::BottomLeft => "bottom-left",
            ResizeHandle::Left => "left",
        }
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        match self {
            ResizeHandle::TopLeft | ResizeHandle::BottomRight => CursorIcon::ResizeNwSe,
            ResizeHandle::TopRight | ResizeHandle::BottomLeft => CursorIcon::ResizeNeSw,
            ResizeHandle::Top | ResizeHandle::Bottom => CursorIcon::ResizeVertical,
            ResizeHandle::Left | ResizeHandle::Right => CursorIcon::ResizeHorizontal,
        }
    }

    /// Whether dragging this handle moves the left edge (so x shifts)
    pub fn moves_left_edge(&self) -> bool {
        matches!(
            self,
            ResizeHandle::TopLeft | ResizeHandle::Left | ResizeHandle::BottomLeft
        )
    }

    /// Whether dragging this handle moves the top edge (so y shifts)
    pub fn moves_top_edge(&self) -> bool {
        matches!(
            self,
            ResizeHandle::TopLeft | ResizeHandle::Top | ResizeHandle::TopRight
        )
    }

    pub fn moves_right_edge(&self) -> bool {
        matches!(
            self,
            ResizeHandle::TopRight | ResizeHandle::Right | ResizeHandle::BottomRight
        )
    }

    pub fn moves_bottom_edge(&self) -> bool {
        matches!(
            self,
            ResizeHandle::BottomLeft | ResizeHandle::Bottom | ResizeHandle::BottomRight
        )
    }

    /// Where the handle sits on the given bounds
    pub fn anchor(&self, bounds: &Bounds) -> Pos2 {
        let left = bounds.x;
        let right = bounds.x + bounds.width;
        let top = bounds.y;
        let bottom = bounds.y + bounds.height;
        let center_x = bounds.x + bounds.width / 2.0;
        let center_y = bounds.y + bounds.height / 2.0;

        match self {
            ResizeHandle::TopLeft => Pos2::new(left, top),
            ResizeHandle::Top => Pos2::new(center_x, top),
            ResizeHandle::TopRight => Pos2::new(right, top),
            ResizeHandle::Right => Pos2::new(right, center_y),
            ResizeHandle::BottomRight => Pos2::new(right, bottom),
            ResizeHandle::Bottom => Pos2::new(center_x, bottom),
            ResizeHandle::BottomLeft => Pos2::new(left, bottom),
            ResizeHandle::Left => Pos2::new(left, center_y),
        }
    }
}

/// Visual grab square for a resize handle, drawn in screen space
pub struct HandleWidget {
    object_id: ObjectId,
    handle: ResizeHandle,
    position: Pos2,
    size: f32,
}

impl HandleWidget {
    pub fn new(object_id: ObjectId, handle: ResizeHandle, position: Pos2, size: f32) -> Self {
        Self {
            object_id,
            handle,
            position,
            size,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.position, Vec2::splat(self.size))
    }

    pub fn paint(&self, painter: &Painter) {
        let rect = self.rect();
        painter.rect_filled(rect, 2.0, Color32::WHITE);
        painter.rect_stroke(rect, 2.0, Stroke::new(1.5, Color32::from_rgb(30, 120, 255)));
    }

    /// Paint the handle and register a hover area carrying its cursor hint.
    /// Presses are routed by the canvas hit test, not by this response.
    pub fn show(&self, ui: &mut Ui) -> Response {
        self.paint(ui.painter());
        let id = Id::new(("resize_handle", self.object_id, self.handle.as_str()));
        ui.interact(self.rect(), id, Sense::hover())
            .on_hover_cursor(self.handle.cursor_icon())
    }

    pub fn handle(&self) -> ResizeHandle {
        self.handle
    }
}
