use super::SlideObject;
use crate::geometry::Bounds;

// Patch utilities shared by every object kind. Each returns a new object and
// never touches the receiver.
impl SlideObject {
    pub fn moved_to(&self, x: f32, y: f32) -> SlideObject {
        SlideObject {
            x,
            y,
            ..self.clone()
        }
    }

    /// Negative sizes collapse to zero
    pub fn resized_to(&self, width: f32, height: f32) -> SlideObject {
        SlideObject {
            width: width.max(0.0),
            height: height.max(0.0),
            ..self.clone()
        }
    }

    pub fn with_bounds(&self, bounds: Bounds) -> SlideObject {
        self.moved_to(bounds.x, bounds.y)
            .resized_to(bounds.width, bounds.height)
    }

    pub fn with_z_index(&self, z_index: i32) -> SlideObject {
        SlideObject {
            z_index,
            ..self.clone()
        }
    }
}
