use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

pub mod hit_testing;

/// Axis-aligned box in slide coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn min(&self) -> Pos2 {
        Pos2::new(self.x, self.y)
    }

    pub fn max(&self) -> Pos2 {
        Pos2::new(self.x + self.width, self.y + self.height)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn contains(&self, point: Pos2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn translate(&self, delta: Vec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..*self
        }
    }

    pub fn to_rect(&self) -> Rect {
        Rect::from_min_size(self.min(), self.size())
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.min.x, rect.min.y, rect.width(), rect.height())
    }
}

/// Maps slide coordinates onto a screen rectangle, preserving aspect ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideViewport {
    pub origin: Pos2,
    pub scale: f32,
}

impl Default for SlideViewport {
    fn default() -> Self {
        Self {
            origin: Pos2::ZERO,
            scale: 1.0,
        }
    }
}

impl SlideViewport {
    /// Largest centered fit of `slide_size` inside `available`
    pub fn fit(available: Rect, slide_size: Vec2) -> Self {
        if slide_size.x <= 0.0 || slide_size.y <= 0.0 {
            return Self {
                origin: available.min,
                scale: 1.0,
            };
        }
        let scale = (available.width() / slide_size.x)
            .min(available.height() / slide_size.y)
            .max(0.01);
        let used = slide_size * scale;
        let origin = available.center() - used / 2.0;
        Self { origin, scale }
    }

    pub fn to_screen(&self, point: Pos2) -> Pos2 {
        self.origin + point.to_vec2() * self.scale
    }

    pub fn to_slide(&self, point: Pos2) -> Pos2 {
        ((point - self.origin) / self.scale).to_pos2()
    }

    pub fn to_screen_rect(&self, bounds: &Bounds) -> Rect {
        Rect::from_min_size(self.to_screen(bounds.min()), bounds.size() * self.scale)
    }
}
