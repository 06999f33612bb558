use egui::{Align2, Color32, FontFamily, FontId, Painter, Pos2, Rect, Stroke};

use crate::config::{DEFAULT_FONT_SIZE, EditorConfig};
use crate::element::{ObjectKind, SlideObject};
use crate::geometry::{Bounds, SlideViewport};
use crate::id_generator::{ObjectId, SlideId};
use crate::interaction::{DragPreview, DragState, compute_drag_preview, compute_resize_preview};
use crate::selection::EditorSelection;
use crate::slide::{Slide, SlideBackground};
use crate::state::Editor;
use crate::texture_manager::TextureManager;
use crate::widgets::resize_handle::{HandleWidget, ResizeHandle};

const SELECTION_COLOR: Color32 = Color32::from_rgb(30, 120, 255);
const DEFAULT_TEXT_COLOR: Color32 = Color32::from_rgb(26, 26, 26);

/// What to draw over a slide this frame: selection outlines and the live
/// drag/resize previews computed from the pointer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideOverlay {
    pub selected: Vec<ObjectId>,
    pub drag_preview: Option<DragPreview>,
    pub resize_preview: Option<(ObjectId, Bounds)>,
    pub editing: Option<ObjectId>,
}

impl SlideOverlay {
    /// Overlay for `slide_id`, with previews following `pointer` (slide
    /// coordinates) when a gesture on this slide is active
    pub fn for_slide(
        editor: &Editor,
        slide_id: SlideId,
        pointer: Option<Pos2>,
        config: &EditorConfig,
    ) -> Self {
        let selected = match &editor.selection {
            Some(EditorSelection::Objects {
                slide_id: scope,
                object_ids,
            }) if *scope == slide_id => object_ids.clone(),
            _ => Vec::new(),
        };

        let drag_preview = editor.dragging.as_ref().and_then(|drag| match drag {
            DragState::Objects(object_drag) if object_drag.slide_id == slide_id => compute_drag_preview(drag),
            _ => None,
        });

        let resize_preview = editor
            .resizing
            .as_ref()
            .zip(pointer)
            .filter(|(resizing, _)| {
                editor
                    .presentation
                    .slide(slide_id)
                    .is_some_and(|slide| slide.contains_object(resizing.object_id))
            })
            .map(|(resizing, pointer)| {
                let bounds = compute_resize_preview(
                    resizing,
                    pointer,
                    config.min_object_width,
                    config.min_object_height,
                );
                (resizing.object_id, bounds)
            });

        Self {
            selected,
            drag_preview,
            resize_preview,
            editing: editor.editing_text_object_id,
        }
    }

    /// Where an object should be drawn right now
    pub fn effective_bounds(&self, object: &SlideObject) -> Bounds {
        if let Some((object_id, bounds)) = self.resize_preview {
            if object_id == object.id {
                return bounds;
            }
        }
        let mut bounds = object.bounds();
        if let Some(position) = self
            .drag_preview
            .as_ref()
            .and_then(|preview| preview.position_of(object.id))
        {
            bounds.x = position.x;
            bounds.y = position.y;
        }
        bounds
    }
}

/// Parse `#RRGGBB` / `#RRGGBBAA`
pub fn parse_color(hex: &str) -> Option<Color32> {
    Color32::from_hex(hex.trim()).ok()
}

fn font_for(family: Option<&str>, size: f32) -> FontId {
    let family = match family {
        Some(name) if name.to_lowercase().contains("mono") || name.to_lowercase().contains("courier") => {
            FontFamily::Monospace
        }
        _ => FontFamily::Proportional,
    };
    FontId::new(size.max(1.0), family)
}

/// Paints slides and their objects with egui
#[derive(Default)]
pub struct Renderer {
    textures: TextureManager,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Should be called at the start of each frame
    pub fn begin_frame(&mut self) {
        self.textures.begin_frame();
    }

    pub fn paint_slide(
        &mut self,
        ctx: &egui::Context,
        painter: &Painter,
        viewport: &SlideViewport,
        slide: &Slide,
        slide_size: egui::Vec2,
        overlay: &SlideOverlay,
    ) {
        let slide_rect = viewport.to_screen_rect(&Bounds::new(0.0, 0.0, slide_size.x, slide_size.y));
        let painter = painter.with_clip_rect(slide_rect.intersect(painter.clip_rect()));

        self.paint_background(ctx, &painter, slide_rect, slide.background.as_ref());

        for object in slide.objects_in_paint_order() {
            let bounds = overlay.effective_bounds(object);
            let rect = viewport.to_screen_rect(&bounds);
            match &object.kind {
                ObjectKind::Text(text) => {
                    if overlay.editing == Some(object.id) {
                        // The inline editor draws this one
                        continue;
                    }
                    let font = font_for(
                        text.font_family.as_deref(),
                        text.font_size.unwrap_or(DEFAULT_FONT_SIZE) * viewport.scale,
                    );
                    let color = text
                        .color
                        .as_deref()
                        .and_then(parse_color)
                        .unwrap_or(DEFAULT_TEXT_COLOR);
                    let galley = painter.layout(text.content.clone(), font, color, rect.width().max(1.0));
                    painter.with_clip_rect(rect).galley(rect.min, galley, color);
                }
                ObjectKind::Image(image) => match self.textures.texture_for(ctx, &image.src) {
                    Some(texture_id) => {
                        painter.image(
                            texture_id,
                            rect,
                            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                            Color32::WHITE,
                        );
                    }
                    None => {
                        painter.rect_filled(rect, 0.0, Color32::from_gray(220));
                        painter.text(
                            rect.center(),
                            Align2::CENTER_CENTER,
                            "image",
                            FontId::proportional(12.0),
                            Color32::DARK_GRAY,
                        );
                    }
                },
            }
        }

        for object_id in &overlay.selected {
            let Some(object) = slide.object(*object_id) else {
                continue;
            };
            let rect = viewport.to_screen_rect(&overlay.effective_bounds(object));
            painter.rect_stroke(rect, 0.0, Stroke::new(1.5, SELECTION_COLOR));
        }
    }

    /// Draw the handles of every selected object
    pub fn paint_handles(
        &self,
        ui: &mut egui::Ui,
        viewport: &SlideViewport,
        slide: &Slide,
        overlay: &SlideOverlay,
        handle_size: f32,
    ) {
        for object_id in &overlay.selected {
            let Some(object) = slide.object(*object_id) else {
                continue;
            };
            let bounds = overlay.effective_bounds(object);
            for handle in ResizeHandle::ALL {
                let position = viewport.to_screen(handle.anchor(&bounds));
                HandleWidget::new(*object_id, handle, position, handle_size).show(ui);
            }
        }
    }

    fn paint_background(
        &mut self,
        ctx: &egui::Context,
        painter: &Painter,
        rect: Rect,
        background: Option<&SlideBackground>,
    ) {
        match background {
            Some(SlideBackground::Image(src)) => {
                painter.rect_filled(rect, 0.0, Color32::WHITE);
                if let Some(texture_id) = self.textures.texture_for(ctx, src) {
                    painter.image(
                        texture_id,
                        rect,
                        Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                        Color32::WHITE,
                    );
                }
            }
            Some(SlideBackground::Color(hex)) => {
                painter.rect_filled(rect, 0.0, parse_color(hex).unwrap_or(Color32::WHITE));
            }
            None => {
                painter.rect_filled(rect, 0.0, Color32::WHITE);
            }
        }
        painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::from_gray(180)));
    }
}
