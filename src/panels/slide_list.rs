use egui::{Align2, Color32, FontId, Rect, Sense, Stroke, vec2};

use crate::SlideEditorApp;
use crate::geometry::SlideViewport;
use crate::id_generator::SlideId;
use crate::interaction::DragState;
use crate::renderer::SlideOverlay;

const ROW_PADDING: f32 = 6.0;
const INDEX_GUTTER: f32 = 22.0;

pub fn slide_list_panel(app: &mut SlideEditorApp, ctx: &egui::Context) {
    egui::SidePanel::left("slide_list")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            let SlideEditorApp {
                store,
                input,
                renderer,
                ..
            } = app;
            let editor = store.editor();
            let config = store.config();
            let list_rect = ui.max_rect();

            let mut rows = Vec::with_capacity(editor.presentation.slides.len());
            egui::ScrollArea::vertical().show(ui, |ui| {
                for (index, slide) in editor.presentation.slides.iter().enumerate() {
                    let (row, _) = ui.allocate_exact_size(
                        vec2(ui.available_width(), config.slide_row_height),
                        Sense::hover(),
                    );
                    rows.push((slide.id, row));

                    let painter = ui.painter_at(row);
                    if editor.is_slide_selected(slide.id) {
                        painter.rect_filled(row, 4.0, Color32::from_rgb(210, 228, 255));
                    }
                    painter.text(
                        row.left_top() + vec2(ROW_PADDING, ROW_PADDING),
                        Align2::LEFT_TOP,
                        (index + 1).to_string(),
                        FontId::proportional(12.0),
                        ui.visuals().text_color(),
                    );

                    let thumb_area = Rect::from_min_max(
                        row.min + vec2(INDEX_GUTTER, ROW_PADDING),
                        row.max - vec2(ROW_PADDING, ROW_PADDING),
                    );
                    let viewport = SlideViewport::fit(thumb_area, config.slide_size());
                    renderer.paint_slide(
                        ctx,
                        &painter,
                        &viewport,
                        slide,
                        config.slide_size(),
                        &SlideOverlay::default(),
                    );
                }
            });

            if let Some(DragState::Slides(drag)) = &editor.dragging {
                if drag.threshold_passed {
                    if let Some(y) = drag
                        .target_index
                        .and_then(|target| insertion_y(&rows, target))
                    {
                        ui.painter().hline(
                            list_rect.x_range(),
                            y,
                            Stroke::new(2.0, Color32::from_rgb(30, 120, 255)),
                        );
                    }
                }
            }

            input.set_slide_list(list_rect, rows);
        });
}

/// Screen y of the gap a dropped block would land in
fn insertion_y(rows: &[(SlideId, Rect)], target: i32) -> Option<f32> {
    let target = usize::try_from(target).unwrap_or(0);
    match rows.get(target) {
        Some((_, rect)) => Some(rect.top()),
        None => rows.last().map(|(_, rect)| rect.bottom()),
    }
}
