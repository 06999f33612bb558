use egui::{FontId, Key, Sense, TextEdit, Ui};

use crate::SlideEditorApp;
use crate::app::TextEditSession;
use crate::command::Command;
use crate::config::DEFAULT_FONT_SIZE;
use crate::geometry::SlideViewport;
use crate::id_generator::ObjectId;
use crate::input::CanvasLayout;
use crate::renderer::SlideOverlay;
use crate::slide::Slide;

const CANVAS_MARGIN: f32 = 16.0;

pub fn central_panel(app: &mut SlideEditorApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let slide = {
            let editor = app.store.editor();
            editor
                .selected_slide()
                .or_else(|| editor.presentation.slides.first())
                .cloned()
        };
        let Some(slide) = slide else {
            ui.centered_and_justified(|ui| ui.label("Add a slide to get started"));
            return;
        };

        let config = app.store.config().clone();
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let canvas_rect = response.rect;
        let viewport = SlideViewport::fit(canvas_rect.shrink(CANVAS_MARGIN), config.slide_size());
        app.input.set_canvas(CanvasLayout {
            rect: canvas_rect,
            viewport,
            slide_id: slide.id,
        });

        let pointer = ctx.pointer_latest_pos().map(|pos| viewport.to_slide(pos));
        let overlay = SlideOverlay::for_slide(app.store.editor(), slide.id, pointer, &config);
        app.renderer
            .paint_slide(ctx, &painter, &viewport, &slide, config.slide_size(), &overlay);

        let editor = app.store.editor();
        if let Some(resizing) = &editor.resizing {
            ctx.set_cursor_icon(resizing.handle.cursor_icon());
        } else if editor.is_dragging() {
            ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
        }
        if !editor.is_dragging() && !editor.is_editing_text() {
            app.renderer
                .paint_handles(ui, &viewport, &slide, &overlay, config.handle_radius * 1.5);
        }

        text_edit_overlay(app, ui, &viewport, &slide, &overlay);
    });
}

/// Commands that close an inline edit. A discarded edit only leaves edit
/// mode; otherwise a changed buffer is written back first.
fn commands_to_close_text_edit(
    object_id: ObjectId,
    original: &str,
    buffer: String,
    discard: bool,
) -> Vec<Command> {
    let mut commands = Vec::with_capacity(2);
    if !discard && buffer != original {
        commands.push(Command::UpdateText {
            object_id,
            content: buffer,
        });
    }
    commands.push(Command::StopEditingText);
    commands
}

/// Inline editor drawn over the text object being edited. Losing focus
/// commits the buffer, Escape throws it away.
fn text_edit_overlay(
    app: &mut SlideEditorApp,
    ui: &mut Ui,
    viewport: &SlideViewport,
    slide: &Slide,
    overlay: &SlideOverlay,
) {
    let Some(object_id) = app.store.editor().editing_text_object_id else {
        app.text_edit = None;
        return;
    };
    let Some((object, text)) = slide
        .object(object_id)
        .and_then(|object| object.as_text().map(|text| (object, text)))
    else {
        return;
    };

    if app
        .text_edit
        .as_ref()
        .is_none_or(|session| session.object_id != object_id)
    {
        app.text_edit = Some(TextEditSession::new(object_id, &text.content));
    }
    let Some(session) = app.text_edit.as_mut() else {
        return;
    };

    let rect = viewport.to_screen_rect(&overlay.effective_bounds(object));
    app.input.block(rect);

    let font = FontId::proportional(text.font_size.unwrap_or(DEFAULT_FONT_SIZE) * viewport.scale);
    let response = ui.put(
        rect,
        TextEdit::multiline(&mut session.buffer)
            .font(font)
            .desired_width(rect.width()),
    );
    if session.request_focus {
        response.request_focus();
        session.request_focus = false;
    }

    let escape = ui.input(|input| input.key_pressed(Key::Escape));
    if !response.lost_focus() && !escape {
        return;
    }

    let buffer = std::mem::take(&mut session.buffer);
    app.text_edit = None;
    for command in commands_to_close_text_edit(object_id, &text.content, buffer, escape) {
        let name = command.name();
        if !app.dispatch(command) {
            log::debug!("{name} for {object_id} was not applied");
        }
    }
}
