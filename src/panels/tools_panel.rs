use egui::{Button, Color32, TextEdit};
use std::path::Path;

use crate::SlideEditorApp;
use crate::app::ImageTarget;
use crate::command::Command;
use crate::file_handler::load_image_payload;
use crate::renderer::parse_color;
use crate::slide::SlideBackground;

const SNAPSHOT_NAME: &str = "presentation";

pub fn tools_panel(app: &mut SlideEditorApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            title_field(app, ui);
            ui.separator();

            let editor = app.store.editor();
            let has_slide_selection = !editor.selected_slide_ids().is_empty();
            let has_object_selection = !editor.selected_object_ids().is_empty();
            let can_delete_slide = has_slide_selection && !has_object_selection;

            if ui.button("Add slide").clicked() {
                app.dispatch(Command::AddSlide);
            }
            if ui
                .add_enabled(can_delete_slide, Button::new("Delete slide"))
                .clicked()
            {
                app.dispatch(Command::DeleteSlide);
            }
            ui.separator();

            if ui
                .add_enabled(has_slide_selection, Button::new("Add text"))
                .clicked()
            {
                app.dispatch(Command::AddTextObject);
            }
            if ui
                .add_enabled(has_slide_selection, Button::new("Add image…"))
                .clicked()
            {
                app.image_modal = Some(ImageTarget::Object);
            }
            if ui
                .add_enabled(has_object_selection, Button::new("Delete object"))
                .clicked()
            {
                app.dispatch(Command::DeleteObject);
            }
            if ui
                .add_enabled(has_object_selection, Button::new("Forward"))
                .clicked()
            {
                app.dispatch(Command::BringForward);
            }
            if ui
                .add_enabled(has_object_selection, Button::new("Backward"))
                .clicked()
            {
                app.dispatch(Command::SendBackward);
            }
            ui.separator();

            background_picker(app, ui);
            ui.separator();

            if ui.button("Save").clicked() {
                match app
                    .persistence
                    .save_snapshot(app.store.editor(), SNAPSHOT_NAME)
                {
                    Ok(path) => app.set_status(format!("Saved to {}", path.display())),
                    Err(err) => app.set_status(err.to_string()),
                }
            }
            if ui.button("Open").clicked() {
                match app.persistence.load_snapshot(SNAPSHOT_NAME) {
                    Ok(snapshot) => {
                        app.store.replace(snapshot.into_editor());
                        app.text_edit = None;
                        app.set_status("Presentation loaded");
                    }
                    Err(err) => app.set_status(err.to_string()),
                }
            }
            if ui.button("New").clicked() {
                app.dispatch(Command::Reset);
                app.text_edit = None;
            }
        });
    });

    image_modal(app, ctx);
}

fn title_field(app: &mut SlideEditorApp, ui: &mut egui::Ui) {
    let title = app.store.editor().presentation.title.clone();
    let response = ui.add(TextEdit::singleline(&mut app.title_buffer).desired_width(220.0));

    if response.lost_focus() {
        if app.title_buffer != title {
            let new_title = app.title_buffer.clone();
            app.dispatch(Command::ChangePresentationTitle(new_title));
        }
    } else if !response.has_focus() {
        app.title_buffer = title;
    }
}

fn background_picker(app: &mut SlideEditorApp, ui: &mut egui::Ui) {
    let editor = app.store.editor();
    let Some(slide) = editor.selected_slide() else {
        return;
    };
    let mut color = match &slide.background {
        Some(SlideBackground::Color(hex)) => parse_color(hex).unwrap_or(Color32::WHITE),
        _ => Color32::WHITE,
    };

    ui.label("Background");
    if ui.color_edit_button_srgba(&mut color).changed() {
        let hex = format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b());
        app.dispatch(Command::ChangeSlideBackground(SlideBackground::Color(hex)));
    }
    if ui.button("Image…").clicked() {
        app.image_modal = Some(ImageTarget::Background);
    }
}

fn image_modal(app: &mut SlideEditorApp, ctx: &egui::Context) {
    let Some(target) = app.image_modal else {
        return;
    };

    let mut insert = false;
    let mut close = false;
    let shown = egui::Window::new(target.title())
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("Image file path:");
            ui.text_edit_singleline(&mut app.image_path);
            ui.horizontal(|ui| {
                insert = ui.button("Insert").clicked();
                close = ui.button("Cancel").clicked();
            });
        });

    if let Some(shown) = shown {
        app.input.block(shown.response.rect);
    }

    if insert {
        match load_image_payload(Path::new(app.image_path.trim())) {
            Ok(payload) => {
                app.dispatch(target.command(payload));
                close = true;
            }
            Err(err) => app.set_status(format!("Could not load image: {err}")),
        }
    }
    if close {
        app.image_modal = None;
        app.image_path.clear();
    }
}
