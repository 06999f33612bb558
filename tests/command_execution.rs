use std::sync::Arc;

use egui::Pos2;
use slide_editor::command::{Command, CommandError};
use slide_editor::error::TextContentError;
use slide_editor::slide::SlideBackground;
use slide_editor::{EditorConfig, EditorStore, ResizeHandle};

// Store with one slide holding one text box that is selected but not edited
fn store_with_text_box() -> EditorStore {
    let mut store = EditorStore::default();
    store.dispatch(Command::AddTextObject).expect("add text");
    store.dispatch(Command::StopEditingText).expect("stop editing");
    store
}

#[test]
fn test_dispatch_reports_changes_and_bumps_revision() {
    let mut store = EditorStore::new(EditorConfig::default());
    assert_eq!(store.revision(), 0);

    assert_eq!(store.dispatch(Command::AddSlide), Ok(true));
    assert_eq!(store.revision(), 1);
    assert_eq!(store.editor().presentation.slides.len(), 2);
}

#[test]
fn test_no_op_commands_keep_the_same_editor() {
    let mut store = EditorStore::default();
    let before = Arc::clone(&store.editor().presentation);

    // Nothing is being dragged, resized or edited
    assert_eq!(store.dispatch(Command::FinishDrag), Ok(false));
    assert_eq!(store.dispatch(Command::CancelResize), Ok(false));
    assert_eq!(store.dispatch(Command::StopEditingText), Ok(false));
    assert_eq!(store.dispatch(Command::DeleteObject), Ok(false));

    assert_eq!(store.revision(), 0);
    assert!(Arc::ptr_eq(&before, &store.editor().presentation));
}

#[test]
fn test_invalid_text_is_rejected_without_mutation() {
    let mut store = store_with_text_box();
    let object_id = store.editor().presentation.slides[0].objects[0].id;
    let revision = store.revision();

    let result = store.dispatch(Command::UpdateText {
        object_id,
        content: "   ".to_owned(),
    });
    assert_eq!(
        result,
        Err(CommandError::InvalidText(TextContentError::Empty))
    );
    assert_eq!(store.revision(), revision);
    assert_eq!(
        store.editor().presentation.slides[0].objects[0]
            .as_text()
            .map(|text| text.content.as_str()),
        Some("New text")
    );
}

#[test]
fn test_update_text_stores_trimmed_content() {
    let mut store = store_with_text_box();
    let object_id = store.editor().presentation.slides[0].objects[0].id;

    assert_eq!(
        store.dispatch(Command::UpdateText {
            object_id,
            content: "  Quarterly results ".to_owned(),
        }),
        Ok(true)
    );
    assert_eq!(
        store.editor().presentation.slides[0].objects[0]
            .as_text()
            .map(|text| text.content.as_str()),
        Some("Quarterly results")
    );
}

#[test]
fn test_finish_resize_uses_configured_minimum() {
    let config = EditorConfig {
        min_object_width: 50.0,
        min_object_height: 40.0,
        ..Default::default()
    };
    let mut store = EditorStore::with_editor(store_with_text_box().editor().clone(), config);
    let object_id = store.editor().presentation.slides[0].objects[0].id;

    store
        .dispatch_all([
            Command::StartResize {
                object_id,
                handle: ResizeHandle::BottomRight,
                mouse: Pos2::new(320.0, 100.0),
            },
            Command::FinishResize {
                mouse: Pos2::new(0.0, 0.0),
            },
        ])
        .expect("resize");

    let object = &store.editor().presentation.slides[0].objects[0];
    assert!((object.width - 50.0).abs() < 0.001);
    assert!((object.height - 40.0).abs() < 0.001);
    assert!(!store.editor().is_resizing());
}

#[test]
fn test_dispatch_all_stops_at_first_error() {
    let mut store = store_with_text_box();
    let object_id = store.editor().presentation.slides[0].objects[0].id;

    let result = store.dispatch_all([
        Command::UpdateText {
            object_id,
            content: String::new(),
        },
        Command::AddSlide,
    ]);
    assert!(result.is_err());
    assert_eq!(store.editor().presentation.slides.len(), 1);
}

#[test]
fn test_document_commands() {
    let mut store = EditorStore::default();

    store
        .dispatch(Command::ChangePresentationTitle("Roadmap".to_owned()))
        .expect("title");
    store
        .dispatch(Command::ChangeSlideBackground(SlideBackground::Color(
            "#112233".to_owned(),
        )))
        .expect("background");

    let editor = store.editor();
    assert_eq!(editor.presentation.title, "Roadmap");
    assert_eq!(
        editor.presentation.slides[0].background,
        Some(SlideBackground::Color("#112233".to_owned()))
    );

    // Same title again is not a change
    assert_eq!(
        store.dispatch(Command::ChangePresentationTitle("Roadmap".to_owned())),
        Ok(false)
    );
}

#[test]
fn test_stacking_commands() {
    let mut store = store_with_text_box();
    assert_eq!(store.dispatch(Command::SendBackward), Ok(false));
    assert_eq!(store.dispatch(Command::BringForward), Ok(true));
    assert_eq!(store.editor().presentation.slides[0].objects[0].z_index, 1);
}

#[test]
fn test_reset_starts_a_new_presentation() {
    let mut store = store_with_text_box();
    store.dispatch(Command::AddSlide).expect("add slide");

    assert_eq!(store.dispatch(Command::Reset), Ok(true));
    let editor = store.editor();
    assert_eq!(editor.presentation.slides.len(), 1);
    assert!(editor.presentation.slides[0].objects.is_empty());
    assert_eq!(editor.selected_slide_ids(), vec![editor.presentation.slides[0].id]);
}

#[test]
fn test_command_names() {
    assert_eq!(Command::AddSlide.name(), "add_slide");
    assert_eq!(Command::FinishDrag.name(), "finish_drag");
    assert!(
        Command::UpdateDrag {
            mouse: Pos2::ZERO
        }
        .is_pointer_update()
    );
    assert!(!Command::CancelDrag.is_pointer_update());
}

#[test]
fn test_position_and_size_updates() {
    let mut store = store_with_text_box();
    let object_id = store.editor().presentation.slides[0].objects[0].id;

    assert_eq!(
        store.dispatch(Command::UpdateObjectPosition {
            object_id,
            x: 200.0,
            y: 150.0,
        }),
        Ok(true)
    );
    assert_eq!(
        store.dispatch(Command::UpdateObjectSize {
            object_id,
            width: 120.0,
            height: 60.0,
        }),
        Ok(true)
    );
    // Repeating the same size is not a change
    assert_eq!(
        store.dispatch(Command::UpdateObjectSize {
            object_id,
            width: 120.0,
            height: 60.0,
        }),
        Ok(false)
    );

    let object = &store.editor().presentation.slides[0].objects[0];
    assert!((object.x - 200.0).abs() < 0.001);
    assert!((object.y - 150.0).abs() < 0.001);
    assert!((object.width - 120.0).abs() < 0.001);
    assert!((object.height - 60.0).abs() < 0.001);
}

#[test]
fn test_unchanged_text_is_not_a_change() {
    let mut store = store_with_text_box();
    let object_id = store.editor().presentation.slides[0].objects[0].id;

    assert_eq!(
        store.dispatch(Command::UpdateText {
            object_id,
            content: "New text".to_owned(),
        }),
        Ok(false)
    );
}
