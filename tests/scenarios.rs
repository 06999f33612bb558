use egui::{Modifiers, PointerButton, Pos2};
use slide_editor::command::Command;
use slide_editor::{
    EditorStore, InputEvent, InteractionMode, PointerTarget, ResizeHandle, route_event,
};

// Feed events through the router into the store the way the app does
fn play(store: &mut EditorStore, events: &[InputEvent]) {
    for event in events {
        for command in route_event(store.editor(), event) {
            store.dispatch(command).expect("command accepted");
        }
    }
}

fn store_with_text_box() -> EditorStore {
    let mut store = EditorStore::default();
    store
        .dispatch_all([Command::AddTextObject, Command::StopEditingText])
        .expect("setup");
    store
}

fn press(position: Pos2, target: PointerTarget) -> InputEvent {
    InputEvent::PointerDown {
        position,
        button: PointerButton::Primary,
        target,
        modifiers: Modifiers::NONE,
    }
}

fn move_to(position: Pos2) -> InputEvent {
    InputEvent::PointerMove {
        position,
        slide_target_index: None,
    }
}

fn release(position: Pos2) -> InputEvent {
    InputEvent::PointerUp {
        position,
        button: PointerButton::Primary,
    }
}

#[test]
fn test_press_drag_release_moves_the_object() {
    let mut store = store_with_text_box();
    let slide_id = store.editor().presentation.slides[0].id;
    let object_id = store.editor().presentation.slides[0].objects[0].id;
    store.dispatch(Command::ClearObjectSelection).expect("deselect");

    let target = PointerTarget::Object {
        slide_id,
        object_id,
    };
    play(
        &mut store,
        &[
            press(Pos2::new(30.0, 30.0), target),
            move_to(Pos2::new(60.0, 70.0)),
            release(Pos2::new(60.0, 70.0)),
        ],
    );

    let object = &store.editor().presentation.slides[0].objects[0];
    assert_eq!(object.position(), Pos2::new(50.0, 60.0));
    assert!(store.editor().is_object_selected(slide_id, object_id));
    assert_eq!(store.editor().interaction_mode(), InteractionMode::Idle);
}

#[test]
fn test_handle_press_resizes() {
    let mut store = store_with_text_box();
    let object_id = store.editor().presentation.slides[0].objects[0].id;

    play(
        &mut store,
        &[
            press(
                Pos2::new(320.0, 100.0),
                PointerTarget::ResizeHandle {
                    object_id,
                    handle: ResizeHandle::BottomRight,
                },
            ),
            release(Pos2::new(370.0, 130.0)),
        ],
    );

    let object = &store.editor().presentation.slides[0].objects[0];
    assert!((object.width - 350.0).abs() < 0.001);
    assert!((object.height - 110.0).abs() < 0.001);
}

#[test]
fn test_escape_cancels_resize() {
    let mut store = store_with_text_box();
    let object_id = store.editor().presentation.slides[0].objects[0].id;

    play(
        &mut store,
        &[
            press(
                Pos2::new(20.0, 20.0),
                PointerTarget::ResizeHandle {
                    object_id,
                    handle: ResizeHandle::TopLeft,
                },
            ),
            InputEvent::KeyDown {
                key: egui::Key::Escape,
            },
            release(Pos2::new(0.0, 0.0)),
        ],
    );

    let object = &store.editor().presentation.slides[0].objects[0];
    assert!((object.x - 20.0).abs() < 0.001);
    assert!((object.width - 300.0).abs() < 0.001);
}

#[test]
fn test_double_click_enters_text_editing() {
    let mut store = store_with_text_box();
    let slide_id = store.editor().presentation.slides[0].id;
    let object_id = store.editor().presentation.slides[0].objects[0].id;

    play(
        &mut store,
        &[InputEvent::DoubleClick {
            target: PointerTarget::Object {
                slide_id,
                object_id,
            },
        }],
    );
    assert_eq!(store.editor().editing_text_object_id, Some(object_id));
    assert_eq!(store.editor().interaction_mode(), InteractionMode::EditingText);
}

#[test]
fn test_images_cannot_be_text_edited() {
    let mut store = EditorStore::default();
    store
        .dispatch(Command::AddImageObject(slide_editor::element::ImagePayload {
            src: "data:image/png;base64,AAAA".to_owned(),
            natural_width: 10,
            natural_height: 10,
        }))
        .expect("add image");
    let object_id = store.editor().presentation.slides[0].objects[0].id;

    assert_eq!(store.dispatch(Command::StartEditingText(object_id)), Ok(false));
}

#[test]
fn test_gestures_are_mutually_exclusive() {
    let store = store_with_text_box();
    let editor = store.editor().clone();
    let slide_id = editor.presentation.slides[0].id;
    let object_id = editor.presentation.slides[0].objects[0].id;

    let editing = editor.start_editing_text(object_id);
    let dragging = editing.start_object_drag(slide_id, &[object_id], Pos2::ZERO);
    assert!(dragging.is_dragging());
    assert!(!dragging.is_editing_text());

    let resizing = dragging.start_resize(object_id, ResizeHandle::Top, Pos2::ZERO);
    assert!(resizing.is_resizing());
    assert!(!resizing.is_dragging());

    let editing_again = resizing.start_editing_text(object_id);
    assert!(editing_again.is_editing_text());
    assert!(!editing_again.is_resizing());

    let idle = editing_again.clear_ui_state();
    assert!(!idle.has_active_ui_state());
    assert_eq!(idle.selection, editor.selection);
}

#[test]
fn test_selection_change_ends_gestures() {
    let store = store_with_text_box();
    let editor = store.editor().clone();
    let slide_id = editor.presentation.slides[0].id;
    let object_id = editor.presentation.slides[0].objects[0].id;

    let dragging = editor.start_object_drag(slide_id, &[object_id], Pos2::ZERO);
    let reselected = dragging.select_slide(slide_id);
    assert_eq!(reselected.interaction_mode(), InteractionMode::Idle);
}

#[test]
fn test_canvas_press_clears_object_selection() {
    let mut store = store_with_text_box();
    let slide_id = store.editor().presentation.slides[0].id;

    play(
        &mut store,
        &[press(Pos2::new(900.0, 500.0), PointerTarget::Canvas { slide_id })],
    );
    assert!(store.editor().selected_object_ids().is_empty());
    assert!(store.editor().is_slide_selected(slide_id));
}

#[test]
fn test_slide_rows_reorder_by_drag() {
    let mut store = EditorStore::default();
    store
        .dispatch_all([Command::AddSlide, Command::AddSlide])
        .expect("setup");
    let ids = store.editor().presentation.slide_ids();

    play(
        &mut store,
        &[
            press(
                Pos2::new(40.0, 20.0),
                PointerTarget::SlideRow { slide_id: ids[0] },
            ),
            InputEvent::PointerMove {
                position: Pos2::new(40.0, 250.0),
                slide_target_index: Some(3),
            },
            release(Pos2::new(40.0, 250.0)),
        ],
    );
    assert_eq!(
        store.editor().presentation.slide_ids(),
        vec![ids[1], ids[2], ids[0]]
    );
}
