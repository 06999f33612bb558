use slide_editor::Editor;
use slide_editor::element::factory::{TextParams, create_image_object, create_text_object};
use slide_editor::element::{ImagePayload, ObjectKind};

fn payload(width: u32, height: u32) -> ImagePayload {
    ImagePayload {
        src: "data:image/png;base64,AAAA".to_owned(),
        natural_width: width,
        natural_height: height,
    }
}

#[test]
fn test_default_text_object() {
    let object = create_text_object(TextParams::default());

    assert!((object.x - 20.0).abs() < 0.001);
    assert!((object.y - 20.0).abs() < 0.001);
    assert!((object.width - 300.0).abs() < 0.001);
    assert!((object.height - 80.0).abs() < 0.001);
    assert_eq!(object.z_index, 0);
    assert_eq!(
        object.as_text().map(|text| text.content.as_str()),
        Some("New text")
    );
}

#[test]
fn test_every_object_gets_a_fresh_id() {
    let first = create_text_object(TextParams::default());
    let second = create_text_object(TextParams::default());
    assert_ne!(first.id, second.id);
}

#[test]
fn test_image_is_fitted_into_the_top_right_box() {
    let object = create_image_object(&payload(1200, 600), 3);

    assert!((object.x - 690.0).abs() < 0.001);
    assert!((object.y - 20.0).abs() < 0.001);
    assert!((object.width - 240.0).abs() < 0.001);
    assert!((object.height - 120.0).abs() < 0.001);
    assert_eq!(object.z_index, 3);
    match &object.kind {
        ObjectKind::Image(image) => assert!(image.src.starts_with("data:image/png")),
        ObjectKind::Text(_) => panic!("expected an image"),
    }
}

#[test]
fn test_tall_image_is_limited_by_height() {
    let object = create_image_object(&payload(100, 400), 0);
    assert!((object.height - 160.0).abs() < 0.001);
    assert!((object.width - 40.0).abs() < 0.001);
}

#[test]
fn test_editor_stacks_new_objects_on_top() {
    let editor = Editor::new()
        .add_text_object()
        .clear_object_selection()
        .add_image_object(&payload(10, 10))
        .clear_object_selection()
        .add_text_object();

    let z_indices: Vec<i32> = editor.presentation.slides[0]
        .objects
        .iter()
        .map(|object| object.z_index)
        .collect();
    assert_eq!(z_indices, vec![0, 1, 2]);
}

#[test]
fn test_add_text_object_selects_and_edits_it() {
    let editor = Editor::new().add_text_object();
    let slide = &editor.presentation.slides[0];
    let object_id = slide.objects[0].id;

    assert!(editor.is_object_selected(slide.id, object_id));
    assert_eq!(editor.editing_text_object_id, Some(object_id));
}

#[test]
fn test_add_image_object_selects_without_editing() {
    let editor = Editor::new().add_image_object(&payload(50, 50));
    let slide = &editor.presentation.slides[0];

    assert_eq!(editor.selected_object_ids(), vec![slide.objects[0].id]);
    assert!(!editor.is_editing_text());
}

#[test]
fn test_adding_objects_needs_a_selected_slide() {
    let editor = Editor::new().clear_selection();
    let after = editor.add_text_object();
    assert!(after.is_unchanged_from(&editor));
}
