use slide_editor::{Editor, EditorSelection, ObjectId, SlideId};

// Three slides; the first carries two text boxes
fn populated_editor() -> (Editor, Vec<SlideId>, ObjectId, ObjectId) {
    let editor = Editor::new()
        .add_text_object()
        .clear_object_selection()
        .add_text_object()
        .clear_object_selection()
        .add_slide()
        .add_slide();
    let slides = editor.presentation.slide_ids();
    let objects = &editor.presentation.slides[0].objects;
    let (a, b) = (objects[0].id, objects[1].id);
    (editor, slides, a, b)
}

#[test]
fn test_new_editor_selects_the_first_slide() {
    let editor = Editor::new();
    assert_eq!(
        editor.selection,
        Some(EditorSelection::slides([editor.presentation.slides[0].id]))
    );
}

#[test]
fn test_select_slide_replaces_selection() {
    let (editor, slides, _, _) = populated_editor();
    let editor = editor.select_slide(slides[1]);
    assert_eq!(editor.selected_slide_ids(), vec![slides[1]]);
    assert_eq!(editor.selected_slide_id(), Some(slides[1]));
}

#[test]
fn test_unknown_ids_are_ignored() {
    let (editor, slides, a, _) = populated_editor();

    assert!(editor.select_slide(SlideId::new()).is_unchanged_from(&editor));
    assert!(editor.select_object(slides[0], ObjectId::new()).is_unchanged_from(&editor));
    // Object exists, but not on that slide
    assert!(editor.select_object(slides[1], a).is_unchanged_from(&editor));
}

#[test]
fn test_toggle_slides() {
    let (editor, slides, _, _) = populated_editor();
    let editor = editor
        .select_slide(slides[0])
        .toggle_slide_selection(slides[2]);
    assert_eq!(editor.selected_slide_ids(), vec![slides[0], slides[2]]);

    let editor = editor.toggle_slide_selection(slides[0]);
    assert_eq!(editor.selected_slide_ids(), vec![slides[2]]);

    // The last selected slide stays selected
    let after = editor.toggle_slide_selection(slides[2]);
    assert!(after.is_unchanged_from(&editor));
}

#[test]
fn test_toggle_slide_from_object_selection_selects_it() {
    let (editor, slides, a, _) = populated_editor();
    let editor = editor.select_object(slides[0], a).toggle_slide_selection(slides[1]);
    assert_eq!(editor.selection, Some(EditorSelection::slides([slides[1]])));
}

#[test]
fn test_toggle_objects() {
    let (editor, slides, a, b) = populated_editor();
    let editor = editor.select_object(slides[0], a).toggle_object_selection(slides[0], b);
    assert_eq!(editor.selected_object_ids(), vec![a, b]);

    let editor = editor.toggle_object_selection(slides[0], a);
    assert_eq!(editor.selected_object_ids(), vec![b]);

    // Removing the last object falls back to its slide
    let editor = editor.toggle_object_selection(slides[0], b);
    assert_eq!(editor.selection, Some(EditorSelection::slides([slides[0]])));
}

#[test]
fn test_objects_never_span_slides() {
    let (editor, slides, a, _) = populated_editor();
    let moved_on = editor
        .add_text_object()
        .stop_editing_text();
    let other = moved_on.presentation.slides[2].objects[0].id;

    let editor = moved_on
        .select_object(slides[0], a)
        .toggle_object_selection(slides[2], other);
    assert_eq!(
        editor.selection,
        Some(EditorSelection::objects(slides[2], [other]))
    );
}

#[test]
fn test_clear_selection_and_object_selection() {
    let (editor, slides, a, _) = populated_editor();
    let objects = editor.select_object(slides[0], a);

    let back_to_slide = objects.clear_object_selection();
    assert_eq!(back_to_slide.selection, Some(EditorSelection::slides([slides[0]])));

    let cleared = objects.clear_selection();
    assert!(cleared.selection.is_none());
    assert!(cleared.selected_slide_ids().is_empty());
    assert!(cleared.clear_selection().is_unchanged_from(&cleared));
}

#[test]
fn test_selection_queries() {
    let (editor, slides, a, b) = populated_editor();
    let editor = editor.select_object(slides[0], b);

    assert!(editor.is_object_selected(slides[0], b));
    assert!(!editor.is_object_selected(slides[0], a));
    assert!(!editor.is_slide_selected(slides[0]));
    assert_eq!(editor.selected_slide_id(), Some(slides[0]));
    assert_eq!(editor.selected_slide_ids(), vec![slides[0]]);
}

#[test]
fn test_delete_slide_selects_neighbour() {
    let (editor, slides, _, _) = populated_editor();

    let deleted = editor.select_slide(slides[1]).delete_slide();
    assert_eq!(deleted.presentation.slide_ids(), vec![slides[0], slides[2]]);
    assert_eq!(deleted.selected_slide_ids(), vec![slides[2]]);

    let last = editor.select_slide(slides[2]).delete_slide();
    assert_eq!(last.selected_slide_ids(), vec![slides[1]]);
}

#[test]
fn test_deleting_every_slide_clears_selection() {
    let editor = Editor::new();
    let deleted = editor.delete_slide();
    assert!(deleted.presentation.slides.is_empty());
    assert!(deleted.selection.is_none());
}

#[test]
fn test_delete_object_falls_back_to_slide() {
    let (editor, slides, a, b) = populated_editor();
    let deleted = editor
        .select_object(slides[0], a)
        .toggle_object_selection(slides[0], b)
        .delete_object();

    assert!(deleted.presentation.slides[0].objects.is_empty());
    assert_eq!(deleted.selection, Some(EditorSelection::slides([slides[0]])));
}
