use slide_editor::selection::EditorSelection;
use slide_editor::state::{EditorSnapshot, PersistenceError, StatePersistence};
use slide_editor::{Editor, SlideId};
use tempfile::TempDir;

fn editor_with_content() -> Editor {
    Editor::new()
        .add_text_object()
        .stop_editing_text()
        .add_slide()
        .change_presentation_title("Quarterly review")
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let persistence = StatePersistence::new(dir.path());
    let editor = editor_with_content();

    let path = persistence.save_snapshot(&editor, "deck").expect("save");
    assert!(path.ends_with("deck.json"));

    let restored = persistence.load_snapshot("deck").expect("load").into_editor();
    assert_eq!(*restored.presentation, *editor.presentation);
    assert_eq!(restored.selection, editor.selection);
    assert!(!restored.has_active_ui_state());
}

#[test]
fn test_transient_state_is_not_saved() {
    let editor = Editor::new().add_text_object();
    assert!(editor.is_editing_text());

    let restored = EditorSnapshot::from_editor(&editor).into_editor();
    assert!(!restored.is_editing_text());
    assert_eq!(restored.selection, editor.selection);
}

#[test]
fn test_stale_selection_falls_back_to_first_slide() {
    let editor = editor_with_content();
    let mut snapshot = EditorSnapshot::from_editor(&editor);
    snapshot.selection = Some(EditorSelection::slides([SlideId::new()]));

    let json = snapshot.to_json().expect("serialize");
    let restored = EditorSnapshot::from_json(&json).expect("parse").into_editor();
    assert_eq!(
        restored.selected_slide_ids(),
        vec![restored.presentation.slides[0].id]
    );
}

#[test]
fn test_list_snapshots() {
    let dir = TempDir::new().expect("temp dir");
    let persistence = StatePersistence::new(dir.path().join("nested"));
    assert!(persistence.list_snapshots().expect("list").is_empty());

    let editor = Editor::new();
    persistence.save_snapshot(&editor, "b").expect("save b");
    persistence.save_snapshot(&editor, "a").expect("save a");
    assert_eq!(persistence.list_snapshots().expect("list"), vec!["a", "b"]);
}

#[test]
fn test_load_errors() {
    let dir = TempDir::new().expect("temp dir");
    let persistence = StatePersistence::new(dir.path());

    assert!(matches!(
        persistence.load_snapshot("missing"),
        Err(PersistenceError::ReadError(_))
    ));

    std::fs::write(dir.path().join("broken.json"), "{ not json").expect("write");
    assert!(matches!(
        persistence.load_snapshot("broken"),
        Err(PersistenceError::SerializationError(_))
    ));
}

#[test]
fn test_snapshot_json_shape() {
    let editor = Editor::new();
    let json = EditorSnapshot::from_editor(&editor).to_json().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("json");

    assert_eq!(value["presentation"]["title"], "Untitled Presentation");
    assert_eq!(value["selection"]["type"], "slides");
    assert_eq!(value["presentation"]["slides"][0]["background"]["type"], "color");
}
