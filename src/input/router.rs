use egui::{Key, Modifiers, PointerButton, Pos2};

use super::{InputEvent, PointerTarget};
use crate::command::Command;
use crate::id_generator::ObjectId;
use crate::interaction::DragState;
use crate::selection::EditorSelection;
use crate::state::Editor;

/// Translate one input event into the commands it triggers, given the
/// editor as it is before the event.
pub fn route_event(editor: &Editor, event: &InputEvent) -> Vec<Command> {
    match event {
        InputEvent::PointerDown {
            position,
            button: PointerButton::Primary,
            target,
            modifiers,
        } => route_pointer_down(editor, *position, target, modifiers),
        InputEvent::PointerDown { .. } => Vec::new(),

        InputEvent::PointerMove {
            position,
            slide_target_index,
        } => match &editor.dragging {
            Some(DragState::Objects(_)) => vec![Command::UpdateDrag { mouse: *position }],
            Some(DragState::Slides(_)) => vec![Command::UpdateSlidesDrag {
                mouse: *position,
                target_index: *slide_target_index,
            }],
            None => Vec::new(),
        },

        InputEvent::PointerUp {
            position,
            button: PointerButton::Primary,
        } => {
            if editor.is_dragging() {
                vec![Command::FinishDrag]
            } else if editor.is_resizing() {
                vec![Command::FinishResize { mouse: *position }]
            } else {
                Vec::new()
            }
        }
        InputEvent::PointerUp { .. } => Vec::new(),

        InputEvent::DoubleClick {
            target: PointerTarget::Object { object_id, .. },
        } => vec![Command::StartEditingText(*object_id)],
        InputEvent::DoubleClick { .. } => Vec::new(),

        InputEvent::KeyDown { key: Key::Escape } if editor.is_resizing() => {
            vec![Command::CancelResize]
        }
        InputEvent::KeyDown { .. } => Vec::new(),
    }
}

fn is_multi_select(modifiers: &Modifiers) -> bool {
    modifiers.shift || modifiers.command
}

fn route_pointer_down(
    editor: &Editor,
    position: Pos2,
    target: &PointerTarget,
    modifiers: &Modifiers,
) -> Vec<Command> {
    match *target {
        PointerTarget::ResizeHandle { object_id, handle } => vec![Command::StartResize {
            object_id,
            handle,
            mouse: position,
        }],

        PointerTarget::Object {
            slide_id,
            object_id,
        } => {
            if editor.editing_text_object_id == Some(object_id) {
                // The inline editor owns presses on the object being edited
                return Vec::new();
            }
            if is_multi_select(modifiers) {
                return vec![Command::ToggleObjectSelection {
                    slide_id,
                    object_id,
                }];
            }
            if editor.is_object_selected(slide_id, object_id) {
                return vec![Command::StartObjectDrag {
                    slide_id,
                    object_ids: grabbed_first(object_id, &editor.selected_object_ids()),
                    mouse: position,
                }];
            }
            vec![
                Command::SelectObject {
                    slide_id,
                    object_id,
                },
                Command::StartObjectDrag {
                    slide_id,
                    object_ids: vec![object_id],
                    mouse: position,
                },
            ]
        }

        PointerTarget::SlideRow { slide_id } => {
            if is_multi_select(modifiers) {
                return vec![Command::ToggleSlideSelection(slide_id)];
            }
            if editor.is_slide_selected(slide_id) {
                return vec![Command::StartSlidesDrag {
                    slide_ids: editor.selected_slide_ids(),
                    mouse_y: position.y,
                }];
            }
            vec![
                Command::SelectSlide(slide_id),
                Command::StartSlidesDrag {
                    slide_ids: vec![slide_id],
                    mouse_y: position.y,
                },
            ]
        }

        PointerTarget::Canvas { slide_id } => match &editor.selection {
            Some(EditorSelection::Objects { .. }) => vec![Command::ClearObjectSelection],
            _ if !editor.is_slide_selected(slide_id) => vec![Command::SelectSlide(slide_id)],
            _ => Vec::new(),
        },

        PointerTarget::Nothing => Vec::new(),
    }
}

/// The grabbed object leads the drag so the preview anchors to it
fn grabbed_first(grabbed: ObjectId, selected: &[ObjectId]) -> Vec<ObjectId> {
    let mut ids = Vec::with_capacity(selected.len());
    ids.push(grabbed);
    ids.extend(selected.iter().copied().filter(|id| *id != grabbed));
    ids
}
