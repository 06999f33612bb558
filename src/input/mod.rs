use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rangef, Rect};

use crate::config::EditorConfig;
use crate::geometry::SlideViewport;
use crate::geometry::hit_testing::{handle_at, object_at, slide_drop_index};
use crate::id_generator::{ObjectId, SlideId};
use crate::selection::EditorSelection;
use crate::state::Editor;
use crate::widgets::resize_handle::ResizeHandle;

mod router;
pub use router::route_event;

/// What the pointer was over when a button went down
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerTarget {
    /// A row of the slide list
    SlideRow { slide_id: SlideId },
    /// An object on the canvas
    Object { slide_id: SlideId, object_id: ObjectId },
    /// A resize handle of a selected object
    ResizeHandle {
        object_id: ObjectId,
        handle: ResizeHandle,
    },
    /// Empty canvas area of a slide
    Canvas { slide_id: SlideId },
    Nothing,
}

/// Input the editor reacts to. Canvas positions are in slide coordinates;
/// slide-list positions are in screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown {
        position: Pos2,
        button: PointerButton,
        target: PointerTarget,
        modifiers: Modifiers,
    },
    PointerMove {
        position: Pos2,
        /// Drop index under the pointer while reordering slides
        slide_target_index: Option<i32>,
    },
    PointerUp {
        position: Pos2,
        button: PointerButton,
    },
    DoubleClick {
        target: PointerTarget,
    },
    KeyDown {
        key: Key,
    },
}

/// Where the canvas was drawn this frame
#[derive(Debug, Clone, Copy)]
pub struct CanvasLayout {
    pub rect: Rect,
    pub viewport: SlideViewport,
    pub slide_id: SlideId,
}

/// Turns raw egui input into [`InputEvent`]s using the layout the panels
/// recorded while drawing.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas: Option<CanvasLayout>,
    slide_list_rect: Option<Rect>,
    slide_rows: Vec<(SlideId, Rect)>,
    /// Areas owned by other widgets (e.g. the text editor) this frame
    blocked: Vec<Rect>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget last frame's layout before the panels draw again
    pub fn begin_frame(&mut self) {
        self.canvas = None;
        self.slide_list_rect = None;
        self.slide_rows.clear();
        self.blocked.clear();
    }

    pub fn set_canvas(&mut self, layout: CanvasLayout) {
        self.canvas = Some(layout);
    }

    pub fn canvas(&self) -> Option<&CanvasLayout> {
        self.canvas.as_ref()
    }

    pub fn set_slide_list(&mut self, rect: Rect, rows: Vec<(SlideId, Rect)>) {
        self.slide_list_rect = Some(rect);
        self.slide_rows = rows;
    }

    pub fn block(&mut self, rect: Rect) {
        self.blocked.push(rect);
    }

    /// Drop index for a screen-space `y` over the recorded slide rows
    pub fn slide_target_index(&self, y: f32) -> Option<i32> {
        let rows: Vec<Rangef> = self.slide_rows.iter().map(|(_, rect)| rect.y_range()).collect();
        slide_drop_index(&rows, y)
    }

    /// Resolve what lies under a screen position
    pub fn target_at(&self, editor: &Editor, config: &EditorConfig, screen: Pos2) -> PointerTarget {
        if self.blocked.iter().any(|rect| rect.contains(screen)) {
            return PointerTarget::Nothing;
        }

        if self.slide_list_rect.is_some_and(|rect| rect.contains(screen)) {
            return self
                .slide_rows
                .iter()
                .find(|(_, rect)| rect.contains(screen))
                .map_or(PointerTarget::Nothing, |(slide_id, _)| PointerTarget::SlideRow {
                    slide_id: *slide_id,
                });
        }

        let Some(canvas) = self.canvas.filter(|canvas| canvas.rect.contains(screen)) else {
            return PointerTarget::Nothing;
        };
        let Some(slide) = editor.presentation.slide(canvas.slide_id) else {
            return PointerTarget::Nothing;
        };
        let point = canvas.viewport.to_slide(screen);

        if let Some(EditorSelection::Objects {
            slide_id,
            object_ids,
        }) = &editor.selection
        {
            if *slide_id == canvas.slide_id {
                let radius = config.handle_radius / canvas.viewport.scale;
                for object_id in object_ids {
                    let Some(object) = slide.object(*object_id) else {
                        continue;
                    };
                    if let Some(handle) = handle_at(&object.bounds(), point, radius) {
                        return PointerTarget::ResizeHandle {
                            object_id: *object_id,
                            handle,
                        };
                    }
                }
            }
        }

        match object_at(slide, point) {
            Some(object_id) => PointerTarget::Object {
                slide_id: canvas.slide_id,
                object_id,
            },
            None => PointerTarget::Canvas {
                slide_id: canvas.slide_id,
            },
        }
    }

    /// Position in the space the target lives in
    fn event_position(&self, target: &PointerTarget, screen: Pos2) -> Pos2 {
        match (target, &self.canvas) {
            (PointerTarget::SlideRow { .. } | PointerTarget::Nothing, _) | (_, None) => screen,
            (_, Some(canvas)) => canvas.viewport.to_slide(screen),
        }
    }

    /// Position for moves and releases, which follow the active gesture
    fn gesture_position(&self, editor: &Editor, screen: Pos2) -> Pos2 {
        match (&editor.dragging, &self.canvas) {
            (Some(drag), _) if drag.is_slides_drag() => screen,
            (_, Some(canvas)) => canvas.viewport.to_slide(screen),
            (_, None) => screen,
        }
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(
        &mut self,
        ctx: &Context,
        editor: &Editor,
        config: &EditorConfig,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();

        let (pointer_pos, pressed, released, double_clicked, modifiers, escape) = ctx.input(|input| {
            (
                input.pointer.latest_pos(),
                input.pointer.primary_pressed(),
                input.pointer.primary_released(),
                input.pointer.button_double_clicked(PointerButton::Primary),
                input.modifiers,
                input.key_pressed(Key::Escape),
            )
        });

        if let Some(screen) = pointer_pos {
            if pressed {
                let target = self.target_at(editor, config, screen);
                events.push(InputEvent::PointerDown {
                    position: self.event_position(&target, screen),
                    button: PointerButton::Primary,
                    target,
                    modifiers,
                });
            }

            if double_clicked {
                let target = self.target_at(editor, config, screen);
                events.push(InputEvent::DoubleClick { target });
            }

            if Some(screen) != self.last_pointer_pos && editor.is_dragging() {
                let slide_target_index = editor
                    .dragging
                    .as_ref()
                    .filter(|drag| drag.is_slides_drag())
                    .and_then(|_| self.slide_target_index(screen.y));
                events.push(InputEvent::PointerMove {
                    position: self.gesture_position(editor, screen),
                    slide_target_index,
                });
            }

            if released {
                events.push(InputEvent::PointerUp {
                    position: self.gesture_position(editor, screen),
                    button: PointerButton::Primary,
                });
            }

            self.last_pointer_pos = Some(screen);
        }

        if escape {
            events.push(InputEvent::KeyDown { key: Key::Escape });
        }

        events
    }
}
