#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod file_handler;
pub mod geometry;
pub mod id_generator;
pub mod input;
pub mod interaction;
pub mod panels;
pub mod renderer;
pub mod selection;
pub mod slide;
pub mod state;
pub mod texture_manager;
pub mod widgets;

pub use app::SlideEditorApp;
pub use command::{Command, CommandError, CommandResult};
pub use config::EditorConfig;
pub use document::Presentation;
pub use element::{ObjectKind, SlideObject};
pub use geometry::Bounds;
pub use id_generator::{ObjectId, PresentationId, SlideId};
pub use input::{InputEvent, InputHandler, PointerTarget, route_event};
pub use interaction::{DragState, ResizeState};
pub use renderer::Renderer;
pub use selection::EditorSelection;
pub use slide::{Slide, SlideBackground};
pub use state::{Editor, EditorSnapshot, EditorStore, InteractionMode};
pub use widgets::resize_handle::ResizeHandle;
