mod actions;
mod editor_state;
mod persistence;
mod store;

pub use editor_state::{Editor, InteractionMode};
pub use persistence::{EditorSnapshot, PersistenceError, PersistenceResult, StatePersistence};
pub use store::EditorStore;
