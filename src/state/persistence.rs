use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::Editor;
use crate::document::Presentation;
use crate::selection::EditorSelection;

/// Errors that can occur during state persistence operations
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to serialize state: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to write state: {0}")]
    WriteError(#[from] std::io::Error),

    #[error("Failed to read state file: {0}")]
    ReadError(String),
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// The durable part of the editor: the document and what was selected.
/// Gestures in progress are never saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSnapshot {
    pub presentation: Presentation,
    #[serde(default)]
    pub selection: Option<EditorSelection>,
}

impl EditorSnapshot {
    pub fn from_editor(editor: &Editor) -> Self {
        Self {
            presentation: Presentation::clone(&editor.presentation),
            selection: editor.selection.clone(),
        }
    }

    /// Rebuild an idle editor. A selection pointing at slides or objects
    /// that no longer exist falls back to the first slide.
    pub fn into_editor(self) -> Editor {
        let stored = match self.selection {
            Some(selection) if !selection_is_valid(&self.presentation, &selection) => {
                log::warn!("Stored selection refers to missing items, selecting first slide");
                None
            }
            other => Some(other),
        };

        let mut editor = Editor::with_presentation(self.presentation);
        if let Some(selection) = stored {
            editor.selection = selection;
        }
        editor
    }

    pub fn to_json(&self) -> PersistenceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> PersistenceResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn selection_is_valid(presentation: &Presentation, selection: &EditorSelection) -> bool {
    match selection {
        EditorSelection::Slides { slide_ids } => {
            !slide_ids.is_empty() && slide_ids.iter().all(|id| presentation.contains_slide(*id))
        }
        EditorSelection::Objects {
            slide_id,
            object_ids,
        } => presentation.slide(*slide_id).is_some_and(|slide| {
            !object_ids.is_empty() && object_ids.iter().all(|id| slide.contains_object(*id))
        }),
    }
}

/// Saves and loads named presentation snapshots as JSON files
#[derive(Debug, Clone)]
pub struct StatePersistence {
    /// Directory where state files are stored
    state_dir: PathBuf,
}

impl StatePersistence {
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
        }
    }

    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    fn snapshot_path(&self, name: &str) -> PathBuf {
        self.state_dir.join(format!("{name}.json"))
    }

    /// Save a snapshot of the editor under `name`
    pub fn save_snapshot(&self, editor: &Editor, name: &str) -> PersistenceResult<PathBuf> {
        let path = self.snapshot_path(name);

        // Create state directory if it doesn't exist
        fs::create_dir_all(&self.state_dir)?;

        let json = EditorSnapshot::from_editor(editor).to_json()?;
        fs::write(&path, json)?;
        log::info!("Saved presentation to {}", path.display());

        Ok(path)
    }

    /// Load a snapshot by name
    pub fn load_snapshot(&self, name: &str) -> PersistenceResult<EditorSnapshot> {
        let path = self.snapshot_path(name);
        let json = fs::read_to_string(&path)
            .map_err(|e| PersistenceError::ReadError(format!("{}: {e}", path.display())))?;

        EditorSnapshot::from_json(&json)
    }

    /// Names of every saved snapshot, sorted
    pub fn list_snapshots(&self) -> PersistenceResult<Vec<String>> {
        if !self.state_dir.exists() {
            return Ok(Vec::new());
        }
        let mut names: Vec<String> = fs::read_dir(&self.state_dir)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "json") {
                    path.file_stem().map(|stem| stem.to_string_lossy().into_owned())
                } else {
                    None
                }
            })
            .collect();
        names.sort();
        Ok(names)
    }
}
