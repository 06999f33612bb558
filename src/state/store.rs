use crate::command::{Command, CommandResult};
use crate::config::EditorConfig;

use super::{Editor, EditorSnapshot};

/// Owns the single editor value and replaces it on every dispatched command.
#[derive(Debug, Clone)]
pub struct EditorStore {
    editor: Editor,
    config: EditorConfig,
    revision: u64,
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorStore {
    pub fn new(config: EditorConfig) -> Self {
        Self::with_editor(Editor::new(), config)
    }

    pub fn with_editor(editor: Editor, config: EditorConfig) -> Self {
        Self {
            editor,
            config,
            revision: 0,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Bumped every time a dispatch changes the editor
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply a command. Returns whether the editor changed; a rejected text
    /// edit leaves the editor as it was and reports the validation error.
    pub fn dispatch(&mut self, command: Command) -> CommandResult<bool> {
        let next = command.apply(&self.editor, &self.config).inspect_err(|err| {
            log::warn!("{} rejected: {err}", command.name());
        })?;

        if next.is_unchanged_from(&self.editor) {
            if !command.is_pointer_update() {
                log::debug!("{} had no effect", command.name());
            }
            return Ok(false);
        }

        self.editor = next;
        self.revision += 1;
        Ok(true)
    }

    /// Dispatch commands in order, stopping at the first error.
    pub fn dispatch_all(&mut self, commands: impl IntoIterator<Item = Command>) -> CommandResult<bool> {
        let mut changed = false;
        for command in commands {
            changed |= self.dispatch(command)?;
        }
        Ok(changed)
    }

    /// Swap in a restored editor wholesale
    pub fn replace(&mut self, editor: Editor) {
        self.editor = editor;
        self.revision += 1;
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot::from_editor(&self.editor)
    }
}
