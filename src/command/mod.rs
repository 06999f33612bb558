mod commands;

use thiserror::Error;

use crate::error::TextContentError;

pub use commands::Command;

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors that can occur during command execution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Text edits are validated; everything else degrades to a no-op
    #[error("Invalid text: {0}")]
    InvalidText(#[from] TextContentError),
}
