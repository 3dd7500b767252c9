//! Error types for the Y-Notes core library.

use thiserror::Error;

/// All errors that can occur within the Y-Notes core library.
///
/// Validation failures (empty titles, duplicate subjects, ...) are not
/// errors; they are reported as [`crate::Outcome`] rejections instead.
#[derive(Debug, Error)]
pub enum NotesError {
    /// Writing the notes file failed. The in-memory document may now differ
    /// from what is on disk.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document could not be serialised to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A note ID (or ID prefix) was requested that does not exist.
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    /// An ID prefix matched more than one note.
    #[error("Ambiguous note id: {0}")]
    AmbiguousNote(String),
}

/// Convenience alias that pins the error type to [`NotesError`].
pub type Result<T> = std::result::Result<T, NotesError>;

impl NotesError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(e) => format!("Failed to save notes: {e}"),
            Self::Json(e) => format!("Data format error: {e}"),
            Self::NoteNotFound(_) => "Note no longer exists".to_string(),
            Self::AmbiguousNote(prefix) => {
                format!("More than one note starts with '{prefix}', use a longer id")
            }
        }
    }
}
