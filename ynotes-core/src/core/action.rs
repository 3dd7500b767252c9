//! User-triggered actions a presentation layer feeds into a [`Session`](crate::Session).

use crate::NoteId;
use serde::{Deserialize, Serialize};

/// A single trigger from the presentation layer.
///
/// Every action is handled by [`Session::dispatch`](crate::Session::dispatch),
/// after which the caller re-reads the session's document and edit state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    /// Switch the subject whose notes are shown and new notes are filed under.
    SelectSubject {
        /// Existing subject name.
        name: String,
    },
    /// Create a new subject.
    AddSubject {
        /// Name of the new subject; empty and duplicate names are rejected.
        name: String,
    },
    /// Remove a subject. Its notes stay in the document but drop out of every view.
    RemoveSubject {
        /// Existing subject name.
        name: String,
    },
    /// Save the note form: updates the note being edited, or creates a new
    /// note under the selected subject.
    SubmitNote {
        title: String,
        content: String,
    },
    /// Leave edit mode without saving.
    CancelEdit,
    /// Enter edit mode for a note.
    EditNote {
        note_id: NoteId,
    },
    /// Delete a note; abandons any edit in progress.
    DeleteNote {
        note_id: NoteId,
    },
}
