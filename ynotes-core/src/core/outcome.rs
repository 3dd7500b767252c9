//! Result types reported back to the presentation layer after every action.
//!
//! Validation problems are not errors in Y-Notes: an empty title or a
//! duplicate subject leaves the document untouched and comes back as
//! [`Status::Rejected`], so the caller can decide whether to show a message.
//! Only failures to persist are reported through [`crate::NotesError`].
//!
//! ## Serialization
//!
//! `Outcome` fields serialize in camelCase (`needsRefresh`) and `Rejection`
//! variants as PascalCase strings:
//!
//! ```rust
//! use ynotes_core::{Outcome, Rejection};
//!
//! let json = serde_json::to_string(&Outcome::rejected(Rejection::EmptyTitle)).unwrap();
//! assert_eq!(json, r#"{"status":{"Rejected":"EmptyTitle"},"needsRefresh":false}"#);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an action was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Rejection {
    /// A subject name was empty.
    EmptySubjectName,
    /// A subject with that exact name already exists.
    DuplicateSubject,
    /// The named subject does not exist.
    UnknownSubject,
    /// A new note was submitted while no subject is selected.
    NoSubjectSelected,
    /// The note form had an empty title.
    EmptyTitle,
    /// The note form had empty content.
    EmptyContent,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::EmptySubjectName => "Subject name cannot be empty",
            Self::DuplicateSubject => "That subject already exists",
            Self::UnknownSubject => "No such subject",
            Self::NoSubjectSelected => "Select a subject first",
            Self::EmptyTitle => "Please enter a title",
            Self::EmptyContent => "Please enter some notes",
        };
        f.write_str(msg)
    }
}

/// Whether an action took effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Applied,
    Rejected(Rejection),
}

/// The outcome of one [`Action`](crate::Action).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub status: Status,

    /// `true` when the visible state changed and the view should be redrawn.
    pub needs_refresh: bool,
}

impl Outcome {
    /// An applied action that changed what the view shows.
    #[must_use]
    pub fn applied() -> Self {
        Self {
            status: Status::Applied,
            needs_refresh: true,
        }
    }

    /// An ignored action; nothing changed.
    #[must_use]
    pub fn rejected(reason: Rejection) -> Self {
        Self {
            status: Status::Rejected(reason),
            needs_refresh: false,
        }
    }

    #[must_use]
    pub fn is_applied(&self) -> bool {
        self.status == Status::Applied
    }

    /// Returns the rejection reason, if any.
    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match self.status {
            Status::Rejected(reason) => Some(reason),
            Status::Applied => None,
        }
    }
}
