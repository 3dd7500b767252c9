//! Core library for Y-Notes — a local-first note-taking application.
//!
//! The primary entry point is [`Session`], which owns the in-memory
//! [`Document`] loaded from a [`Storage`] file. All document mutations go
//! through `Session` methods (or [`Session::dispatch`]) and are written back
//! to disk before the call returns.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use crate::core::{
    action::Action,
    document::{Document, DEFAULT_SUBJECTS},
    error::{NotesError, Result},
    note::{Note, NoteId, TIMESTAMP_FORMAT},
    outcome::{Outcome, Rejection, Status},
    session::{EditState, FormDefaults, Session},
    storage::Storage,
};
