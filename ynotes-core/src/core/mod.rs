//! Internal domain modules for the Y-Notes core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod action;
pub mod document;
pub mod error;
pub mod note;
pub mod outcome;
pub mod session;
pub mod storage;

#[doc(inline)]
pub use action::Action;
#[doc(inline)]
pub use document::{Document, DEFAULT_SUBJECTS};
#[doc(inline)]
pub use error::{NotesError, Result};
#[doc(inline)]
pub use note::{Note, NoteId, TIMESTAMP_FORMAT};
#[doc(inline)]
pub use outcome::{Outcome, Rejection, Status};
#[doc(inline)]
pub use session::{EditState, FormDefaults, Session};
#[doc(inline)]
pub use storage::Storage;
