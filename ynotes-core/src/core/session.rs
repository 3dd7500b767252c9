//! The per-session controller over a Y-Notes document.

use crate::{
    Action, Document, Note, NoteId, NotesError, Outcome, Rejection, Result, Storage,
};
use std::path::Path;

/// Where the note form currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    /// The form creates a new note.
    Idle,
    /// The form is pre-filled from, and saves back into, this note.
    Editing(NoteId),
}

/// Initial values for the note form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDefaults {
    pub title: String,
    pub content: String,
}

/// An open notes session.
///
/// `Session` is the primary interface for all document mutations. It loads
/// the [`Document`] from its [`Storage`] once, serves every read from memory,
/// and writes the whole document back before any mutating method returns.
///
/// It also holds the transient UI state: the selected subject and the note
/// being edited, if any. Deleting a note always wins over editing it: the
/// edit is dropped and the session returns to [`EditState::Idle`].
pub struct Session {
    storage: Storage,
    document: Document,
    selected_subject: Option<String>,
    editing: Option<NoteId>,
}

impl Session {
    /// Loads the document from `storage` and selects its first subject.
    ///
    /// Never fails: a missing or corrupt file yields the default document.
    pub fn open(storage: Storage) -> Self {
        let document = storage.load();
        let selected_subject = document.subjects.first().cloned();
        log::debug!(
            "opened session on {} with {} notes",
            storage.path().display(),
            document.notes.len()
        );
        Self {
            storage,
            document,
            selected_subject,
            editing: None,
        }
    }

    /// Shorthand for `Session::open(Storage::new(path))`.
    pub fn open_path<P: AsRef<Path>>(path: P) -> Self {
        Self::open(Storage::new(path))
    }

    /// Returns the in-memory document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Returns the ID of the note being edited, or `None` in create mode.
    pub fn editing(&self) -> Option<&NoteId> {
        self.editing.as_ref()
    }

    pub fn edit_state(&self) -> EditState {
        match &self.editing {
            Some(id) => EditState::Editing(id.clone()),
            None => EditState::Idle,
        }
    }

    pub fn selected_subject(&self) -> Option<&str> {
        self.selected_subject.as_deref()
    }

    /// Values the note form starts with: the edited note's title and content,
    /// or blanks in create mode.
    pub fn form_defaults(&self) -> FormDefaults {
        self.editing
            .as_ref()
            .and_then(|id| self.document.note(id))
            .map(|note| FormDefaults {
                title: note.title.clone(),
                content: note.content.clone(),
            })
            .unwrap_or_default()
    }

    pub fn note(&self, id: &NoteId) -> Option<&Note> {
        self.document.note(id)
    }

    /// Returns the note's current position. Positions shift whenever an
    /// earlier note is deleted, so never hold on to one across a mutation.
    pub fn position_of(&self, id: &NoteId) -> Option<usize> {
        self.document.position_of(id)
    }

    pub fn note_id_at(&self, position: usize) -> Option<&NoteId> {
        self.document.notes.get(position).map(|n| &n.id)
    }

    /// Notes of `subject` with their current positions, newest creation first.
    pub fn list_by_subject(&self, subject: &str) -> Vec<(&Note, usize)> {
        self.document.notes_for_subject(subject)
    }

    /// Resolves a full note ID or a unique prefix of one.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::NoteNotFound`] if nothing matches and
    /// [`NotesError::AmbiguousNote`] if the prefix matches several notes.
    pub fn resolve_note(&self, prefix: &str) -> Result<NoteId> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(NotesError::NoteNotFound(prefix.to_string()));
        }
        if let Some(note) = self.document.notes.iter().find(|n| n.id.as_str() == prefix) {
            return Ok(note.id.clone());
        }

        let mut matches = self
            .document
            .notes
            .iter()
            .filter(|n| n.id.as_str().starts_with(prefix));
        match (matches.next(), matches.next()) {
            (Some(note), None) => Ok(note.id.clone()),
            (Some(_), Some(_)) => Err(NotesError::AmbiguousNote(prefix.to_string())),
            (None, _) => Err(NotesError::NoteNotFound(prefix.to_string())),
        }
    }

    /// Makes `name` the selected subject. Does not affect edit mode.
    pub fn select_subject(&mut self, name: &str) -> Outcome {
        if !self.document.has_subject(name) {
            return Outcome::rejected(Rejection::UnknownSubject);
        }
        self.selected_subject = Some(name.to_string());
        Outcome::applied()
    }

    /// Appends a new subject and persists.
    ///
    /// Empty names and exact duplicates are rejected without touching the file.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::Io`] if the document cannot be saved.
    pub fn add_subject(&mut self, name: &str) -> Result<Outcome> {
        if name.is_empty() {
            return Ok(Outcome::rejected(Rejection::EmptySubjectName));
        }
        if self.document.has_subject(name) {
            return Ok(Outcome::rejected(Rejection::DuplicateSubject));
        }

        self.document.subjects.push(name.to_string());
        self.persist()?;
        log::debug!("added subject '{name}'");
        Ok(Outcome::applied())
    }

    /// Removes a subject and persists.
    ///
    /// Notes filed under it are kept but no longer appear in any subject
    /// listing; adding the subject back makes them visible again. If it was
    /// selected, the first remaining subject becomes selected.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::Io`] if the document cannot be saved.
    pub fn remove_subject(&mut self, name: &str) -> Result<Outcome> {
        let Some(index) = self.document.subjects.iter().position(|s| s == name) else {
            return Ok(Outcome::rejected(Rejection::UnknownSubject));
        };

        self.document.subjects.remove(index);
        if self.selected_subject.as_deref() == Some(name) {
            self.selected_subject = self.document.subjects.first().cloned();
        }
        self.persist()?;
        log::debug!("removed subject '{name}'");
        Ok(Outcome::applied())
    }

    /// Enters edit mode for `id`, replacing any edit already in progress.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::NoteNotFound`] if no note has that ID.
    pub fn begin_edit(&mut self, id: &NoteId) -> Result<Outcome> {
        if self.document.note(id).is_none() {
            return Err(NotesError::NoteNotFound(id.to_string()));
        }
        self.editing = Some(id.clone());
        Ok(Outcome::applied())
    }

    /// Leaves edit mode, discarding the form. Nothing is persisted.
    pub fn cancel_edit(&mut self) -> Outcome {
        let was_editing = self.editing.take().is_some();
        Outcome {
            needs_refresh: was_editing,
            ..Outcome::applied()
        }
    }

    /// Saves the note form.
    ///
    /// In edit mode this overwrites the edited note's title and content,
    /// stamps `last_edited` and returns to [`EditState::Idle`]; `subject` is
    /// ignored. Otherwise a new note is appended under `subject`, which must
    /// exist. An empty title or content is rejected and leaves the edit state
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::Io`] if the document cannot be saved.
    pub fn submit_note(&mut self, subject: &str, title: &str, content: &str) -> Result<Outcome> {
        self.submit(Some(subject), title, content)
    }

    fn submit(&mut self, subject: Option<&str>, title: &str, content: &str) -> Result<Outcome> {
        if title.is_empty() {
            return Ok(Outcome::rejected(Rejection::EmptyTitle));
        }
        if content.is_empty() {
            return Ok(Outcome::rejected(Rejection::EmptyContent));
        }

        if let Some(id) = self.editing.take() {
            let note = self
                .document
                .note_mut(&id)
                .ok_or_else(|| NotesError::NoteNotFound(id.to_string()))?;
            note.revise(title, content);
            self.persist()?;
            log::debug!("updated note {id}");
            return Ok(Outcome::applied());
        }

        let Some(subject) = subject else {
            return Ok(Outcome::rejected(Rejection::NoSubjectSelected));
        };
        if !self.document.has_subject(subject) {
            return Ok(Outcome::rejected(Rejection::UnknownSubject));
        }

        let note = Note::new(subject, title, content);
        log::debug!("created note {} under '{subject}'", note.id);
        self.document.notes.push(note);
        self.persist()?;
        Ok(Outcome::applied())
    }

    /// Deletes `id` and persists. Any edit in progress is abandoned, whichever
    /// note it targeted.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::NoteNotFound`] if no note has that ID, or
    /// [`NotesError::Io`] if the document cannot be saved.
    pub fn delete_note(&mut self, id: &NoteId) -> Result<Outcome> {
        let position = self
            .document
            .position_of(id)
            .ok_or_else(|| NotesError::NoteNotFound(id.to_string()))?;

        self.document.notes.remove(position);
        self.editing = None;
        self.persist()?;
        log::debug!("deleted note {id} at position {position}");
        Ok(Outcome::applied())
    }

    /// Applies one presentation-layer action.
    ///
    /// [`Action::SubmitNote`] files new notes under the selected subject.
    ///
    /// # Errors
    ///
    /// Propagates the errors of the method each action maps to.
    pub fn dispatch(&mut self, action: Action) -> Result<Outcome> {
        log::trace!("dispatch {action:?}");
        match action {
            Action::SelectSubject { name } => Ok(self.select_subject(&name)),
            Action::AddSubject { name } => self.add_subject(&name),
            Action::RemoveSubject { name } => self.remove_subject(&name),
            Action::SubmitNote { title, content } => {
                let subject = self.selected_subject.clone();
                self.submit(subject.as_deref(), &title, &content)
            }
            Action::CancelEdit => Ok(self.cancel_edit()),
            Action::EditNote { note_id } => self.begin_edit(&note_id),
            Action::DeleteNote { note_id } => self.delete_note(&note_id),
        }
    }

    fn persist(&self) -> Result<()> {
        self.storage.save(&self.document)
    }
}
