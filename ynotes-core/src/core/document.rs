//! The persisted aggregate of subjects and notes.

use serde::{Deserialize, Serialize};

use crate::core::note::{Note, NoteId};

/// Subjects seeded into a fresh document.
pub const DEFAULT_SUBJECTS: [&str; 2] = ["English", "History"];

/// Top-level JSON structure of the notes file.
///
/// A note's position in `notes` is not its identity; use [`Note::id`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub subjects: Vec<String>,
    pub notes: Vec<Note>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            subjects: DEFAULT_SUBJECTS.iter().map(|s| s.to_string()).collect(),
            notes: Vec::new(),
        }
    }
}

impl Document {
    /// Returns `true` if `name` is a subject (case-sensitive exact match).
    #[must_use]
    pub fn has_subject(&self, name: &str) -> bool {
        self.subjects.iter().any(|s| s == name)
    }

    /// Returns the current position of the note with `id`.
    #[must_use]
    pub fn position_of(&self, id: &NoteId) -> Option<usize> {
        self.notes.iter().position(|n| &n.id == id)
    }

    /// Returns the note with `id`.
    #[must_use]
    pub fn note(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| &n.id == id)
    }

    pub(crate) fn note_mut(&mut self, id: &NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| &n.id == id)
    }

    /// Notes of `subject` paired with their position, newest creation first.
    ///
    /// Ordering uses `created_at` only; an edit never moves a note. Notes
    /// created in the same minute keep the later-added one first. A subject
    /// that is not in `subjects` lists nothing, even if notes still carry it.
    #[must_use]
    pub fn notes_for_subject(&self, subject: &str) -> Vec<(&Note, usize)> {
        if !self.has_subject(subject) {
            return Vec::new();
        }
        let mut listed: Vec<(&Note, usize)> = self
            .notes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.subject == subject)
            .map(|(i, n)| (n, i))
            .collect();
        listed.sort_by(|(a, ia), (b, ib)| b.created_at.cmp(&a.created_at).then(ib.cmp(ia)));
        listed
    }

    /// Notes whose subject no longer exists.
    #[must_use]
    pub fn orphaned_notes(&self) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|n| !self.has_subject(&n.subject))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;

    fn note(subject: &str, title: &str, date: &str) -> Note {
        let mut n = Note::new(subject, title, "body");
        n.created_at = NaiveDateTime::parse_from_str(date, TIMESTAMP_FORMAT).unwrap();
        n
    }

    #[test]
    fn test_default_document() {
        let doc = Document::default();
        assert_eq!(doc.subjects, vec!["English", "History"]);
        assert!(doc.notes.is_empty());
    }

    #[test]
    fn test_has_subject_is_case_sensitive() {
        let doc = Document::default();
        assert!(doc.has_subject("English"));
        assert!(!doc.has_subject("english"));
    }

    #[test]
    fn test_notes_for_subject_newest_first() {
        let mut doc = Document::default();
        doc.notes.push(note("English", "old", "2024-01-01 10:00"));
        doc.notes.push(note("History", "other", "2024-03-01 10:00"));
        doc.notes.push(note("English", "new", "2024-02-01 09:00"));

        let listed = doc.notes_for_subject("English");
        let titles: Vec<&str> = listed.iter().map(|(n, _)| n.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "old"]);
        assert_eq!(listed[0].1, 2);
        assert_eq!(listed[1].1, 0);
    }

    #[test]
    fn test_notes_for_subject_ignores_last_edited() {
        let mut doc = Document::default();
        let mut edited = note("English", "edited", "2024-01-01 10:00");
        edited.last_edited =
            Some(NaiveDateTime::parse_from_str("2024-06-01 10:00", TIMESTAMP_FORMAT).unwrap());
        doc.notes.push(edited);
        doc.notes.push(note("English", "fresh", "2024-02-01 09:00"));

        let listed = doc.notes_for_subject("English");
        assert_eq!(listed[0].0.title, "fresh");
    }

    #[test]
    fn test_same_minute_ties_break_by_position_descending() {
        let mut doc = Document::default();
        doc.notes.push(note("English", "first", "2024-01-01 10:00"));
        doc.notes.push(note("English", "second", "2024-01-01 10:00"));

        let listed = doc.notes_for_subject("English");
        assert_eq!(listed[0].0.title, "second");
        assert_eq!(listed[1].0.title, "first");
    }

    #[test]
    fn test_orphaned_notes() {
        let mut doc = Document::default();
        doc.notes.push(note("Chemistry", "lost", "2024-01-01 10:00"));
        doc.notes.push(note("English", "kept", "2024-01-01 10:00"));

        let orphans = doc.orphaned_notes();
        assert_eq!(orphans.len(), 1);
        assert_eq!(orphans[0].title, "lost");
    }

    #[test]
    fn test_notes_for_removed_subject_are_not_listed() {
        let mut doc = Document::default();
        doc.notes.push(note("Chemistry", "lost", "2024-01-01 10:00"));

        assert!(doc.notes_for_subject("Chemistry").is_empty());

        doc.subjects.push("Chemistry".to_string());
        assert_eq!(doc.notes_for_subject("Chemistry").len(), 1);
    }
}
