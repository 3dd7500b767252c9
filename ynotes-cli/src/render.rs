//! Plain-text views of a session.

use std::io::{self, Write};
use ynotes_core::{EditState, Outcome, Session, TIMESTAMP_FORMAT};

/// Lists all subjects, marking the selected one and counting visible notes.
pub fn write_subjects<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    writeln!(out, "Subjects")?;
    for subject in &session.document().subjects {
        let marker = if session.selected_subject() == Some(subject.as_str()) {
            '*'
        } else {
            ' '
        };
        let count = session.list_by_subject(subject).len();
        writeln!(out, "{marker} {subject} ({count})")?;
    }
    let orphans = session.document().orphaned_notes().len();
    if orphans > 0 {
        writeln!(out, "  ({orphans} notes filed under removed subjects)")?;
    }
    Ok(())
}

/// Prints the notes of `subject`, newest first.
///
/// Each entry shows its current position and short ID. Positions are only
/// valid until the next delete; the ID is what commands accept.
pub fn write_listing<W: Write>(out: &mut W, session: &Session, subject: &str) -> io::Result<()> {
    writeln!(out, "Notes in {subject}")?;
    let listed = session.list_by_subject(subject);
    if listed.is_empty() {
        writeln!(out, "No notes found for this subject. Add one with `ynotes add`.")?;
        return Ok(());
    }

    for (note, position) in listed {
        write!(
            out,
            "[{position}] {}  {} - {}",
            note.id.short(),
            note.title,
            note.created_at.format(TIMESTAMP_FORMAT)
        )?;
        if let Some(edited) = note.last_edited {
            write!(out, " (edited {})", edited.format(TIMESTAMP_FORMAT))?;
        }
        if session.editing() == Some(&note.id) {
            write!(out, " [editing]")?;
        }
        writeln!(out)?;
        for line in note.content.lines() {
            writeln!(out, "    {line}")?;
        }
    }
    Ok(())
}

/// Describes the note form: its heading and pre-filled values.
pub fn write_form<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    match session.edit_state() {
        EditState::Editing(id) => {
            let defaults = session.form_defaults();
            writeln!(out, "Edit Note {}", id.short())?;
            writeln!(out, "  Title: {}", defaults.title)?;
            writeln!(out, "  Notes: {}", defaults.content)?;
        }
        EditState::Idle => match session.selected_subject() {
            Some(subject) => writeln!(out, "Add a New Note to {subject}")?,
            None => writeln!(out, "No subject selected")?,
        },
    }
    Ok(())
}

/// Prints `success` for an applied outcome, or the rejection reason.
///
/// Returns `true` if the outcome was applied.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome, success: &str) -> io::Result<bool> {
    match outcome.rejection() {
        Some(reason) => {
            writeln!(out, "{reason}")?;
            Ok(false)
        }
        None => {
            if !success.is_empty() {
                writeln!(out, "{success}")?;
            }
            Ok(true)
        }
    }
}
