//! Interactive line-oriented front end.
//!
//! The shell keeps one [`Session`] alive for its whole run, so edit mode
//! carries over between lines exactly as it would in a form-based UI:
//! `edit` pre-fills the form, `save` commits it, `cancel` drops it and
//! `delete` always wins.

use crate::render;
use std::io::{BufRead, Write};
use ynotes_core::{Action, NotesError, Result, Session};

pub const HELP: &str = "\
Commands:
  subjects               list subjects (* marks the selected one)
  use SUBJECT            select a subject
  subject+ NAME          add a subject
  subject- NAME          remove a subject (its notes are hidden, not deleted)
  ls                     list notes in the selected subject
  form                   show the note form
  save TITLE | CONTENT   save the form (creates, or updates while editing)
  edit ID                edit a note (ID may be a unique prefix)
  cancel                 leave edit mode without saving
  delete ID              delete a note
  help                   show this help
  quit                   leave the shell
Use \\n inside CONTENT for a line break.";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Subjects,
    Use(String),
    AddSubject(String),
    RemoveSubject(String),
    List,
    Form,
    Save { title: String, content: String },
    Edit(String),
    Cancel,
    Delete(String),
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
///
/// # Errors
///
/// Returns a usage message for unknown commands or missing arguments.
pub fn parse_line(line: &str) -> std::result::Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let require = |what: &str| -> std::result::Result<String, String> {
        if rest.is_empty() {
            Err(format!("usage: {word} {what}"))
        } else {
            Ok(rest.to_string())
        }
    };

    let command = match word {
        "subjects" => ShellCommand::Subjects,
        "use" => ShellCommand::Use(require("SUBJECT")?),
        "subject+" => ShellCommand::AddSubject(require("NAME")?),
        "subject-" => ShellCommand::RemoveSubject(require("NAME")?),
        "ls" | "list" => ShellCommand::List,
        "form" => ShellCommand::Form,
        "save" => {
            let (title, content) = rest
                .split_once('|')
                .ok_or_else(|| "usage: save TITLE | CONTENT".to_string())?;
            ShellCommand::Save {
                title: title.trim().to_string(),
                content: content.trim().replace("\\n", "\n"),
            }
        }
        "edit" => ShellCommand::Edit(require("ID")?),
        "cancel" => ShellCommand::Cancel,
        "delete" | "rm" => ShellCommand::Delete(require("ID")?),
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(format!("unknown command '{other}', try 'help'")),
    };
    Ok(Some(command))
}

/// Runs the shell until `quit` or end of input.
///
/// Lookup problems (unknown or ambiguous IDs) are reported and the shell
/// carries on; a failure to save ends the shell with the error.
///
/// # Errors
///
/// Returns [`NotesError::Io`] if the notes file cannot be written or the
/// output cannot be written to.
pub fn run_shell<R: BufRead, W: Write>(session: &mut Session, input: R, out: &mut W) -> Result<()> {
    writeln!(out, "Y-Notes shell. Type 'help' for commands.")?;
    render::write_form(out, session)?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(ShellCommand::Quit)) => break,
            Ok(Some(command)) => match execute(session, command, out) {
                Ok(()) => {}
                Err(e @ (NotesError::NoteNotFound(_) | NotesError::AmbiguousNote(_))) => {
                    writeln!(out, "{}", e.user_message())?;
                }
                Err(e) => return Err(e),
            },
            Err(usage) => writeln!(out, "{usage}")?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}

fn execute<W: Write>(session: &mut Session, command: ShellCommand, out: &mut W) -> Result<()> {
    let (action, success) = match command {
        ShellCommand::Subjects => {
            render::write_subjects(out, session)?;
            return Ok(());
        }
        ShellCommand::List => {
            list_selected(session, out)?;
            return Ok(());
        }
        ShellCommand::Form => {
            render::write_form(out, session)?;
            return Ok(());
        }
        ShellCommand::Help => {
            writeln!(out, "{HELP}")?;
            return Ok(());
        }
        ShellCommand::Quit => return Ok(()),
        ShellCommand::Use(name) => (Action::SelectSubject { name }, String::new()),
        ShellCommand::AddSubject(name) => {
            let success = format!("Added subject: {name}");
            (Action::AddSubject { name }, success)
        }
        ShellCommand::RemoveSubject(name) => {
            let success = format!("Removed subject: {name}");
            (Action::RemoveSubject { name }, success)
        }
        ShellCommand::Save { title, content } => {
            let success = if session.editing().is_some() {
                "Note updated successfully!"
            } else {
                "Note saved successfully!"
            };
            (Action::SubmitNote { title, content }, success.to_string())
        }
        ShellCommand::Edit(prefix) => {
            let note_id = session.resolve_note(&prefix)?;
            (Action::EditNote { note_id }, String::new())
        }
        ShellCommand::Cancel => (Action::CancelEdit, String::new()),
        ShellCommand::Delete(prefix) => {
            let note_id = session.resolve_note(&prefix)?;
            (Action::DeleteNote { note_id }, "Note deleted.".to_string())
        }
    };

    let edit_form = matches!(action, Action::EditNote { .. } | Action::CancelEdit);
    let outcome = session.dispatch(action)?;
    render::write_outcome(out, &outcome, &success)?;
    if outcome.needs_refresh {
        if edit_form {
            render::write_form(out, session)?;
        } else {
            list_selected(session, out)?;
        }
    }
    Ok(())
}

fn list_selected<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    match session.selected_subject() {
        Some(subject) => render::write_listing(out, session, subject)?,
        None => writeln!(out, "No subject selected")?,
    }
    Ok(())
}
