use clap::Parser;
use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;
use ynotes_cli::settings::AppSettings;
use ynotes_cli::shell::run_shell;
use ynotes_cli::{execute, Cli, Session, Storage};

fn run_cmd(file: &Path, args: &[&str]) -> (bool, String) {
    let mut argv = vec!["ynotes", "--file", file.to_str().unwrap()];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    let settings = AppSettings {
        notes_file: "/unused/notes.json".to_string(),
    };

    let mut out = Vec::new();
    let applied = execute(cli, &settings, &mut out).unwrap();
    (applied, String::from_utf8(out).unwrap())
}

#[test]
fn add_subject_and_note_then_list() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("notes.json");

    let (ok, text) = run_cmd(&file, &["add-subject", "Math"]);
    assert!(ok);
    assert_eq!(text, "Added subject: Math\n");

    let (ok, text) = run_cmd(&file, &["add", "-s", "Math", "-t", "T1", "-c", "C1"]);
    assert!(ok);
    assert_eq!(text, "Note saved successfully!\n");

    let (_, text) = run_cmd(&file, &["list", "--subject", "Math"]);
    assert!(text.starts_with("Notes in Math\n[0] "));
    assert!(text.contains("T1 - "));

    let doc = Storage::new(&file).load();
    assert_eq!(doc.notes.len(), 1);
    assert!(doc.notes[0].last_edited.is_none());
}

#[test]
fn duplicate_subject_is_rejected() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("notes.json");

    let (ok, text) = run_cmd(&file, &["add-subject", "English"]);
    assert!(!ok);
    assert_eq!(text, "That subject already exists\n");
}

#[test]
fn edit_keeps_omitted_fields() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("notes.json");
    run_cmd(&file, &["add", "-t", "Essay", "-c", "Draft"]);
    let id = Storage::new(&file).load().notes[0].id.clone();

    let (ok, text) = run_cmd(&file, &["edit", id.short(), "--content", "Final"]);

    assert!(ok);
    assert_eq!(text, "Note updated successfully!\n");
    let note = Storage::new(&file).load().notes[0].clone();
    assert_eq!(note.id, id);
    assert_eq!(note.title, "Essay");
    assert_eq!(note.content, "Final");
    assert!(note.last_edited.is_some());
}

#[test]
fn delete_unknown_id_is_an_error() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("notes.json");
    let cli = Cli::try_parse_from(["ynotes", "--file", file.to_str().unwrap(), "delete", "nope"])
        .unwrap();

    let result = execute(cli, &AppSettings::default(), &mut Vec::new());
    assert!(matches!(result, Err(ynotes_cli::NotesError::NoteNotFound(_))));
}

#[test]
fn shell_edit_then_delete_returns_to_create_mode() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("notes.json");
    let mut session = Session::open_path(&file);

    let script = "save Essay | Draft\n";
    let mut out = Vec::new();
    run_shell(&mut session, Cursor::new(script), &mut out).unwrap();
    let id = session.document().notes[0].id.clone();

    let script = format!("edit {0}\ndelete {0}\nform\nquit\nsave Never | reached\n", id.short());
    let mut out = Vec::new();
    run_shell(&mut session, Cursor::new(script), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Edit Note"));
    assert!(text.contains("Note deleted."));
    assert!(text.trim_end().ends_with("Add a New Note to English\n>"));
    assert!(session.editing().is_none());
    assert!(Storage::new(&file).load().notes.is_empty());
}

#[test]
fn shell_reports_bad_input_and_continues() {
    let dir = TempDir::new().unwrap();
    let mut session = Session::open_path(dir.path().join("notes.json"));

    let script = "bogus\nedit zzzz\nsave | no title\nuse History\nsave Rome | Founded\n";
    let mut out = Vec::new();
    run_shell(&mut session, Cursor::new(script), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("unknown command 'bogus'"));
    assert!(text.contains("Note no longer exists"));
    assert!(text.contains("Please enter a title"));
    assert!(text.contains("Note saved successfully!"));
    assert_eq!(session.document().notes.len(), 1);
    assert_eq!(session.document().notes[0].subject, "History");
}
