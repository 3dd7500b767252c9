pub mod render;
pub mod settings;
pub mod shell;

// Re-export core library
pub use ynotes_core::*;

use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::settings::AppSettings;

#[derive(Debug, Parser)]
#[command(name = "ynotes", version, about = "Jot down notes by subject")]
pub struct Cli {
    /// Notes file to use instead of the one in settings.json
    #[arg(long, short = 'f', env = "YNOTES_FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List subjects
    Subjects,
    /// Add a subject
    AddSubject { name: String },
    /// Remove a subject; its notes are kept but hidden
    RemoveSubject { name: String },
    /// List notes of a subject, newest first
    List {
        /// Subject to list (defaults to the first subject)
        #[arg(long, short = 's')]
        subject: Option<String>,
    },
    /// Add a note
    Add {
        /// Subject to file the note under (defaults to the first subject)
        #[arg(long, short = 's')]
        subject: Option<String>,
        #[arg(long, short = 't')]
        title: String,
        #[arg(long, short = 'c')]
        content: String,
    },
    /// Edit a note; omitted fields keep their current value
    Edit {
        /// Note ID or unique prefix
        id: String,
        #[arg(long, short = 't')]
        title: Option<String>,
        #[arg(long, short = 'c')]
        content: Option<String>,
    },
    /// Delete a note
    Delete {
        /// Note ID or unique prefix
        id: String,
    },
    /// Interactive shell with a persistent edit mode
    Shell,
    /// Show the settings, or change the default notes file
    Config {
        #[arg(long)]
        notes_file: Option<PathBuf>,
    },
}

/// Parses arguments, runs one command and maps the result to an exit code.
///
/// Exit codes: `0` success, `1` error, `2` input rejected by validation.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let app_settings = settings::load_settings();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match execute(cli, &app_settings, &mut out) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}

/// Runs `cli` against the notes file chosen by `--file` or `settings`.
///
/// Returns `Ok(false)` when the command was rejected by validation.
///
/// # Errors
///
/// Returns [`NotesError`] for unknown note IDs and failed saves.
pub fn execute<W: Write>(cli: Cli, app_settings: &AppSettings, out: &mut W) -> Result<bool> {
    let path = settings::resolve_notes_file(cli.file.as_deref(), app_settings);
    log::debug!("using notes file {}", path.display());
    let mut session = Session::open_path(&path);

    match cli.command {
        Command::Subjects => {
            render::write_subjects(out, &session)?;
            Ok(true)
        }
        Command::AddSubject { name } => {
            let outcome = session.add_subject(&name)?;
            Ok(render::write_outcome(out, &outcome, &format!("Added subject: {name}"))?)
        }
        Command::RemoveSubject { name } => {
            let outcome = session.remove_subject(&name)?;
            Ok(render::write_outcome(out, &outcome, &format!("Removed subject: {name}"))?)
        }
        Command::List { subject } => {
            if let Some(subject) = subject {
                let outcome = session.select_subject(&subject);
                if !render::write_outcome(out, &outcome, "")? {
                    return Ok(false);
                }
            }
            match session.selected_subject() {
                Some(subject) => render::write_listing(out, &session, subject)?,
                None => writeln!(out, "No subjects yet. Add one with `ynotes add-subject`.")?,
            }
            Ok(true)
        }
        Command::Add {
            subject,
            title,
            content,
        } => {
            if let Some(subject) = subject {
                let outcome = session.select_subject(&subject);
                if !render::write_outcome(out, &outcome, "")? {
                    return Ok(false);
                }
            }
            let outcome = session.dispatch(Action::SubmitNote { title, content })?;
            Ok(render::write_outcome(out, &outcome, "Note saved successfully!")?)
        }
        Command::Edit { id, title, content } => {
            let note_id = session.resolve_note(&id)?;
            session.begin_edit(&note_id)?;
            let defaults = session.form_defaults();
            let outcome = session.dispatch(Action::SubmitNote {
                title: title.unwrap_or(defaults.title),
                content: content.unwrap_or(defaults.content),
            })?;
            Ok(render::write_outcome(out, &outcome, "Note updated successfully!")?)
        }
        Command::Delete { id } => {
            let note_id = session.resolve_note(&id)?;
            let outcome = session.delete_note(&note_id)?;
            Ok(render::write_outcome(out, &outcome, "Note deleted.")?)
        }
        Command::Shell => {
            let stdin = io::stdin();
            shell::run_shell(&mut session, stdin.lock(), out)?;
            Ok(true)
        }
        Command::Config { notes_file } => configure(app_settings, notes_file, out),
    }
}

fn configure<W: Write>(
    app_settings: &AppSettings,
    notes_file: Option<PathBuf>,
    out: &mut W,
) -> Result<bool> {
    match notes_file {
        Some(path) => {
            let updated = AppSettings {
                notes_file: path.to_string_lossy().to_string(),
            };
            settings::save_settings(&updated)?;
            writeln!(out, "Notes file set to {}", updated.notes_file)?;
        }
        None => {
            writeln!(out, "settings: {}", settings::settings_file_path().display())?;
            writeln!(out, "notes file: {}", app_settings.notes_file)?;
        }
    }
    Ok(true)
}
