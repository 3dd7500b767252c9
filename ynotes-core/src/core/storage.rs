use crate::{Document, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// The notes file on disk.
///
/// Every save replaces the whole file; there are no partial updates.
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the document, falling back to [`Document::default`] when the file
    /// is missing, empty, or not a valid notes document.
    ///
    /// Never fails: an unreadable file is logged and treated as a fresh start.
    pub fn load(&self) -> Document {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                log::log!(
                    read_failure_level(&e),
                    "cannot read notes file {} ({e}), starting fresh",
                    self.path.display()
                );
                return Document::default();
            }
        };

        if content.trim().is_empty() {
            return Document::default();
        }

        match serde_json::from_str(&content) {
            Ok(doc) => doc,
            Err(e) => {
                log::warn!(
                    "notes file {} is corrupt ({e}), starting from defaults",
                    self.path.display()
                );
                Document::default()
            }
        }
    }

    /// Writes `doc` as pretty-printed JSON, replacing the file in one rename.
    ///
    /// The document is written to a temporary file beside the target first, so
    /// a failed save leaves the previous file intact.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NotesError::Io`] if the directory cannot be created or
    /// the file cannot be written or renamed, and [`crate::NotesError::Json`]
    /// if serialisation fails.
    pub fn save(&self, doc: &Document) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let json = serde_json::to_string_pretty(doc)?;
        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        log::debug!(
            "saved {} subjects and {} notes to {}",
            doc.subjects.len(),
            doc.notes.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Level for a failed read: debug for a missing file, warn for anything the
/// next save would overwrite.
fn read_failure_level(e: &io::Error) -> log::Level {
    if e.kind() == io::ErrorKind::NotFound {
        log::Level::Debug
    } else {
        log::Level::Warn
    }
}
