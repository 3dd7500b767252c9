//! Note and note identifier types.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Wire format of every timestamp in the notes file (local time, minute precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Stable opaque identifier of a note.
///
/// Assigned once when the note is created and never reused, so it stays valid
/// when other notes are deleted (unlike a note's position in the document).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the first eight characters, for compact display.
    #[must_use]
    pub fn short(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A titled block of free text filed under one subject.
///
/// Serialised field names follow the notes file layout: the creation time is
/// stored as `date` and the edit time as `last_edited`, which is omitted
/// entirely for notes that were never edited. Notes written without an `id`
/// receive a fresh one on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default = "NoteId::generate")]
    pub id: NoteId,
    pub subject: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "date", with = "minute_format")]
    pub created_at: NaiveDateTime,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "minute_format::option"
    )]
    pub last_edited: Option<NaiveDateTime>,
}

impl Note {
    /// Creates a never-edited note stamped with the current minute.
    pub fn new(subject: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: NoteId::generate(),
            subject: subject.into(),
            title: title.into(),
            content: content.into(),
            created_at: now_minute(),
            last_edited: None,
        }
    }

    /// Replaces title and content and stamps `last_edited`.
    ///
    /// `created_at` is left alone, so listings keep their creation order.
    pub fn revise(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.title = title.into();
        self.content = content.into();
        self.last_edited = Some(now_minute());
    }
}

/// Returns the local wall-clock time truncated to the minute.
#[must_use]
pub fn now_minute() -> NaiveDateTime {
    let now = chrono::Local::now().naive_local();
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}

mod minute_format {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }

    pub mod option {
        use super::TIMESTAMP_FORMAT;
        use chrono::NaiveDateTime;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            value: &Option<NaiveDateTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(dt) => serializer.serialize_some(&dt.format(TIMESTAMP_FORMAT).to_string()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveDateTime>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| {
                    NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
                        .map_err(serde::de::Error::custom)
                })
                .transpose()
        }
    }
}
