//! The content table: an immutable, ordinally-indexed catalog of note texts.
//!
//! The shipped table format is a TOML map of localized strings keyed
//! `note_001` through `note_NNN`:
//!
//! ```toml
//! [notes]
//! note_001 = "The first note."
//! note_002 = "The second note."
//! ```
//!
//! Keys must be contiguous from `note_001`; an empty or malformed table is
//! a fatal configuration error, since the rotation cannot produce a valid
//! index without one. Consumers look entries up by table index through the
//! [`NoteResolver`] trait rather than touching the table type directly.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Lookup-by-index capability over note texts.
pub trait NoteResolver: Send + Sync {
    /// The text at `index`, or `None` past the end of the table.
    fn resolve(&self, index: usize) -> Option<&str>;

    /// Number of entries. Always greater than zero for a loaded table.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content table is empty")]
    Empty,

    #[error("failed to read content table {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse content table: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("malformed note key {0:?}: expected note_NNN")]
    MalformedKey(String),

    #[error("content table is not contiguous: missing {0}")]
    MissingEntry(String),
}

#[derive(Deserialize)]
struct NotesFile {
    notes: BTreeMap<String, String>,
}

/// Immutable catalog of note texts, loaded once at startup.
#[derive(Debug)]
pub struct ContentTable {
    notes: Vec<String>,
}

impl ContentTable {
    /// Build a table from texts already in ordinal order.
    pub fn from_notes(notes: Vec<String>) -> Result<Self, ContentError> {
        if notes.is_empty() {
            return Err(ContentError::Empty);
        }
        Ok(Self { notes })
    }

    /// Load and validate the TOML table at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse and validate a TOML table.
    pub fn parse(contents: &str) -> Result<Self, ContentError> {
        let file: NotesFile = toml::from_str(contents)?;
        if file.notes.is_empty() {
            return Err(ContentError::Empty);
        }

        // Keys carry the ordinal; reorder by it and demand contiguity from 1.
        let mut by_ordinal = BTreeMap::new();
        for (key, text) in file.notes {
            let ordinal = parse_note_key(&key)?;
            if by_ordinal.insert(ordinal, text).is_some() {
                return Err(ContentError::MalformedKey(key));
            }
        }

        let mut notes = Vec::with_capacity(by_ordinal.len());
        for (expected, (ordinal, text)) in (1u32..).zip(by_ordinal) {
            if ordinal != expected {
                return Err(ContentError::MissingEntry(format!("note_{expected:03}")));
            }
            notes.push(text);
        }

        Ok(Self { notes })
    }
}

/// Extract the 1-based ordinal from a `note_NNN` key.
fn parse_note_key(key: &str) -> Result<u32, ContentError> {
    let digits = key
        .strip_prefix("note_")
        .ok_or_else(|| ContentError::MalformedKey(key.to_string()))?;
    if digits.len() < 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ContentError::MalformedKey(key.to_string()));
    }
    match digits.parse::<u32>() {
        Ok(ordinal) if ordinal > 0 => Ok(ordinal),
        _ => Err(ContentError::MalformedKey(key.to_string())),
    }
}

impl NoteResolver for ContentTable {
    fn resolve(&self, index: usize) -> Option<&str> {
        self.notes.get(index).map(String::as_str)
    }

    fn len(&self) -> usize {
        self.notes.len()
    }
}
