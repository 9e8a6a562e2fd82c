//! Note record: identity, text and background color.

use crate::domain::{Color, NoteId};
use chrono::{DateTime, Utc};
use std::fmt;

/// The kind of error that occurred when constructing a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseNoteErrorKind {
    EmptyText,
}

/// Error returned when constructing an invalid note.
#[derive(Debug, Clone)]
pub struct ParseNoteError {
    kind: ParseNoteErrorKind,
}

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseNoteErrorKind::EmptyText => write!(f, "invalid note: text cannot be empty"),
        }
    }
}

impl std::error::Error for ParseNoteError {}

/// Trims `text`, rejecting empty or whitespace-only input.
fn accept_text(text: &str) -> Result<String, ParseNoteError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseNoteError {
            kind: ParseNoteErrorKind::EmptyText,
        });
    }
    Ok(trimmed.to_string())
}

/// A short text note.
///
/// The ID is fixed at construction. Text is stored trimmed and is never
/// empty.
///
/// # Examples
///
/// ```
/// use memo::domain::{Color, IdGenerator, Note};
///
/// let id = IdGenerator::new().next_id();
/// let note = Note::new(id, "  Buy milk ", Color::LightYellow).unwrap();
/// assert_eq!(note.text(), "Buy milk");
/// assert!(Note::new(id, "   ", Color::Default).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    id: NoteId,
    text: String,
    color: Color,
}

impl Note {
    /// Creates a note.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the text is empty or whitespace-only.
    pub fn new(id: NoteId, text: &str, color: Color) -> Result<Self, ParseNoteError> {
        Ok(Self {
            id,
            text: accept_text(text)?,
            color,
        })
    }

    /// Replaces text and color in place, keeping the ID.
    ///
    /// On error the note is left untouched.
    pub fn revise(&mut self, text: &str, color: Color) -> Result<(), ParseNoteError> {
        self.text = accept_text(text)?;
        self.color = color;
        Ok(())
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// When the note was created, as recorded in its ID.
    pub fn created(&self) -> DateTime<Utc> {
        self.id.timestamp()
    }

    /// Case-insensitive substring match. `needle_lower` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.text.to_lowercase().contains(needle_lower)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.text, self.color)
    }
}
