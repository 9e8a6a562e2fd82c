//! ULID-based note identifier and its monotonic generator.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use ulid::{Generator, Ulid};

/// A unique identifier for notes based on ULID.
///
/// ULIDs are 26-character Crockford Base32 encoded strings made of a
/// 48-bit millisecond timestamp followed by 80 random bits.
///
/// # Examples
///
/// ```
/// use memo::domain::IdGenerator;
///
/// let mut ids = IdGenerator::new();
/// let first = ids.next_id();
/// let second = ids.next_id();
/// assert_ne!(first, second);
/// assert!(first < second);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(Ulid);

impl NoteId {
    /// Returns the first `len` characters of the canonical string form.
    pub fn prefix(&self, len: usize) -> String {
        self.0.to_string().chars().take(len).collect()
    }

    /// Returns true if the canonical form starts with `prefix`, ignoring case.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0
            .to_string()
            .starts_with(prefix.to_ascii_uppercase().as_str())
    }

    /// Returns the timestamp embedded in this ID.
    pub fn timestamp(&self) -> DateTime<Utc> {
        let millis = self.0.timestamp_ms();
        DateTime::from_timestamp_millis(millis as i64).unwrap_or_default()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId(\"{}\")", self.0)
    }
}

/// Error returned when parsing an invalid ULID string.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
    reason: String,
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s)
            .map(NoteId)
            .map_err(|e| ParseNoteIdError {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Hands out strictly increasing note IDs.
///
/// IDs minted within the same millisecond share a timestamp and differ by an
/// incremented random component, so rapid sequential creation never collides.
pub struct IdGenerator {
    inner: Generator,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            inner: Generator::new(),
        }
    }

    /// Returns the next ID.
    pub fn next_id(&mut self) -> NoteId {
        match self.inner.generate() {
            Ok(ulid) => NoteId(ulid),
            Err(err) => {
                // 2^80 IDs in one millisecond; fall back to a fresh random ULID.
                tracing::warn!(error = %err, "monotonic id space exhausted");
                NoteId(Ulid::new())
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdGenerator").finish_non_exhaustive()
    }
}
