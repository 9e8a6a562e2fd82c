//! Two-phase deletion handle.

use crate::domain::NoteId;

/// A deletion awaiting the user's answer.
///
/// Obtained from [`NotesStore::request_removal`](super::NotesStore::request_removal)
/// and consumed by exactly one of `confirm_removal` or `cancel_removal`.
/// Dropping it unanswered abandons the deletion, the same as cancelling.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a pending removal does nothing until confirmed"]
pub struct PendingRemoval {
    id: NoteId,
}

impl PendingRemoval {
    pub(crate) fn new(id: NoteId) -> Self {
        Self { id }
    }

    /// The note this removal targets.
    pub fn id(&self) -> NoteId {
        self.id
    }
}
