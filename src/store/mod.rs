//! In-memory notes store: the note collection plus the draft being composed.
//!
//! Every operation runs to completion synchronously. Subscribers are
//! notified after each effective mutation; no-ops stay silent.

mod events;
mod removal;


pub use events::{StoreEvent, SubscriptionId};
pub use removal::PendingRemoval;

use std::fmt;

use thiserror::Error;
use tracing::{debug, trace};

use crate::domain::{Color, Draft, IdGenerator, Note, NoteId};
use events::Listeners;

/// Errors returned by store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No note with this ID is in the collection.
    #[error("note not found: {id}")]
    NoteNotFound { id: NoteId },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Outcome of [`NotesStore::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    Created(NoteId),
    Updated(NoteId),
    /// Nothing was written: the draft text was blank or the edit target is gone.
    Ignored,
}

/// Result of resolving a typed ID prefix.
#[derive(Debug, PartialEq, Eq)]
pub enum ResolveResult<'a> {
    /// Exactly one note matched.
    Unique(&'a Note),
    /// Multiple notes matched (ambiguous).
    Ambiguous(Vec<&'a Note>),
    /// No notes matched.
    NotFound,
}

/// Owns the ordered note collection and the draft.
///
/// # Examples
///
/// ```
/// use memo::store::{NotesStore, Submitted};
///
/// let mut store = NotesStore::new();
/// store.set_draft_text("Buy milk");
/// assert!(matches!(store.submit(), Submitted::Created(_)));
///
/// store.set_search("MILK");
/// assert_eq!(store.visible_notes().count(), 1);
/// ```
#[derive(Default)]
pub struct NotesStore {
    notes: Vec<Note>,
    draft: Draft,
    ids: IdGenerator,
    listeners: Listeners,
}

impl NotesStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ===========================================
    // Reads
    // ===========================================

    /// All notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Notes whose text contains the search query, ignoring case, in
    /// collection order.
    ///
    /// Evaluated lazily against the current state on every call.
    pub fn visible_notes(&self) -> impl Iterator<Item = &Note> + '_ {
        let needle = self.draft.search().to_lowercase();
        self.notes
            .iter()
            .filter(move |note| note.matches_lowercase(&needle))
    }

    /// Resolves a (case-insensitive) ID prefix typed by the user.
    pub fn find_by_prefix(&self, prefix: &str) -> ResolveResult<'_> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return ResolveResult::NotFound;
        }

        let mut matches: Vec<&Note> = self
            .notes
            .iter()
            .filter(|n| n.id().starts_with(prefix))
            .collect();

        match matches.len() {
            0 => ResolveResult::NotFound,
            1 => ResolveResult::Unique(matches.remove(0)),
            _ => ResolveResult::Ambiguous(matches),
        }
    }

    // ===========================================
    // Draft mutations
    // ===========================================

    /// Replaces the composition buffer verbatim.
    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.draft.set_text(text);
        self.emit(StoreEvent::DraftChanged);
    }

    pub fn set_draft_color(&mut self, color: Color) {
        self.draft.set_color(color);
        debug!(%color, "draft color selected");
        self.emit(StoreEvent::DraftChanged);
    }

    /// Replaces the search query verbatim; no trimming.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.draft.set_search(query);
        self.emit(StoreEvent::SearchChanged);
    }

    /// Loads a note into the draft for editing.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoteNotFound` if no note has this ID. The draft
    /// is left unchanged.
    pub fn begin_edit(&mut self, id: NoteId) -> StoreResult<()> {
        let note = self.get(id).ok_or(StoreError::NoteNotFound { id })?;
        let (text, color) = (note.text().to_string(), note.color());

        self.draft.load(id, &text, color);
        debug!(%id, "editing note");
        self.emit(StoreEvent::DraftChanged);
        Ok(())
    }

    /// Drops the edit target and clears the draft text.
    pub fn cancel_edit(&mut self) {
        if !self.draft.is_editing() {
            return;
        }
        self.draft.clear_composition();
        self.emit(StoreEvent::DraftChanged);
    }

    // ===========================================
    // Collection mutations
    // ===========================================

    /// Commits the draft.
    ///
    /// Blank text is ignored and leaves the draft as it was. Otherwise the
    /// note under edit is revised in place, or a new note is appended when
    /// nothing is being edited. After an accepted submission the draft text
    /// and edit target are cleared; color and search are kept.
    pub fn submit(&mut self) -> Submitted {
        if self.draft.text().trim().is_empty() {
            trace!("ignoring blank submission");
            return Submitted::Ignored;
        }

        let outcome = match self.draft.editing() {
            Some(id) => self.apply_edit(id),
            None => self.append_draft(),
        };

        self.draft.clear_composition();

        match outcome {
            Submitted::Created(id) => self.emit(StoreEvent::NoteCreated(id)),
            Submitted::Updated(id) => self.emit(StoreEvent::NoteUpdated(id)),
            Submitted::Ignored => self.emit(StoreEvent::DraftChanged),
        }
        outcome
    }

    fn append_draft(&mut self) -> Submitted {
        let id = self.ids.next_id();
        match Note::new(id, self.draft.text(), self.draft.color()) {
            Ok(note) => {
                debug!(%id, color = %note.color(), "note created");
                self.notes.push(note);
                Submitted::Created(id)
            }
            Err(_) => Submitted::Ignored,
        }
    }

    fn apply_edit(&mut self, id: NoteId) -> Submitted {
        let (text, color) = (self.draft.text().to_string(), self.draft.color());
        match self.notes.iter_mut().find(|n| n.id() == id) {
            Some(note) => match note.revise(&text, color) {
                Ok(()) => {
                    debug!(%id, %color, "note updated");
                    Submitted::Updated(id)
                }
                Err(_) => Submitted::Ignored,
            },
            None => {
                debug!(%id, "edit target no longer exists");
                Submitted::Ignored
            }
        }
    }

    /// First phase of deletion. Nothing changes until the returned handle is
    /// confirmed.
    pub fn request_removal(&self, id: NoteId) -> PendingRemoval {
        trace!(%id, "removal requested");
        PendingRemoval::new(id)
    }

    /// Deletes the note named by `pending`, returning it.
    ///
    /// Returns `None` if the note is already gone. Removing the note under
    /// edit abandons the edit.
    pub fn confirm_removal(&mut self, pending: PendingRemoval) -> Option<Note> {
        let id = pending.id();
        let position = self.notes.iter().position(|n| n.id() == id)?;
        let removed = self.notes.remove(position);
        debug!(%id, "note removed");
        self.emit(StoreEvent::NoteRemoved(id));

        if self.draft.editing() == Some(id) {
            self.draft.clear_composition();
            debug!(%id, "abandoned edit of removed note");
            self.emit(StoreEvent::DraftChanged);
        }

        Some(removed)
    }

    /// Discards a pending removal without touching the store.
    pub fn cancel_removal(&self, pending: PendingRemoval) {
        trace!(id = %pending.id(), "removal cancelled");
    }

    // ===========================================
    // Subscriptions
    // ===========================================

    /// Registers a listener called after every effective change.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        self.listeners.add(Box::new(listener))
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    fn emit(&mut self, event: StoreEvent) {
        self.listeners.emit(event);
    }
}

impl fmt::Debug for NotesStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotesStore")
            .field("notes", &self.notes)
            .field("draft", &self.draft)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
