//! Change notification for presentation layers.

use crate::domain::NoteId;

/// A change that has already been applied to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    NoteCreated(NoteId),
    NoteUpdated(NoteId),
    NoteRemoved(NoteId),
    /// Draft text, color or edit target changed.
    DraftChanged,
    SearchChanged,
}

/// Handle returned by [`NotesStore::subscribe`](super::NotesStore::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub(crate) type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Ordered set of listeners, notified in subscription order.
#[derive(Default)]
pub(crate) struct Listeners {
    next: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next);
        self.next += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn emit(&mut self, event: StoreEvent) {
        for (_, listener) in &mut self.entries {
            listener(&event);
        }
    }
}
