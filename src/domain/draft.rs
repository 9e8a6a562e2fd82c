//! Uncommitted composition state.

use crate::domain::{Color, NoteId};

/// What the user is composing: the text buffer, the selected color, the
/// note being edited (if any) and the current search query.
///
/// A fresh draft composes a new note with empty text, the default color and
/// no search filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    text: String,
    color: Color,
    editing: Option<NoteId>,
    search: String,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// The note under edit, or `None` when composing a new note.
    pub fn editing(&self) -> Option<NoteId> {
        self.editing
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub(crate) fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub(crate) fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub(crate) fn load(&mut self, id: NoteId, text: &str, color: Color) {
        self.text = text.to_string();
        self.color = color;
        self.editing = Some(id);
    }

    /// Clears text and edit target. Color and search survive.
    pub(crate) fn clear_composition(&mut self) {
        self.text.clear();
        self.editing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_draft_is_empty() {
        let draft = Draft::new();
        assert_eq!(draft.text(), "");
        assert_eq!(draft.color(), Color::Default);
        assert_eq!(draft.editing(), None);
        assert_eq!(draft.search(), "");
        assert!(!draft.is_editing());
    }

    #[test]
    fn load_copies_note_values() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        let mut draft = Draft::new();
        draft.load(id, "Buy milk", Color::LightRed);
        assert_eq!(draft.text(), "Buy milk");
        assert_eq!(draft.color(), Color::LightRed);
        assert_eq!(draft.editing(), Some(id));
    }

    #[test]
    fn clear_composition_keeps_color_and_search() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        let mut draft = Draft::new();
        draft.set_search("milk");
        draft.load(id, "Buy milk", Color::LightBlue);

        draft.clear_composition();

        assert_eq!(draft.text(), "");
        assert_eq!(draft.editing(), None);
        assert_eq!(draft.color(), Color::LightBlue);
        assert_eq!(draft.search(), "milk");
    }
}
