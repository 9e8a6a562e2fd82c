//! Core types: Note, NoteId (ULID), Color palette, Draft

mod color;
mod draft;
mod note;
mod note_id;

pub use color::{Color, ParseColorError};
pub use draft::Draft;
pub use note::{Note, ParseNoteError};
pub use note_id::{IdGenerator, NoteId, ParseNoteIdError};
