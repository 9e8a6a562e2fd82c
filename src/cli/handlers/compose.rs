//! Draft handlers: add, write, submit, color, edit, cancel.

use anyhow::Result;
use std::io::{BufRead, Write};

use super::{one_line, truncate_str};
use crate::cli::session::{Flow, Session};
use crate::cli::{ColorArgs, NoteArgs};
use crate::store::Submitted;

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn handle_add(&mut self, text: &str) -> Result<Flow> {
        self.store.set_draft_text(text);
        self.handle_submit()
    }

    pub(crate) fn handle_write(&mut self, text: &str) -> Result<Flow> {
        self.store.set_draft_text(text);
        Ok(Flow::Continue)
    }

    /// Blank drafts are dropped without a message.
    pub(crate) fn handle_submit(&mut self) -> Result<Flow> {
        let (verb, id) = match self.store.submit() {
            Submitted::Created(id) => ("Added", id),
            Submitted::Updated(id) => ("Updated", id),
            Submitted::Ignored => return Ok(Flow::Continue),
        };

        if let Some(note) = self.store.get(id) {
            writeln!(
                self.output,
                "{}: {} [{}]",
                verb,
                truncate_str(&one_line(note.text()), 60),
                note.color()
            )?;
        }
        Ok(Flow::Continue)
    }

    pub(crate) fn handle_color(&mut self, args: &ColorArgs) -> Result<Flow> {
        self.store.set_draft_color(args.color);
        writeln!(self.output, "Color: {} ({})", args.color, args.color.hex())?;
        Ok(Flow::Continue)
    }

    pub(crate) fn handle_edit(&mut self, args: &NoteArgs) -> Result<Flow> {
        let id = self.resolve(&args.note)?;
        self.store.begin_edit(id)?;

        let draft = self.store.draft();
        writeln!(
            self.output,
            "Editing: {} [{}]",
            truncate_str(&one_line(draft.text()), 60),
            draft.color()
        )?;
        Ok(Flow::Continue)
    }

    pub(crate) fn handle_cancel(&mut self) -> Result<Flow> {
        if self.store.draft().is_editing() {
            self.store.cancel_edit();
            writeln!(self.output, "Edit cancelled.")?;
        }
        Ok(Flow::Continue)
    }
}
