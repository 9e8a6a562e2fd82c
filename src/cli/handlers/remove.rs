//! Remove command handler with its confirmation prompt.

use anyhow::Result;
use std::io::{BufRead, Write};

use super::{one_line, truncate_str};
use crate::cli::NoteArgs;
use crate::cli::session::{Flow, Session};

impl<R: BufRead, W: Write> Session<R, W> {
    /// Asks before deleting. Only `y`/`yes` confirms; any other answer, or
    /// end of input, abandons the removal.
    pub(crate) fn handle_remove(&mut self, args: &NoteArgs) -> Result<Flow> {
        let id = self.resolve(&args.note)?;
        let pending = self.store.request_removal(id);

        let preview = self
            .store
            .get(pending.id())
            .map(|note| truncate_str(&one_line(note.text()), 40))
            .unwrap_or_default();
        write!(self.output, "Delete \"{}\"? [y/N] ", preview)?;
        self.output.flush()?;

        let answer = self.read_line()?;
        if !self.settings.interactive {
            // Piped input is not echoed.
            writeln!(self.output)?;
        }

        if answer.as_deref().is_some_and(is_yes) {
            if let Some(note) = self.store.confirm_removal(pending) {
                writeln!(
                    self.output,
                    "Deleted: {}",
                    truncate_str(&one_line(note.text()), 60)
                )?;
            }
        } else {
            self.store.cancel_removal(pending);
        }
        Ok(Flow::Continue)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
