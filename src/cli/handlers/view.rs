//! Read-only views and the search filter: ls, draft, palette, search.

use anyhow::Result;
use std::io::{BufRead, Write};

use super::{one_line, truncate_str};
use crate::cli::FormatArgs;
use crate::cli::output::{DraftListing, NoteListing, Output, OutputFormat};
use crate::cli::session::{Flow, Session};
use crate::domain::Color;

impl<R: BufRead, W: Write> Session<R, W> {
    /// Sets the filter and shows what it leaves visible.
    pub(crate) fn handle_search(&mut self, query: &str) -> Result<Flow> {
        self.store.set_search(query);
        if !self.settings.live {
            self.render_notes(self.settings.format)?;
        }
        Ok(Flow::Continue)
    }

    pub(crate) fn handle_list(&mut self, args: &FormatArgs) -> Result<Flow> {
        self.render_notes(args.format.unwrap_or(self.settings.format))?;
        Ok(Flow::Continue)
    }

    pub(crate) fn handle_draft(&mut self, args: &FormatArgs) -> Result<Flow> {
        let draft = self.store.draft();
        match args.format.unwrap_or(self.settings.format) {
            OutputFormat::Human => {
                let mode = match draft.editing() {
                    Some(id) => format!("editing {}", id),
                    None => "new note".to_string(),
                };
                writeln!(self.output, "Mode:   {}", mode)?;
                writeln!(self.output, "Color:  {}", draft.color())?;
                writeln!(self.output, "Search: {:?}", draft.search())?;
                writeln!(self.output, "Text:   {}", draft.text())?;
            }
            OutputFormat::Json => {
                let output = Output::new(DraftListing::from(draft));
                writeln!(self.output, "{}", serde_json::to_string_pretty(&output)?)?;
            }
        }
        Ok(Flow::Continue)
    }

    pub(crate) fn handle_palette(&mut self) -> Result<Flow> {
        let selected = self.store.draft().color();
        for color in Color::PALETTE {
            let marker = if color == selected { '*' } else { ' ' };
            writeln!(self.output, "{} {:<12}  {}", marker, color.name(), color.hex())?;
        }
        Ok(Flow::Continue)
    }

    /// Prints the visible notes with their 1-based positions.
    pub(crate) fn render_notes(&mut self, format: OutputFormat) -> Result<()> {
        let listings: Vec<NoteListing> = self
            .store
            .visible_notes()
            .enumerate()
            .map(|(i, note)| NoteListing::new(i + 1, note))
            .collect();

        match format {
            OutputFormat::Human => {
                if listings.is_empty() {
                    writeln!(self.output, "No notes found.")?;
                    return Ok(());
                }

                writeln!(self.output, "{:>3}  {:<12}  {}", "#", "Color", "Text")?;
                writeln!(
                    self.output,
                    "{:>3}  {:<12}  {}",
                    "---",
                    "------------",
                    "------------------------------------------------------------"
                )?;
                for listing in &listings {
                    writeln!(
                        self.output,
                        "{:>3}  {:<12}  {}",
                        listing.position,
                        listing.color.name(),
                        truncate_str(&one_line(&listing.text), 60)
                    )?;
                }

                writeln!(self.output)?;
                let search = self.store.draft().search();
                if search.is_empty() {
                    writeln!(self.output, "{} note(s)", listings.len())?;
                } else {
                    writeln!(
                        self.output,
                        "{} of {} note(s) match {:?}",
                        listings.len(),
                        self.store.len(),
                        search
                    )?;
                }
            }
            OutputFormat::Json => {
                let output = Output::new(listings);
                writeln!(self.output, "{}", serde_json::to_string_pretty(&output)?)?;
            }
        }
        Ok(())
    }
}
