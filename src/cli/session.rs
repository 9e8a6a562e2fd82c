//! Line-oriented session: the presentation layer over one [`NotesStore`].
//!
//! Each input line is one user event. The delete confirmation reads the
//! following line as its answer.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::cell::Cell;
use std::collections::HashSet;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tracing::debug;

use super::config::Config;
use super::output::OutputFormat;
use super::{Cli, SessionCommand, SessionLine};
use super::handlers::{one_line, truncate_str};
use crate::domain::{Note, NoteId};
use crate::store::{NotesStore, ResolveResult};

const ULID_LEN: usize = 26;

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Session behavior resolved from CLI flags and the config file.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub format: OutputFormat,
    pub prompt: String,
    pub live: bool,
    /// Print the prompt and greeting; off when input is piped.
    pub interactive: bool,
}

impl SessionSettings {
    pub fn resolve(cli: &Cli, config: &Config, interactive: bool) -> Self {
        Self {
            format: config.format(cli.format),
            prompt: config.prompt().to_string(),
            live: config.live(cli.live),
            interactive,
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            prompt: super::config::DEFAULT_PROMPT.to_string(),
            live: false,
            interactive: false,
        }
    }
}

/// One note-taking session. The store lives exactly as long as this value.
pub struct Session<R, W> {
    pub(crate) store: NotesStore,
    pub(crate) input: R,
    pub(crate) output: W,
    pub(crate) settings: SessionSettings,
    changed: Rc<Cell<bool>>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, settings: SessionSettings) -> Self {
        let mut store = NotesStore::new();
        let changed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&changed);
        store.subscribe(move |_| flag.set(true));

        Self {
            store,
            input,
            output,
            settings,
            changed,
        }
    }

    pub fn store(&self) -> &NotesStore {
        &self.store
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads and executes lines until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        if self.settings.interactive {
            writeln!(self.output, "memo {} - type 'help' for commands", env!("CARGO_PKG_VERSION"))?;
        }

        loop {
            if self.settings.interactive {
                write!(self.output, "{}", self.settings.prompt)?;
                self.output.flush()?;
            }

            let Some(line) = self.read_line()? else {
                break;
            };

            match self.execute(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) => writeln!(self.output, "error: {err:#}")?,
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Executes one line.
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        let parsed = match SessionLine::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => parsed,
            Err(err) => {
                // Help requests and usage errors both arrive here.
                write!(self.output, "{}", err.render())?;
                return Ok(Flow::Continue);
            }
        };

        debug!(command = ?parsed.command, "session command");
        self.changed.set(false);

        let rest = rest_of_line(line);
        let flow = match parsed.command {
            SessionCommand::Add(_) => self.handle_add(rest)?,
            SessionCommand::Write(_) => self.handle_write(rest)?,
            SessionCommand::Submit => self.handle_submit()?,
            SessionCommand::Color(args) => self.handle_color(&args)?,
            SessionCommand::Edit(args) => self.handle_edit(&args)?,
            SessionCommand::Cancel => self.handle_cancel()?,
            SessionCommand::Remove(args) => self.handle_remove(&args)?,
            SessionCommand::Search(_) => self.handle_search(rest)?,
            SessionCommand::List(args) => self.handle_list(&args)?,
            SessionCommand::Draft(args) => self.handle_draft(&args)?,
            SessionCommand::Palette => self.handle_palette()?,
            SessionCommand::Quit => Flow::Quit,
        };

        if self.settings.live && self.changed.get() {
            self.render_notes(self.settings.format)?;
        }
        Ok(flow)
    }

    /// Reads one line without its terminator. `None` at end of input.
    pub(crate) fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        let read = self
            .input
            .read_line(&mut buf)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Resolves a note reference: a 1-based position in the visible list,
    /// or an ID prefix.
    pub(crate) fn resolve(&self, reference: &str) -> Result<NoteId> {
        let reference = reference.trim();

        if let Some(position) = parse_position(reference) {
            return self
                .store
                .visible_notes()
                .nth(position.saturating_sub(1))
                .filter(|_| position > 0)
                .map(|note| note.id())
                .with_context(|| format!("no note at position {}", position));
        }

        match self.store.find_by_prefix(reference) {
            ResolveResult::Unique(note) => Ok(note.id()),
            ResolveResult::Ambiguous(notes) => bail!(ambiguous_message(reference, &notes)),
            ResolveResult::NotFound => bail!("note not found: '{}'", reference),
        }
    }
}

/// Short all-digit references are list positions; anything else is an ID prefix.
fn parse_position(reference: &str) -> Option<usize> {
    if reference.is_empty() || reference.len() > 6 {
        return None;
    }
    if !reference.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    reference.parse().ok()
}

/// Lists each candidate under the shortest ID prefix that tells them apart.
fn ambiguous_message(reference: &str, notes: &[&Note]) -> String {
    let ids: Vec<NoteId> = notes.iter().map(|note| note.id()).collect();
    let len = (reference.len().max(1)..ULID_LEN)
        .find(|&len| {
            let prefixes: HashSet<String> = ids.iter().map(|id| id.prefix(len)).collect();
            prefixes.len() == ids.len()
        })
        .unwrap_or(ULID_LEN);

    let mut message = format!(
        "ambiguous note reference '{}' matches {} notes:",
        reference,
        notes.len()
    );
    for note in notes {
        message.push_str(&format!("\n  {}  {}", note.id().prefix(len), truncate_str(&one_line(note.text()), 40)));
    }
    message
}

/// Everything after the command word, spacing preserved.
fn rest_of_line(line: &str) -> &str {
    line.trim_start()
        .split_once(char::is_whitespace)
        .map(|(_, rest)| rest.strip_prefix(' ').unwrap_or(rest))
        .unwrap_or("")
}
