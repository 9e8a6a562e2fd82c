//! CLI definitions: process arguments and the commands typed inside a session

pub mod config;
pub mod handlers;
pub mod logging;
pub mod output;
pub mod session;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::Color;
use output::OutputFormat;

/// memo - colored sticky notes for the length of a terminal session
#[derive(Parser, Debug)]
#[command(name = "memo", version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Output format for listings (overrides config file)
    #[arg(short = 'f', long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Re-render the visible notes after every change
    #[arg(long)]
    pub live: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

// ===========================================
// Session commands
// ===========================================

/// One line typed at the session prompt.
#[derive(Parser, Debug)]
#[command(
    name = "memo",
    no_binary_name = true,
    disable_version_flag = true,
    override_usage = "<COMMAND> [ARGS]"
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Compose a note from the given text and save it
    #[command(disable_help_flag = true)]
    Add(TextArgs),

    /// Replace the draft text without saving
    #[command(disable_help_flag = true)]
    Write(OptionalTextArgs),

    /// Save the draft (new note, or the note being edited)
    Submit,

    /// Select the draft color by name or hex value
    Color(ColorArgs),

    /// Load a note into the draft for editing
    Edit(NoteArgs),

    /// Stop editing and clear the draft text
    Cancel,

    /// Delete a note after confirmation
    #[command(name = "rm", alias = "delete")]
    Remove(NoteArgs),

    /// Filter the visible notes (no query clears the filter)
    #[command(disable_help_flag = true)]
    Search(OptionalTextArgs),

    /// List the visible notes
    #[command(name = "ls", alias = "list")]
    List(FormatArgs),

    /// Show the draft
    Draft(FormatArgs),

    /// Show the color palette
    Palette,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Free text; the raw remainder of the line is used, not the split words.
#[derive(Parser, Debug)]
pub struct TextArgs {
    /// Note text
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

/// Free text that may be empty.
#[derive(Parser, Debug)]
pub struct OptionalTextArgs {
    /// Text (may be empty)
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

/// Arguments for the `color` command
#[derive(Parser, Debug)]
pub struct ColorArgs {
    /// default, light-red, light-green, light-blue, light-yellow, or a hex value
    pub color: Color,
}

/// Arguments for commands that target a note
#[derive(Parser, Debug)]
pub struct NoteArgs {
    /// Position in the visible list, or an ID prefix
    pub note: String,
}

/// Arguments for read-only views
#[derive(Parser, Debug)]
pub struct FormatArgs {
    /// Output format (defaults to the session format)
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,
}
