//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test binaries
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `memo` binary.
///
/// Session input is fed through stdin, one command per line.
pub struct MemoCommand {
    args: Vec<String>,
    lines: Vec<String>,
    config: Option<PathBuf>,
}

impl MemoCommand {
    /// Creates a new command for the `memo` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            lines: Vec::new(),
            config: None,
        }
    }

    /// Points `MEMO_CONFIG` at the given file.
    pub fn config(mut self, path: &Path) -> Self {
        self.config = Some(path.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Appends session input lines.
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.lines
            .extend(lines.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("memo").expect("Failed to find memo binary");
        cmd.args(&self.args);
        cmd.env_remove("RUST_LOG");
        match &self.config {
            Some(path) => cmd.env("MEMO_CONFIG", path),
            None => cmd.env("MEMO_CONFIG", "/nonexistent/memo/config.toml"),
        };

        let mut stdin = self.lines.join("\n");
        if !stdin.is_empty() {
            stdin.push('\n');
        }
        cmd.write_stdin(stdin);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses the last JSON document
    /// on stdout.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        let start = output
            .rfind("\n{")
            .map(|i| i + 1)
            .or_else(|| output.find('{'))
            .expect("No JSON object in output");
        serde_json::from_str(&output[start..]).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `--live` to the command.
    pub fn live(self) -> Self {
        self.args(["--live"])
    }
}

impl Default for MemoCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_runs_binary() {
        MemoCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_output_success() {
        let output = MemoCommand::new().args(["--help"]).output_success();
        assert!(output.contains("memo"));
    }
}
