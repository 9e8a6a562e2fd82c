//! End-to-end CLI test suite.
//!
//! Each test drives the `memo` binary through stdin, one session command per
//! line, and asserts on stdout.

mod common;

use common::harness::{MemoCommand, TestEnv};
use predicates::prelude::*;

// ===========================================
// process arguments
// ===========================================
mod args_tests {
    use super::*;

    #[test]
    fn test_version() {
        MemoCommand::new()
            .args(["--version"])
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_completions_bash() {
        MemoCommand::new()
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("memo"));
    }

    #[test]
    fn test_unknown_flag_fails() {
        MemoCommand::new().args(["--bogus"]).assert().failure();
    }

    #[test]
    fn test_live_flag_renders_after_changes() {
        MemoCommand::new()
            .live()
            .lines(["add one", "palette", "add two"])
            .assert()
            .success()
            .stdout(predicate::str::contains("1 note(s)"))
            .stdout(predicate::str::contains("2 note(s)"));
    }

    #[test]
    fn test_empty_input_exits_cleanly() {
        MemoCommand::new()
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }
}

// ===========================================
// add / submit
// ===========================================
mod add_tests {
    use super::*;

    #[test]
    fn test_add_then_ls() {
        MemoCommand::new()
            .lines(["add Buy milk", "add Call mom", "ls"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Added: Buy milk [default]"))
            .stdout(predicate::str::contains("  1  default       Buy milk"))
            .stdout(predicate::str::contains("  2  default       Call mom"))
            .stdout(predicate::str::contains("2 note(s)"));
    }

    #[test]
    fn test_blank_submit_is_silent() {
        MemoCommand::new()
            .lines(["write    ", "submit", "ls"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No notes found."))
            .stdout(predicate::str::contains("Added").not());
    }

    #[test]
    fn test_help_flag_is_note_text() {
        MemoCommand::new()
            .lines(["add -h is a note", "ls"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Added: -h is a note [default]"))
            .stdout(predicate::str::contains("Usage").not());
    }

    #[test]
    fn test_color_applies_to_new_note() {
        MemoCommand::new()
            .lines(["color light-yellow", "add Sticky", "ls"])
            .assert()
            .success()
            .stdout(predicate::str::contains("  1  light-yellow  Sticky"));
    }

    #[test]
    fn test_bad_color_keeps_session_alive() {
        MemoCommand::new()
            .lines(["color magenta", "add after error", "ls"])
            .assert()
            .success()
            .stdout(predicate::str::contains("magenta"))
            .stdout(predicate::str::contains("after error"));
    }
}

// ===========================================
// edit
// ===========================================
mod edit_tests {
    use super::*;

    #[test]
    fn test_edit_replaces_text_in_place() {
        MemoCommand::new()
            .lines([
                "add first",
                "add second",
                "edit 1",
                "color light-blue",
                "write FIRST",
                "submit",
                "ls",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Editing: first [default]"))
            .stdout(predicate::str::contains("Updated: FIRST [light-blue]"))
            .stdout(predicate::str::contains("  1  light-blue    FIRST"))
            .stdout(predicate::str::contains("  2  default       second"));
    }

    #[test]
    fn test_edit_unknown_reference_reports_error() {
        MemoCommand::new()
            .lines(["edit 3"])
            .assert()
            .success()
            .stdout(predicate::str::contains("error: no note at position 3"));
    }
}

// ===========================================
// rm
// ===========================================
mod rm_tests {
    use super::*;

    #[test]
    fn test_rm_confirmed() {
        MemoCommand::new()
            .lines(["add keep", "add drop", "rm 2", "yes", "ls"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Delete \"drop\"? [y/N]"))
            .stdout(predicate::str::contains("Deleted: drop"))
            .stdout(predicate::str::contains("1 note(s)"));
    }

    #[test]
    fn test_rm_declined() {
        MemoCommand::new()
            .lines(["add keep", "rm 1", "no", "ls"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Deleted").not())
            .stdout(predicate::str::contains("  1  default       keep"));
    }

    #[test]
    fn test_rm_of_note_under_edit_resets_draft() {
        MemoCommand::new()
            .lines(["add doomed", "edit 1", "rm 1", "y", "draft"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Mode:   new note"));
    }
}

// ===========================================
// search
// ===========================================
mod search_tests {
    use super::*;

    #[test]
    fn test_search_is_case_insensitive() {
        MemoCommand::new()
            .lines(["add Buy milk", "add Call mom", "search CALL"])
            .assert()
            .success()
            .stdout(predicate::str::contains("  1  default       Call mom"))
            .stdout(predicate::str::contains("1 of 2 note(s) match \"CALL\""));
    }

    #[test]
    fn test_search_for_help_flag_text() {
        MemoCommand::new()
            .lines(["add use --help for usage", "add other", "search --help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("1 of 2 note(s) match \"--help\""));
    }

    #[test]
    fn test_empty_search_restores_everything() {
        MemoCommand::new()
            .lines(["add alpha", "add beta", "search zzz", "search"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No notes found."))
            .stdout(predicate::str::contains("2 note(s)"));
    }
}

// ===========================================
// json output
// ===========================================
mod json_tests {
    use super::*;

    #[test]
    fn test_ls_json_shape() {
        let output: serde_json::Value = MemoCommand::new()
            .format_json()
            .lines(["color light-red", "add Buy milk", "ls"])
            .output_json();

        let notes = output["data"].as_array().expect("data should be an array");
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0]["text"], "Buy milk");
        assert_eq!(notes[0]["color"], "light-red");
        assert_eq!(notes[0]["position"], 1);
        assert_eq!(notes[0]["id"].as_str().unwrap().len(), 26);
    }

    #[test]
    fn test_draft_json() {
        let output: serde_json::Value = MemoCommand::new()
            .lines(["search milk", "write half", "draft --format json"])
            .output_json();

        assert_eq!(output["data"]["text"], "half");
        assert_eq!(output["data"]["search"], "milk");
        assert!(output["data"].get("editing").is_none());
    }
}

// ===========================================
// config
// ===========================================
mod config_tests {
    use super::*;

    #[test]
    fn test_config_format_json() {
        let env = TestEnv::with_config("format = \"json\"\n");
        let output: serde_json::Value = env.cmd().lines(["add from config", "ls"]).output_json();
        assert_eq!(output["data"][0]["text"], "from config");
    }

    #[test]
    fn test_cli_format_overrides_config() {
        let env = TestEnv::with_config("format = \"json\"\n");
        env.cmd()
            .args(["--format", "human"])
            .lines(["add plain", "ls"])
            .assert()
            .success()
            .stdout(predicate::str::contains("1 note(s)"));
    }

    #[test]
    fn test_config_live_renders_after_changes() {
        let env = TestEnv::with_config("live = true\n");
        env.cmd()
            .lines(["add one", "add two"])
            .assert()
            .success()
            .stdout(predicate::str::contains("1 note(s)"))
            .stdout(predicate::str::contains("2 note(s)"));
    }

    #[test]
    fn test_malformed_config_fails() {
        let env = TestEnv::with_config("format = [");
        env.cmd()
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse config file"));
    }
}

// ===========================================
// logging
// ===========================================
mod logging_tests {
    use super::*;

    #[test]
    fn test_debug_logs_go_to_stderr() {
        MemoCommand::new()
            .args(["-vv"])
            .lines(["add logged"])
            .assert()
            .success()
            .stderr(predicate::str::contains("note created"))
            .stdout(predicate::str::contains("note created").not());
    }

    #[test]
    fn test_quiet_by_default() {
        MemoCommand::new()
            .lines(["add quiet"])
            .assert()
            .success()
            .stderr(predicate::str::is_empty());
    }
}
