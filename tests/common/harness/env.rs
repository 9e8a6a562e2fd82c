//! Isolated test environment with a temporary config directory.

#![allow(dead_code)]

use super::MemoCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment.
///
/// Owns a temp directory holding the config file so tests never read the
/// user's real configuration.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    config_path: PathBuf,
}

impl TestEnv {
    /// Creates a new environment with no config file.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("config.toml");
        Self {
            _temp_dir: temp_dir,
            config_path,
        }
    }

    /// Creates an environment with the given config file contents.
    pub fn with_config(contents: &str) -> Self {
        let env = Self::new();
        std::fs::write(&env.config_path, contents).expect("Failed to write config");
        env
    }

    /// Returns the path of the config file (which may not exist).
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Creates a MemoCommand configured for this test environment.
    pub fn cmd(&self) -> MemoCommand {
        MemoCommand::new().config(&self.config_path)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_has_no_config_by_default() {
        let env = TestEnv::new();
        assert!(!env.config_path().exists());
    }

    #[test]
    fn test_env_writes_config() {
        let env = TestEnv::with_config("prompt = \"> \"\n");
        let contents = std::fs::read_to_string(env.config_path()).unwrap();
        assert!(contents.contains("prompt"));
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.config_path().parent().unwrap().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }
}
