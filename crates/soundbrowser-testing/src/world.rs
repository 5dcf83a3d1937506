//! TestWorld pattern for declarative integration test setup.
//!
//! Each world owns a temporary data directory. Builder methods write the
//! catalog, icon registry and `config.toml` into it; `run` executes the
//! `soundbrowser` binary against it.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::write_key_list;

const SOUNDS_FILE: &str = "sounds.txt";
const ICONS_FILE: &str = "icons.txt";

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use soundbrowser_testing::TestWorld;
/// use soundbrowser_testing::fixtures::numbered_keys;
///
/// let world = TestWorld::new().with_catalog(&numbered_keys(81));
///
/// let result = world.run_json(&["page", "--offset", "1"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
    rows: Option<usize>,
    default_pitch: Option<i64>,
    has_catalog: bool,
    has_icons: bool,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".soundbrowser");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
            rows: None,
            default_pitch: None,
            has_catalog: false,
            has_icons: false,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Use `keys` as the sound catalog.
    pub fn with_catalog(mut self, keys: &[String]) -> Self {
        write_key_list(&self.data_dir.join(SOUNDS_FILE), keys).expect("Failed to write catalog");
        self.has_catalog = true;
        self.write_config();
        self
    }

    /// Use `names` as the icon registry.
    pub fn with_icons(mut self, names: &[String]) -> Self {
        write_key_list(&self.data_dir.join(ICONS_FILE), names).expect("Failed to write icons");
        self.has_icons = true;
        self.write_config();
        self
    }

    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self.write_config();
        self
    }

    pub fn with_default_pitch(mut self, pitch: i64) -> Self {
        self.default_pitch = Some(pitch);
        self.write_config();
        self
    }

    /// Replace `config.toml` with raw content, bypassing the builder.
    pub fn with_raw_config(self, content: &str) -> Self {
        std::fs::write(self.config_path(), content).expect("Failed to write config");
        self
    }

    fn write_config(&self) {
        let mut content = String::new();
        if let Some(rows) = self.rows {
            content.push_str(&format!("[grid]\nrows = {}\n\n", rows));
        }
        if self.has_catalog || self.has_icons {
            content.push_str("[catalog]\n");
            if self.has_catalog {
                content.push_str(&format!("sounds = \"{}\"\n", SOUNDS_FILE));
            }
            if self.has_icons {
                content.push_str(&format!("icons = \"{}\"\n", ICONS_FILE));
            }
            content.push('\n');
        }
        if let Some(pitch) = self.default_pitch {
            content.push_str(&format!("[playback]\ndefault_pitch = {}\n", pitch));
        }
        std::fs::write(self.config_path(), content).expect("Failed to write config");
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("SOUNDBROWSER_PATH").env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the CLI with plain output.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built and the `CARGO_BIN_EXE_` environment variable to be set (which
    /// cargo test does automatically).
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("soundbrowser")
            .map_err(|e| anyhow::anyhow!("Failed to find soundbrowser binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Execute the CLI with `--format json`.
    pub fn run_json(&self, args: &[&str]) -> Result<CliResult> {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        self.run(&full)
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
