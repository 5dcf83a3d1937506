use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use soundbrowser_core::DEFAULT_NAMESPACE;
use soundbrowser_types::{DEFAULT_GRID_ROWS, DEFAULT_PITCH, GridLayout, MAX_PITCH, MIN_PITCH};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. SOUNDBROWSER_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.soundbrowser (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("SOUNDBROWSER_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("soundbrowser"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".soundbrowser"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Total grid rows, including the navigation row.
    pub rows: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_ROWS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Sound key list, one per line. Bundled sample when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sounds: Option<PathBuf>,
    /// Icon registry, one name per line, in lookup order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icons: Option<PathBuf>,
    /// Prefix for every carrier key the codec writes.
    pub namespace: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            sounds: None,
            icons: None,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub volume: u32,
    /// Pitch of the first page opened by `browse`.
    pub default_pitch: i64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 10,
            default_pitch: DEFAULT_PITCH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    /// Missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(resolve_workspace_path(None)?.join(CONFIG_FILE))
    }

    pub fn layout(&self) -> Result<GridLayout> {
        Ok(GridLayout::new(self.grid.rows)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.layout()?;

        if !(MIN_PITCH..=MAX_PITCH).contains(&self.playback.default_pitch) {
            return Err(Error::Config(format!(
                "playback.default_pitch must be between {} and {}, got {}",
                MIN_PITCH, MAX_PITCH, self.playback.default_pitch
            )));
        }

        let namespace = &self.catalog.namespace;
        if namespace.is_empty() || namespace.contains(':') {
            return Err(Error::Config(format!(
                "catalog.namespace must be non-empty and contain no ':', got '{}'",
                namespace
            )));
        }

        Ok(())
    }
}
