use anyhow::Result;
use once_cell::sync::OnceCell;
use soundbrowser_runtime::{Config, SoundBrowser, config::CONFIG_FILE};
use std::path::{Path, PathBuf};

use crate::types::OutputFormat;

/// Lazily loaded state shared by the handlers of one invocation.
pub struct ExecutionContext {
    data_dir: PathBuf,
    pub format: OutputFormat,
    config: OnceCell<Config>,
    browser: OnceCell<SoundBrowser>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, format: OutputFormat) -> Self {
        Self {
            data_dir,
            format,
            config: OnceCell::new(),
            browser: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Ok(Config::load_from(&self.config_path())?))
    }

    pub fn browser(&self) -> Result<&SoundBrowser> {
        self.browser.get_or_try_init(|| {
            let config = self.config()?;
            Ok(SoundBrowser::load(config, &self.data_dir)?)
        })
    }

    /// Take the browser out of the context, for handlers that need it mutably.
    pub fn into_browser(self) -> Result<SoundBrowser> {
        self.browser()?;
        self.browser
            .into_inner()
            .ok_or_else(|| anyhow::anyhow!("browser was not initialized"))
    }
}
