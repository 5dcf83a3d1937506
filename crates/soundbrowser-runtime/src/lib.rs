pub mod browser;
pub mod catalog;
pub mod config;
mod error;
pub mod sink;

pub use browser::{ClickOutcome, SoundBrowser, ViewerSession};
pub use catalog::{load_catalog, load_icons, parse_key_list};
pub use config::{
    CatalogConfig, Config, GridConfig, PlaybackConfig, resolve_workspace_path,
};
pub use error::{Error, Result};
pub use sink::{RecordingSink, SinkEvent, SoundSink};
