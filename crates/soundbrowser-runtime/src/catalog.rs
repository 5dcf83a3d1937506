//! Catalog and icon registry loading.
//!
//! Both are plain key lists, one per line; blank lines and `#` comments are
//! skipped. When no path is configured the bundled samples are used.

use soundbrowser_core::IconHeuristic;
use soundbrowser_types::Catalog;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::CatalogConfig;
use crate::{Error, Result};

const BUNDLED_SOUNDS: &str = include_str!("../data/sounds.txt");
const BUNDLED_ICONS: &str = include_str!("../data/icons.txt");

pub fn parse_key_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Relative paths are resolved against the workspace data directory.
fn resolve_path(path: &Path, data_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        data_dir.join(path)
    }
}

fn read_key_list(configured: Option<&Path>, data_dir: &Path, bundled: &str) -> Result<Vec<String>> {
    match configured {
        Some(path) => {
            let path = resolve_path(path, data_dir);
            let content = std::fs::read_to_string(&path).map_err(|source| Error::CatalogRead {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), "loaded key list");
            Ok(parse_key_list(&content))
        }
        None => Ok(parse_key_list(bundled)),
    }
}

pub fn load_catalog(config: &CatalogConfig, data_dir: &Path) -> Result<Catalog> {
    let keys = read_key_list(config.sounds.as_deref(), data_dir, BUNDLED_SOUNDS)?;
    let total = keys.len();
    let catalog = Catalog::from_keys(keys);
    if catalog.len() != total {
        info!(
            duplicates = total - catalog.len(),
            "dropped duplicate catalog keys"
        );
    }
    Ok(catalog)
}

pub fn load_icons(config: &CatalogConfig, data_dir: &Path) -> Result<IconHeuristic> {
    let names = read_key_list(config.icons.as_deref(), data_dir, BUNDLED_ICONS)?;
    Ok(IconHeuristic::new(names))
}
