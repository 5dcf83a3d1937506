//! Browser controller and per-viewer sessions.
//!
//! [`SoundBrowser`] owns the read-only inputs (catalog, icon registry, grid
//! layout, codec, playback settings) and is shared by every viewer. Whatever
//! a single viewer is looking at lives in its own [`ViewerSession`].

use serde::Serialize;
use soundbrowser_core::{IconHeuristic, StateCodec};
use soundbrowser_engine::{Dispatch, PageView, render_page, resolve_carrier};
use soundbrowser_types::{Catalog, GridLayout, Page};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::catalog::{load_catalog, load_icons};
use crate::config::{Config, PlaybackConfig};
use crate::sink::SoundSink;
use crate::Result;

/// The page a viewer has open and the sounds it has started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewerSession {
    view: PageView,
    playing: Vec<String>,
}

impl ViewerSession {
    pub fn view(&self) -> &PageView {
        &self.view
    }

    pub fn page(&self) -> &Page {
        &self.view.page
    }

    /// Sound keys started since the last stop, oldest first.
    pub fn playing(&self) -> &[String] {
        &self.playing
    }
}

/// Result of one click on a grid slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClickOutcome {
    pub slot: usize,
    #[serde(flatten)]
    pub dispatch: Dispatch,
    /// Whether the host should suppress its own handling of the click.
    pub cancelled: bool,
}

#[derive(Debug)]
pub struct SoundBrowser {
    catalog: Arc<Catalog>,
    icons: Arc<IconHeuristic>,
    layout: GridLayout,
    codec: StateCodec,
    playback: PlaybackConfig,
    active: bool,
}

impl SoundBrowser {
    pub fn initialize(
        config: &Config,
        catalog: Arc<Catalog>,
        icons: Arc<IconHeuristic>,
    ) -> Result<Self> {
        config.validate()?;
        let layout = config.layout()?;

        info!(
            entries = catalog.len(),
            icons = icons.len(),
            rows = layout.rows(),
            namespace = %config.catalog.namespace,
            "sound browser initialized"
        );

        Ok(Self {
            catalog,
            icons,
            layout,
            codec: StateCodec::new(config.catalog.namespace.clone()),
            playback: config.playback.clone(),
            active: true,
        })
    }

    /// Load the catalog and icon registry named by `config` and initialize.
    pub fn load(config: &Config, data_dir: &Path) -> Result<Self> {
        let catalog = load_catalog(&config.catalog, data_dir)?;
        let icons = load_icons(&config.catalog, data_dir)?;
        Self::initialize(config, Arc::new(catalog), Arc::new(icons))
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Stop routing clicks. Open sessions keep their last view.
    pub fn shutdown(&mut self) {
        if self.active {
            info!("sound browser shut down");
        }
        self.active = false;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn icons(&self) -> &IconHeuristic {
        &self.icons
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn codec(&self) -> &StateCodec {
        &self.codec
    }

    pub fn playback(&self) -> &PlaybackConfig {
        &self.playback
    }

    pub fn render(&self, page: &Page) -> PageView {
        render_page(page, &self.catalog, &self.icons, self.layout, &self.codec)
    }

    /// First page for `filter` at the configured default pitch.
    pub fn open(&self, filter: &str) -> ViewerSession {
        debug!(filter, "opening browser");
        self.open_at(&Page::first(filter, self.playback.default_pitch))
    }

    /// A fresh session showing `page`.
    pub fn open_at(&self, page: &Page) -> ViewerSession {
        ViewerSession {
            view: self.render(page),
            playing: Vec::new(),
        }
    }

    /// Catalog keys completing `partial`.
    pub fn suggest(&self, partial: &str) -> Vec<&str> {
        self.catalog.suggest(partial)
    }

    /// Route a click on `slot` of the session's current view.
    ///
    /// Empty slots and clicks after [`shutdown`](Self::shutdown) are ignored.
    pub fn handle_click(
        &self,
        session: &mut ViewerSession,
        slot: usize,
        sink: &mut dyn SoundSink,
    ) -> ClickOutcome {
        let dispatch = match session.view.carrier(slot) {
            Some(carrier) if self.active => resolve_carrier(&self.codec, carrier),
            _ => Dispatch::Ignored,
        };

        let dispatch = match dispatch {
            Dispatch::Play { sound_key, pitch } if !self.catalog.contains(&sound_key) => {
                warn!(sound_key = %sound_key, pitch, "refusing to play key outside the catalog");
                Dispatch::Unroutable
            }
            other => other,
        };

        match &dispatch {
            Dispatch::Play { sound_key, pitch } => {
                sink.play(sound_key, *pitch, self.playback.volume);
                session.playing.push(sound_key.clone());
            }
            Dispatch::Navigate { page } => {
                session.view = self.render(page);
            }
            Dispatch::StopAll => {
                sink.stop_all();
                session.playing.clear();
            }
            Dispatch::Ignored | Dispatch::Unroutable => {}
        }

        debug!(slot, ?dispatch, "handled click");
        ClickOutcome {
            slot,
            cancelled: dispatch.is_consumed(),
            dispatch,
        }
    }
}
