use serde::Serialize;
use soundbrowser_runtime::{ClickOutcome, SinkEvent};

use super::page::PageViewModel;

#[derive(Debug, Clone, Serialize)]
pub struct ClickViewModel {
    #[serde(flatten)]
    pub outcome: ClickOutcome,
    /// What reached the sound sink.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<SinkEvent>,
    /// The page shown after the click; only set when it changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<PageViewModel>,
}
