use serde::Serialize;

use super::common::StatusLevel;
use super::page::PageViewModel;

/// Everything the browse screen draws in one frame.
#[derive(Debug, Clone, Serialize)]
pub struct BrowseScreenViewModel {
    pub page: PageViewModel,
    pub status_bar: StatusBarViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub page_label: String,
    pub pitch: i64,
    pub now_playing: Option<String>,
    pub status_message: String,
    pub status_level: StatusLevel,
}
