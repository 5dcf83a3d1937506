//! Ratatui widgets for the browse screen.
//!
//! Each widget borrows a view model and only maps it onto the buffer.

pub mod detail;
pub mod grid;
pub mod status_bar;

pub use detail::DetailView;
pub use grid::GridView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;
use soundbrowser_engine::AffordanceKind;

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
    }
}

pub(crate) fn kind_to_color(kind: AffordanceKind) -> Color {
    match kind {
        AffordanceKind::Entry => Color::White,
        AffordanceKind::StopSound => Color::Red,
        AffordanceKind::CurrentPage => Color::DarkGray,
        _ => Color::Yellow,
    }
}
