pub mod click;
pub mod common;
pub mod completion;
pub mod config;
pub mod page;
pub mod result;
pub mod tui;

use std::fmt;

pub use click::ClickViewModel;
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use completion::CompletionViewModel;
pub use config::{ConfigInitViewModel, ConfigViewModel};
pub use page::{PageViewModel, SlotViewModel};
pub use result::CommandResultViewModel;
pub use tui::{BrowseScreenViewModel, StatusBarViewModel};

/// View models that know how to print themselves as plain text.
pub trait CreateView {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a>;
}
