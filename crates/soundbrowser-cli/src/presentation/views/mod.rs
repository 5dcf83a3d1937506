mod click;
mod completion;
mod config;
mod page;
pub mod tui;

pub use page::PageView;
