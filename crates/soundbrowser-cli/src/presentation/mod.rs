//! Output layer: view models, their plain-text views, and the renderers that
//! print them (console) or drive them interactively (TUI).

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{CommandResultViewModel, CreateView};
