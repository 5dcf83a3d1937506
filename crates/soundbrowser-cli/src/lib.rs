// Layering:
// - handlers build a SoundBrowser through the ExecutionContext, run one
//   operation against it and hand a view model to a renderer
// - presenters turn runtime/engine values into serializable view models
// - views and renderers are the only code that writes to the terminal
//
// Every command except `browse` is stateless: a page is identified entirely
// by (offset, filter, pitch), so `page` and `click` rebuild it from flags.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
