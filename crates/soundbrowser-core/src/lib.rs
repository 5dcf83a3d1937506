//! Leaf components shared by the page engine and the runtime:
//!
//! - [`codec`]: writes a [`TypedRecord`](soundbrowser_types::TypedRecord) onto a
//!   flat string carrier and reads it back with the original types
//! - [`icon`]: best-guess icon lookup for catalog keys

pub mod codec;
mod error;
pub mod icon;

pub use codec::{DEFAULT_NAMESPACE, StateCodec, parse_integer_lenient};
pub use error::{Error, Result};
pub use icon::{DEFAULT_ICON, ICON_OVERRIDES, IconHeuristic, IconId};
