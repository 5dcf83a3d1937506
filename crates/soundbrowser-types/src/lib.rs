pub mod carrier;
pub mod domain;
pub mod error;
pub mod record;
mod util;

pub use carrier::{Carrier, MemoryCarrier};
pub use domain::*;
pub use error::{Error, Result};
pub use record::*;
pub use util::*;
