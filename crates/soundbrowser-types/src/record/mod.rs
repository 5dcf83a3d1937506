pub mod typed;
pub mod value;

pub use typed::TypedRecord;
pub use value::{TypeTag, TypedValue};
