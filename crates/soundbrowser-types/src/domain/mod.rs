pub mod catalog;
pub mod layout;
pub mod navigation;
pub mod page;

pub use catalog::*;
pub use layout::*;
pub use navigation::*;
pub use page::*;
