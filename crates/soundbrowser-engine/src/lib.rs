// Engine module - page construction and click routing
// Sits between the leaf codec/icon layer (core) and the runtime controller

pub mod affordance;
pub mod dispatch;
mod error;
pub mod page;

pub use affordance::{Affordance, AffordanceKind};
pub use dispatch::{Dispatch, resolve, resolve_carrier};
pub use error::{Error, Result};
pub use page::{
    GridSlot, PageView, VisibleEntry, build_entry_affordance, build_navigation_affordances,
    compute_max_page, compute_visible_slice, place_affordance, render_page,
};
