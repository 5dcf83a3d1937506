//! Testing infrastructure for soundbrowser integration tests.
//!
//! - `TestWorld`: isolated data directory plus a configured CLI runner
//! - `assertions`: checks over the `--format json` output
//! - `fixtures`: sample catalogs and icon registries

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
