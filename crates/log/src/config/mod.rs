//! Configuration types and presets
//!
//! - `base`: `Config`, `Format`, `WriterConfig`
//! - `display`: fmt layer toggles
//! - `presets`: development, production, test and environment setups

mod base;
mod display;
mod presets;

pub use base::{Config, Format, WriterConfig};
pub use display::DisplayConfig;
