//! Core building blocks of the value model.
//!
//! ## Core Components
//!
//! ### [`value`] - The Value enum
//!
//! One case per wire variant, immutable once built.
//!
//! ### [`tag`] - Wire type tags
//!
//! The string constants that identify each variant in an envelope.
//!
//! ### [`display`] - Human-readable rendering
//!
//! ### [`custom`] - Collaborator-defined variants
//!
//! ### [`limits`] - Decode limits
pub mod custom;
pub mod display;
pub mod limits;
pub mod tag;
pub mod value;

pub use custom::{Custom, CustomValue};
pub use limits::DecodeLimits;
pub use value::Value;
