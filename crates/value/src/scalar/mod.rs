//! Scalar variants: integers, fixed-point numbers, addresses

pub mod address;
pub mod fixed;
pub mod integer;

pub use address::Address;
pub use fixed::{Fix64, UFix64};
pub use integer::{IntKind, Integer, Word, WordKind};
