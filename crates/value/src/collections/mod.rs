//! Container variants
//!
//! `Array` is a plain `Vec<Value>` and `Optional` an `Option<Box<Value>>`;
//! only the dictionary needs its own type.

pub mod dictionary;

pub use dictionary::{Dictionary, KeyValuePair};
