//! Crate-internal prelude.
//!
//! Derive macros from derive_more used by the value types.

pub use derive_more::Display;
