//! Atlas Types - Pure type definitions shared by the server and its clients
//!
//! This crate contains only serde data types with no async runtime
//! dependencies. Field names follow the camelCase JSON contract the form
//! frontend speaks.

pub mod character;
pub mod resolution;
pub mod wish;

pub use character::*;
pub use resolution::*;
pub use wish::*;
