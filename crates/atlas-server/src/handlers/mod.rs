//! HTTP handlers

pub mod characters;
pub mod health;
pub mod resolutions;
pub mod wishes;

pub use health::health;
