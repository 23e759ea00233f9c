//! Storage layer
//!
//! Uses SQLite (embedded) for the single `resolutions` table.

pub mod db;

pub use db::Database;
