//! Shared building blocks for the routine store crates: logging setup and
//! small wire types that do not belong to any single layer.

pub mod types;
pub mod utils;
