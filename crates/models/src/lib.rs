//! SeaORM entities for the routine store and the helpers that create rows.
//!
//! Field validation lives next to each entity so every write path shares it.

pub mod errors;
pub mod db;
pub mod routine;
pub mod exercise;
pub mod routine_exercise;

#[cfg(test)]
mod tests;
