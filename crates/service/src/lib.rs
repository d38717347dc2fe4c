//! Service layer for workout routines, their exercises and recorded sets.
//! - Separates business rules from data access.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Maps every failure to a `ServiceError` the HTTP layer can translate.

pub mod errors;
pub mod pagination;
pub mod db;
pub mod routines;
#[cfg(test)]
pub mod test_support;
