//! Routine module: three-layer architecture (domain, repository, service).
//!
//! Routines own exercises, exercises own routine-exercise entries. All writes
//! and reads of that hierarchy go through [`RoutineService`].

pub mod domain;
pub mod repository;
pub mod service;

pub use repository::{RoutineRepository, SeaOrmRoutineRepository};
pub use service::RoutineService;
