//! Migrator registering the routine store tables in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_routines;
mod m20240101_000002_create_exercises;
mod m20240101_000003_create_routine_exercises;
mod m20240101_000004_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_routines::Migration),
            Box::new(m20240101_000002_create_exercises::Migration),
            Box::new(m20240101_000003_create_routine_exercises::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000004_add_indexes::Migration),
        ]
    }
}
