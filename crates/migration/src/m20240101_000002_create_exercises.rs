//! Create `exercises` table with FK to `routines`.
//!
//! Deletion is restricted: a routine must be emptied before it can go.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Exercises::Table)
                    .if_not_exists()
                    .col(uuid(Exercises::ExerciseId).primary_key())
                    .col(uuid(Exercises::RoutineId).not_null())
                    .col(string_len(Exercises::Name, 128).not_null())
                    .col(string_len(Exercises::Muscle, 64).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exercises_routine")
                            .from(Exercises::Table, Exercises::RoutineId)
                            .to(Routines::Table, Routines::RoutineId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Exercises::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Exercises { Table, ExerciseId, RoutineId, Name, Muscle }

#[derive(DeriveIden)]
enum Routines { Table, RoutineId }
