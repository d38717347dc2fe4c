//! Create `routine_exercises` table with FK to `exercises`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoutineExercises::Table)
                    .if_not_exists()
                    .col(uuid(RoutineExercises::RoutineExerciseId).primary_key())
                    .col(uuid(RoutineExercises::ExerciseId).not_null())
                    .col(integer(RoutineExercises::Repetitions).not_null())
                    .col(double(RoutineExercises::Weight).not_null())
                    .col(string_len(RoutineExercises::WeightMeasure, 16).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_routine_exercises_exercise")
                            .from(RoutineExercises::Table, RoutineExercises::ExerciseId)
                            .to(Exercises::Table, Exercises::ExerciseId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(RoutineExercises::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum RoutineExercises { Table, RoutineExerciseId, ExerciseId, Repetitions, Weight, WeightMeasure }

#[derive(DeriveIden)]
enum Exercises { Table, ExerciseId }
