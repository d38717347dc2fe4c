use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Routines: listing is per user, sorted by completion then date
        manager
            .create_index(
                Index::create()
                    .name("idx_routines_user_completed_date")
                    .table(Routines::Table)
                    .col(Routines::UserId)
                    .col(Routines::IsCompleted)
                    .col(Routines::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_exercises_routine")
                    .table(Exercises::Table)
                    .col(Exercises::RoutineId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_routine_exercises_exercise")
                    .table(RoutineExercises::Table)
                    .col(RoutineExercises::ExerciseId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_routines_user_completed_date").table(Routines::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_exercises_routine").table(Exercises::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_routine_exercises_exercise").table(RoutineExercises::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Routines { Table, UserId, IsCompleted, Date }

#[derive(DeriveIden)]
enum Exercises { Table, RoutineId }

#[derive(DeriveIden)]
enum RoutineExercises { Table, ExerciseId }
