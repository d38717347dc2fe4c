//! Create `routines` table.
//! One row per workout plan; `user_id` comes from the external identity provider.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Routines::Table)
                    .if_not_exists()
                    .col(uuid(Routines::RoutineId).primary_key())
                    .col(uuid(Routines::UserId).not_null())
                    .col(timestamp_with_time_zone(Routines::Date).not_null())
                    .col(text(Routines::Description).not_null())
                    .col(boolean(Routines::IsCompleted).not_null().default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Routines::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Routines { Table, RoutineId, UserId, Date, Description, IsCompleted }
