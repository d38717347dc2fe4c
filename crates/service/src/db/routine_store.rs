//! SeaORM queries behind the routine repository.
//!
//! Multi-step operations run inside one transaction so a failure part-way
//! leaves the store untouched.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::routines::domain::{CascadeReport, ExerciseEntries, RoutineExercises, RoutinePage};
use models::exercise::{self, Entity as ExerciseEntity};
use models::routine::{self, Entity as RoutineEntity};
use models::routine_exercise::{self, Entity as RoutineExerciseEntity};

/// Insert a routine for `user_id`.
pub async fn create_routine(db: &DatabaseConnection, user_id: Uuid, description: &str, is_completed: bool) -> Result<routine::Model, ServiceError> {
    Ok(routine::create(db, user_id, description, is_completed).await?)
}

/// One page of the user's routines plus the user's total count, read in a single transaction.
pub async fn list_routines(db: &DatabaseConnection, user_id: Uuid, pagination: Pagination) -> Result<RoutinePage, ServiceError> {
    let (page_idx, per_page) = pagination.normalize();
    let txn = db.begin().await?;
    let paginator = RoutineEntity::find()
        .filter(routine::Column::UserId.eq(user_id))
        .order_by_asc(routine::Column::IsCompleted)
        .order_by_desc(routine::Column::Date)
        .order_by_asc(routine::Column::RoutineId)
        .paginate(&txn, per_page);
    let totals = paginator.num_items_and_pages().await?;
    let routines = paginator.fetch_page(page_idx).await?;
    txn.commit().await?;
    Ok(RoutinePage {
        routines,
        current_page: page_idx + 1,
        total_pages: totals.number_of_pages,
        total_results: totals.number_of_items,
    })
}

/// Set the completion flag on a routine owned by `user_id`.
/// Returns `None` when no routine matched both ids.
pub async fn set_routine_completed(db: &DatabaseConnection, routine_id: Uuid, user_id: Uuid, is_completed: bool) -> Result<Option<Uuid>, ServiceError> {
    let res = RoutineEntity::update_many()
        .col_expr(routine::Column::IsCompleted, Expr::value(is_completed))
        .filter(routine::Column::RoutineId.eq(routine_id))
        .filter(routine::Column::UserId.eq(user_id))
        .exec(db)
        .await?;
    Ok((res.rows_affected > 0).then_some(routine_id))
}

/// Delete a routine owned by `user_id` with all its exercises and entries.
/// Returns `None`, without touching anything, when the user does not own it.
pub async fn delete_routine_cascade(db: &DatabaseConnection, user_id: Uuid, routine_id: Uuid) -> Result<Option<CascadeReport>, ServiceError> {
    let txn = db.begin().await?;
    match cascade(&txn, user_id, routine_id).await {
        Ok(Some(report)) => {
            txn.commit().await?;
            Ok(Some(report))
        }
        Ok(None) => {
            txn.rollback().await?;
            Ok(None)
        }
        Err(e) => {
            warn!(routine_id = %routine_id, error = %e, "routine_cascade_rolled_back");
            if let Err(rb) = txn.rollback().await {
                warn!(routine_id = %routine_id, error = %rb, "routine_cascade_rollback_failed");
            }
            Err(e)
        }
    }
}

async fn cascade<C: ConnectionTrait>(db: &C, user_id: Uuid, routine_id: Uuid) -> Result<Option<CascadeReport>, ServiceError> {
    let owned = RoutineEntity::find()
        .filter(routine::Column::RoutineId.eq(routine_id))
        .filter(routine::Column::UserId.eq(user_id))
        .one(db)
        .await?;
    let Some(owned) = owned else { return Ok(None) };

    let exercise_ids: Vec<Uuid> = owned
        .find_related(ExerciseEntity)
        .all(db)
        .await?
        .into_iter()
        .map(|e| e.exercise_id)
        .collect();

    let mut report = CascadeReport { routine_id, exercises_deleted: 0, routine_exercises_deleted: 0 };
    if !exercise_ids.is_empty() {
        let res = RoutineExerciseEntity::delete_many()
            .filter(routine_exercise::Column::ExerciseId.is_in(exercise_ids))
            .exec(db)
            .await?;
        report.routine_exercises_deleted = res.rows_affected;

        let res = ExerciseEntity::delete_many()
            .filter(exercise::Column::RoutineId.eq(routine_id))
            .exec(db)
            .await?;
        report.exercises_deleted = res.rows_affected;
    }

    let res = RoutineEntity::delete_by_id(routine_id).exec(db).await?;
    debug!(routine_id = %routine_id, rows = res.rows_affected, "routine_row_deleted");
    Ok(Some(report))
}

/// Insert an exercise under `routine_id`.
pub async fn create_exercise(db: &DatabaseConnection, routine_id: Uuid, name: &str, muscle: &str) -> Result<exercise::Model, ServiceError> {
    Ok(exercise::create(db, routine_id, name, muscle).await?)
}

/// Routine header plus its exercises; `None` when the routine does not exist.
pub async fn list_exercises(db: &DatabaseConnection, routine_id: Uuid) -> Result<Option<RoutineExercises>, ServiceError> {
    let Some(r) = RoutineEntity::find_by_id(routine_id).one(db).await? else { return Ok(None) };
    let exercises = r.find_related(ExerciseEntity).all(db).await?;
    Ok(Some(RoutineExercises {
        description: r.description,
        is_completed: r.is_completed,
        exercises: exercises.into_iter().map(Into::into).collect(),
    }))
}

/// Insert a routine-exercise entry under `exercise_id`.
pub async fn create_routine_exercise(
    db: &DatabaseConnection,
    exercise_id: Uuid,
    repetitions: i32,
    weight: f64,
    weight_measure: &str,
) -> Result<routine_exercise::Model, ServiceError> {
    Ok(routine_exercise::create(db, exercise_id, repetitions, weight, weight_measure).await?)
}

/// Exercise name/muscle plus its entries; `None` when the exercise does not exist.
pub async fn list_routine_exercises(db: &DatabaseConnection, exercise_id: Uuid) -> Result<Option<ExerciseEntries>, ServiceError> {
    let Some(e) = ExerciseEntity::find_by_id(exercise_id).one(db).await? else { return Ok(None) };
    let entries = e.find_related(RoutineExerciseEntity).all(db).await?;
    Ok(Some(ExerciseEntries {
        name: e.name,
        muscle: e.muscle,
        routine_exercises: entries.into_iter().map(Into::into).collect(),
    }))
}
