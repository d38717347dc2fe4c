use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::state::AppState;
use service::errors::ServiceError;
use service::pagination::Pagination;
use service::routines::domain::{
    CreateExerciseInput, CreateRoutineExerciseInput, CreateRoutineInput, DeleteRoutineInput, ExerciseEntries,
    ListRoutinesInput, RoutineExercises, RoutinePage, UpdateRoutineInput,
};

fn parse_id(raw: &str, field: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ServiceError::Validation(format!("invalid {field}")).into())
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ServiceError::Validation(format!("{field} required")).into())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoutineBody {
    pub description: Option<String>,
    pub is_completed: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoutineBody {
    pub is_completed: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct CreateExerciseBody {
    pub name: Option<String>,
    pub muscle: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoutineExerciseBody {
    pub repetitions: Option<i32>,
    pub weight: Option<f64>,
    pub weight_measure: Option<String>,
}

/// Out-of-range values are clamped rather than rejected.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl ListQuery {
    fn pagination(&self) -> Pagination {
        let clamp = |v: i64| v.clamp(0, u32::MAX as i64) as u32;
        Pagination::new(self.page.map(clamp), self.page_size.map(clamp))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineCreated {
    pub routine_id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseCreated {
    pub exercise_id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineExerciseCreated {
    pub routine_exercise_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: Uuid,
}

#[utoipa::path(
    post, path = "/users/{userId}/routines", tag = "routines",
    params(("userId" = String, Path, description = "Owner id (UUID)")),
    request_body = crate::openapi::CreateRoutineDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::RoutineCreatedDoc),
        (status = 400, description = "Validation or store error", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_routine(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<String>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<CreateRoutineBody>, ApiError>,
) -> Result<(StatusCode, Json<RoutineCreated>), ApiError> {
    let user_id = parse_id(&user_id, "userId")?;
    let description = required(body.description, "description")?;
    let routine_id = state
        .routines
        .create_routine(CreateRoutineInput { user_id, description, is_completed: body.is_completed })
        .await?;
    Ok((StatusCode::CREATED, Json(RoutineCreated { routine_id })))
}

#[utoipa::path(
    get, path = "/users/{userId}/routines", tag = "routines",
    params(("userId" = String, Path, description = "Owner id (UUID)"), ListQuery),
    responses(
        (status = 200, description = "One page of routines", body = crate::openapi::RoutinePageDoc),
        (status = 400, description = "Validation or store error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_routines(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<String>, ApiError>,
    WithRejection(Query(q), _): WithRejection<Query<ListQuery>, ApiError>,
) -> Result<Json<RoutinePage>, ApiError> {
    let user_id = parse_id(&user_id, "userId")?;
    let page = state
        .routines
        .get_routines(ListRoutinesInput { user_id, pagination: q.pagination() })
        .await?;
    debug!(returned = page.routines.len(), total = page.total_results, "routines_listed");
    Ok(Json(page))
}

#[utoipa::path(
    put, path = "/users/{userId}/routines/{routineId}", tag = "routines",
    params(
        ("userId" = String, Path, description = "Owner id (UUID)"),
        ("routineId" = String, Path, description = "Routine id (UUID)")
    ),
    request_body = crate::openapi::UpdateRoutineDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::IdDoc),
        (status = 400, description = "Validation error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Routine not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_routine(
    State(state): State<AppState>,
    WithRejection(Path((user_id, routine_id)), _): WithRejection<Path<(String, String)>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<UpdateRoutineBody>, ApiError>,
) -> Result<Json<IdResponse>, ApiError> {
    let user_id = parse_id(&user_id, "userId")?;
    let routine_id = parse_id(&routine_id, "routineId")?;
    let is_completed = required(body.is_completed, "isCompleted")?;
    let id = state
        .routines
        .update_routine(UpdateRoutineInput { routine_id, user_id, is_completed })
        .await?;
    Ok(Json(IdResponse { id }))
}

#[utoipa::path(
    delete, path = "/users/{userId}/routines/{routineId}", tag = "routines",
    params(
        ("userId" = String, Path, description = "Owner id (UUID)"),
        ("routineId" = String, Path, description = "Routine id (UUID)")
    ),
    responses(
        (status = 200, description = "Routine and its subtree deleted", body = crate::openapi::IdDoc),
        (status = 400, description = "Validation or store error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Routine not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_routine(
    State(state): State<AppState>,
    WithRejection(Path((user_id, routine_id)), _): WithRejection<Path<(String, String)>, ApiError>,
) -> Result<Json<IdResponse>, ApiError> {
    let user_id = parse_id(&user_id, "userId")?;
    let routine_id = parse_id(&routine_id, "routineId")?;
    let report = state.routines.delete_routine(DeleteRoutineInput { user_id, routine_id }).await?;
    Ok(Json(IdResponse { id: report.routine_id }))
}

#[utoipa::path(
    post, path = "/routines/{routineId}/exercises", tag = "exercises",
    params(("routineId" = String, Path, description = "Routine id (UUID)")),
    request_body = crate::openapi::CreateExerciseDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ExerciseCreatedDoc),
        (status = 400, description = "Validation or store error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_exercise(
    State(state): State<AppState>,
    WithRejection(Path(routine_id), _): WithRejection<Path<String>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<CreateExerciseBody>, ApiError>,
) -> Result<(StatusCode, Json<ExerciseCreated>), ApiError> {
    let routine_id = parse_id(&routine_id, "routineId")?;
    let name = required(body.name, "name")?;
    let muscle = required(body.muscle, "muscle")?;
    let exercise_id = state
        .routines
        .create_exercise(CreateExerciseInput { routine_id, name, muscle })
        .await?;
    Ok((StatusCode::CREATED, Json(ExerciseCreated { exercise_id })))
}

#[utoipa::path(
    get, path = "/routines/{routineId}/exercises", tag = "exercises",
    params(("routineId" = String, Path, description = "Routine id (UUID)")),
    responses(
        (status = 200, description = "Routine header with its exercises", body = crate::openapi::RoutineExercisesDoc),
        (status = 404, description = "Routine not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_exercises(
    State(state): State<AppState>,
    WithRejection(Path(routine_id), _): WithRejection<Path<String>, ApiError>,
) -> Result<Json<RoutineExercises>, ApiError> {
    let routine_id = parse_id(&routine_id, "routineId")?;
    Ok(Json(state.routines.get_exercises(routine_id).await?))
}

#[utoipa::path(
    post, path = "/exercises/{exerciseId}/routine-exercises", tag = "exercises",
    params(("exerciseId" = String, Path, description = "Exercise id (UUID)")),
    request_body = crate::openapi::CreateRoutineExerciseDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::RoutineExerciseCreatedDoc),
        (status = 400, description = "Validation or store error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_routine_exercise(
    State(state): State<AppState>,
    WithRejection(Path(exercise_id), _): WithRejection<Path<String>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<CreateRoutineExerciseBody>, ApiError>,
) -> Result<(StatusCode, Json<RoutineExerciseCreated>), ApiError> {
    let exercise_id = parse_id(&exercise_id, "exerciseId")?;
    let repetitions = required(body.repetitions, "repetitions")?;
    let weight = required(body.weight, "weight")?;
    let weight_measure = required(body.weight_measure, "weightMeasure")?;
    let routine_exercise_id = state
        .routines
        .create_routine_exercise(CreateRoutineExerciseInput { exercise_id, repetitions, weight, weight_measure })
        .await?;
    Ok((StatusCode::CREATED, Json(RoutineExerciseCreated { routine_exercise_id })))
}

#[utoipa::path(
    get, path = "/exercises/{exerciseId}/routine-exercises", tag = "exercises",
    params(("exerciseId" = String, Path, description = "Exercise id (UUID)")),
    responses(
        (status = 200, description = "Exercise header with its entries", body = crate::openapi::ExerciseEntriesDoc),
        (status = 404, description = "Exercise not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_routine_exercises(
    State(state): State<AppState>,
    WithRejection(Path(exercise_id), _): WithRejection<Path<String>, ApiError>,
) -> Result<Json<ExerciseEntries>, ApiError> {
    let exercise_id = parse_id(&exercise_id, "exerciseId")?;
    Ok(Json(state.routines.get_routine_exercises(exercise_id).await?))
}
