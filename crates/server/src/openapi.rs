use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(Serialize, ToSchema)]
pub struct IdDoc { pub id: Uuid }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoutineDoc { pub description: String, pub is_completed: Option<bool> }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoutineDoc { pub is_completed: bool }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoutineCreatedDoc { pub routine_id: Uuid }

/// Listed routine row; column names as stored.
#[derive(Serialize, ToSchema)]
pub struct RoutineRowDoc {
    pub routine_id: Uuid,
    pub user_id: Uuid,
    pub date: chrono::DateTime<chrono::FixedOffset>,
    pub description: String,
    pub is_completed: bool,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoutinePageDoc {
    pub routines: Vec<RoutineRowDoc>,
    pub current_page: u64,
    pub total_pages: u64,
    pub total_results: u64,
}

#[derive(Serialize, ToSchema)]
pub struct CreateExerciseDoc { pub name: String, pub muscle: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseCreatedDoc { pub exercise_id: Uuid }

#[derive(Serialize, ToSchema)]
pub struct ExerciseRowDoc { pub exercise_id: Uuid, pub name: String, pub muscle: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoutineExercisesDoc { pub description: String, pub is_completed: bool, pub exercises: Vec<ExerciseRowDoc> }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoutineExerciseDoc { pub repetitions: i32, pub weight: f64, pub weight_measure: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoutineExerciseCreatedDoc { pub routine_exercise_id: Uuid }

#[derive(Serialize, ToSchema)]
pub struct RoutineExerciseRowDoc {
    pub routine_exercise_id: Uuid,
    pub repetitions: i32,
    pub weight: f64,
    pub weight_measure: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseEntriesDoc { pub name: String, pub muscle: String, pub routine_exercises: Vec<RoutineExerciseRowDoc> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::routines::create_routine,
        crate::routes::routines::get_routines,
        crate::routes::routines::update_routine,
        crate::routes::routines::delete_routine,
        crate::routes::routines::create_exercise,
        crate::routes::routines::get_exercises,
        crate::routes::routines::create_routine_exercise,
        crate::routes::routines::get_routine_exercises,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            IdDoc,
            CreateRoutineDoc,
            UpdateRoutineDoc,
            RoutineCreatedDoc,
            RoutineRowDoc,
            RoutinePageDoc,
            CreateExerciseDoc,
            ExerciseCreatedDoc,
            ExerciseRowDoc,
            RoutineExercisesDoc,
            CreateRoutineExerciseDoc,
            RoutineExerciseCreatedDoc,
            RoutineExerciseRowDoc,
            ExerciseEntriesDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "routines"),
        (name = "exercises")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_resource_path() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for p in [
            "/health",
            "/users/{userId}/routines",
            "/users/{userId}/routines/{routineId}",
            "/routines/{routineId}/exercises",
            "/exercises/{exerciseId}/routine-exercises",
        ] {
            assert!(paths.iter().any(|k| k.as_str() == p), "missing {p}");
        }
    }
}
