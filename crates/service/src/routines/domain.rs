use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pagination::Pagination;
use models::{exercise, routine, routine_exercise};

/// Input of `create_routine`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoutineInput {
    pub user_id: Uuid,
    pub description: String,
    pub is_completed: Option<bool>,
}

/// Input of `get_routines`
#[derive(Debug, Clone, Copy)]
pub struct ListRoutinesInput {
    pub user_id: Uuid,
    pub pagination: Pagination,
}

/// Input of `update_routine`; ownership is part of the match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UpdateRoutineInput {
    pub routine_id: Uuid,
    pub user_id: Uuid,
    pub is_completed: bool,
}

/// Input of `delete_routine`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeleteRoutineInput {
    pub user_id: Uuid,
    pub routine_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExerciseInput {
    pub routine_id: Uuid,
    pub name: String,
    pub muscle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoutineExerciseInput {
    pub exercise_id: Uuid,
    pub repetitions: i32,
    pub weight: f64,
    pub weight_measure: String,
}

/// One page of a user's routines, incomplete first then newest first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutinePage {
    pub routines: Vec<routine::Model>,
    pub current_page: u64,
    pub total_pages: u64,
    pub total_results: u64,
}

/// Exercise row as listed under a routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSummary {
    pub exercise_id: Uuid,
    pub name: String,
    pub muscle: String,
}

impl From<exercise::Model> for ExerciseSummary {
    fn from(m: exercise::Model) -> Self {
        Self { exercise_id: m.exercise_id, name: m.name, muscle: m.muscle }
    }
}

/// A routine's header fields together with its exercises.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineExercises {
    pub description: String,
    pub is_completed: bool,
    pub exercises: Vec<ExerciseSummary>,
}

/// Routine-exercise row as listed under an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineExerciseEntry {
    pub routine_exercise_id: Uuid,
    pub repetitions: i32,
    pub weight: f64,
    pub weight_measure: String,
}

impl From<routine_exercise::Model> for RoutineExerciseEntry {
    fn from(m: routine_exercise::Model) -> Self {
        Self {
            routine_exercise_id: m.routine_exercise_id,
            repetitions: m.repetitions,
            weight: m.weight,
            weight_measure: m.weight_measure,
        }
    }
}

/// An exercise's name and muscle together with its recorded entries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseEntries {
    pub name: String,
    pub muscle: String,
    pub routine_exercises: Vec<RoutineExerciseEntry>,
}

/// What a cascading routine delete removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeReport {
    pub routine_id: Uuid,
    pub exercises_deleted: u64,
    pub routine_exercises_deleted: u64,
}
