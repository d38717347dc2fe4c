use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use super::domain::{CascadeReport, ExerciseEntries, RoutineExercises, RoutinePage};
use crate::errors::ServiceError;
use crate::pagination::Pagination;
use models::{exercise, routine, routine_exercise};

/// Repository abstraction for the routine → exercise → entry hierarchy.
#[async_trait]
pub trait RoutineRepository: Send + Sync {
    async fn create_routine(&self, user_id: Uuid, description: &str, is_completed: bool) -> Result<routine::Model, ServiceError>;
    async fn list_routines(&self, user_id: Uuid, pagination: Pagination) -> Result<RoutinePage, ServiceError>;
    /// `None` when no routine matches both ids.
    async fn set_routine_completed(&self, routine_id: Uuid, user_id: Uuid, is_completed: bool) -> Result<Option<Uuid>, ServiceError>;
    /// All-or-nothing delete of a routine and its subtree; `None` when `user_id` does not own it.
    async fn delete_routine_cascade(&self, user_id: Uuid, routine_id: Uuid) -> Result<Option<CascadeReport>, ServiceError>;

    async fn create_exercise(&self, routine_id: Uuid, name: &str, muscle: &str) -> Result<exercise::Model, ServiceError>;
    async fn list_exercises(&self, routine_id: Uuid) -> Result<Option<RoutineExercises>, ServiceError>;

    async fn create_routine_exercise(&self, exercise_id: Uuid, repetitions: i32, weight: f64, weight_measure: &str) -> Result<routine_exercise::Model, ServiceError>;
    async fn list_routine_exercises(&self, exercise_id: Uuid) -> Result<Option<ExerciseEntries>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmRoutineRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl RoutineRepository for SeaOrmRoutineRepository {
    async fn create_routine(&self, user_id: Uuid, description: &str, is_completed: bool) -> Result<routine::Model, ServiceError> {
        crate::db::routine_store::create_routine(&self.db, user_id, description, is_completed).await
    }

    async fn list_routines(&self, user_id: Uuid, pagination: Pagination) -> Result<RoutinePage, ServiceError> {
        crate::db::routine_store::list_routines(&self.db, user_id, pagination).await
    }

    async fn set_routine_completed(&self, routine_id: Uuid, user_id: Uuid, is_completed: bool) -> Result<Option<Uuid>, ServiceError> {
        crate::db::routine_store::set_routine_completed(&self.db, routine_id, user_id, is_completed).await
    }

    async fn delete_routine_cascade(&self, user_id: Uuid, routine_id: Uuid) -> Result<Option<CascadeReport>, ServiceError> {
        crate::db::routine_store::delete_routine_cascade(&self.db, user_id, routine_id).await
    }

    async fn create_exercise(&self, routine_id: Uuid, name: &str, muscle: &str) -> Result<exercise::Model, ServiceError> {
        crate::db::routine_store::create_exercise(&self.db, routine_id, name, muscle).await
    }

    async fn list_exercises(&self, routine_id: Uuid) -> Result<Option<RoutineExercises>, ServiceError> {
        crate::db::routine_store::list_exercises(&self.db, routine_id).await
    }

    async fn create_routine_exercise(&self, exercise_id: Uuid, repetitions: i32, weight: f64, weight_measure: &str) -> Result<routine_exercise::Model, ServiceError> {
        crate::db::routine_store::create_routine_exercise(&self.db, exercise_id, repetitions, weight, weight_measure).await
    }

    async fn list_routine_exercises(&self, exercise_id: Uuid) -> Result<Option<ExerciseEntries>, ServiceError> {
        crate::db::routine_store::list_routine_exercises(&self.db, exercise_id).await
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    use crate::pagination::total_pages;

    #[derive(Default)]
    struct Tables {
        routines: Vec<routine::Model>,
        exercises: Vec<exercise::Model>,
        entries: Vec<routine_exercise::Model>,
    }

    /// Keeps rows in vectors and mirrors the store's ordering, ownership and
    /// foreign-key rules.
    #[derive(Default)]
    pub struct MockRoutineRepository {
        tables: Mutex<Tables>,
    }

    impl MockRoutineRepository {
        fn tables(&self) -> MutexGuard<'_, Tables> {
            self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
        }

        pub fn routine(&self, routine_id: Uuid) -> Option<routine::Model> {
            self.tables().routines.iter().find(|r| r.routine_id == routine_id).cloned()
        }

        pub fn exercise_count(&self) -> usize { self.tables().exercises.len() }

        pub fn entry_count(&self) -> usize { self.tables().entries.len() }
    }

    #[async_trait]
    impl RoutineRepository for MockRoutineRepository {
        async fn create_routine(&self, user_id: Uuid, description: &str, is_completed: bool) -> Result<routine::Model, ServiceError> {
            let m = routine::Model {
                routine_id: Uuid::new_v4(),
                user_id,
                date: chrono::Utc::now().into(),
                description: description.to_string(),
                is_completed,
            };
            self.tables().routines.push(m.clone());
            Ok(m)
        }

        async fn list_routines(&self, user_id: Uuid, pagination: Pagination) -> Result<RoutinePage, ServiceError> {
            let (page_idx, per_page) = pagination.normalize();
            let mut rows: Vec<routine::Model> = self.tables().routines.iter().filter(|r| r.user_id == user_id).cloned().collect();
            rows.sort_by(|a, b| a.is_completed.cmp(&b.is_completed).then(b.date.cmp(&a.date)).then(a.routine_id.cmp(&b.routine_id)));
            let total = rows.len() as u64;
            let routines = rows.into_iter().skip(pagination.offset() as usize).take(per_page as usize).collect();
            Ok(RoutinePage { routines, current_page: page_idx + 1, total_pages: total_pages(total, per_page), total_results: total })
        }

        async fn set_routine_completed(&self, routine_id: Uuid, user_id: Uuid, is_completed: bool) -> Result<Option<Uuid>, ServiceError> {
            let mut t = self.tables();
            match t.routines.iter_mut().find(|r| r.routine_id == routine_id && r.user_id == user_id) {
                Some(r) => {
                    r.is_completed = is_completed;
                    Ok(Some(routine_id))
                }
                None => Ok(None),
            }
        }

        async fn delete_routine_cascade(&self, user_id: Uuid, routine_id: Uuid) -> Result<Option<CascadeReport>, ServiceError> {
            let mut t = self.tables();
            if !t.routines.iter().any(|r| r.routine_id == routine_id && r.user_id == user_id) {
                return Ok(None);
            }
            let exercise_ids: Vec<Uuid> = t.exercises.iter().filter(|e| e.routine_id == routine_id).map(|e| e.exercise_id).collect();
            let entries_before = t.entries.len();
            t.entries.retain(|re| !exercise_ids.contains(&re.exercise_id));
            let routine_exercises_deleted = (entries_before - t.entries.len()) as u64;
            t.exercises.retain(|e| e.routine_id != routine_id);
            t.routines.retain(|r| r.routine_id != routine_id);
            Ok(Some(CascadeReport { routine_id, exercises_deleted: exercise_ids.len() as u64, routine_exercises_deleted }))
        }

        async fn create_exercise(&self, routine_id: Uuid, name: &str, muscle: &str) -> Result<exercise::Model, ServiceError> {
            let mut t = self.tables();
            if !t.routines.iter().any(|r| r.routine_id == routine_id) {
                return Err(ServiceError::Db("violates foreign key constraint fk_exercises_routine".into()));
            }
            let m = exercise::Model { exercise_id: Uuid::new_v4(), routine_id, name: name.to_string(), muscle: muscle.to_string() };
            t.exercises.push(m.clone());
            Ok(m)
        }

        async fn list_exercises(&self, routine_id: Uuid) -> Result<Option<RoutineExercises>, ServiceError> {
            let t = self.tables();
            let Some(r) = t.routines.iter().find(|r| r.routine_id == routine_id) else { return Ok(None) };
            Ok(Some(RoutineExercises {
                description: r.description.clone(),
                is_completed: r.is_completed,
                exercises: t.exercises.iter().filter(|e| e.routine_id == routine_id).cloned().map(Into::into).collect(),
            }))
        }

        async fn create_routine_exercise(&self, exercise_id: Uuid, repetitions: i32, weight: f64, weight_measure: &str) -> Result<routine_exercise::Model, ServiceError> {
            let mut t = self.tables();
            if !t.exercises.iter().any(|e| e.exercise_id == exercise_id) {
                return Err(ServiceError::Db("violates foreign key constraint fk_routine_exercises_exercise".into()));
            }
            let m = routine_exercise::Model {
                routine_exercise_id: Uuid::new_v4(),
                exercise_id,
                repetitions,
                weight,
                weight_measure: weight_measure.to_string(),
            };
            t.entries.push(m.clone());
            Ok(m)
        }

        async fn list_routine_exercises(&self, exercise_id: Uuid) -> Result<Option<ExerciseEntries>, ServiceError> {
            let t = self.tables();
            let Some(e) = t.exercises.iter().find(|e| e.exercise_id == exercise_id) else { return Ok(None) };
            Ok(Some(ExerciseEntries {
                name: e.name.clone(),
                muscle: e.muscle.clone(),
                routine_exercises: t.entries.iter().filter(|re| re.exercise_id == exercise_id).cloned().map(Into::into).collect(),
            }))
        }
    }
}
