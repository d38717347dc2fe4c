use std::sync::Arc;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::domain::{
    CascadeReport, CreateExerciseInput, CreateRoutineExerciseInput, CreateRoutineInput, DeleteRoutineInput,
    ExerciseEntries, ListRoutinesInput, RoutineExercises, RoutinePage, UpdateRoutineInput,
};
use super::repository::RoutineRepository;
use crate::errors::ServiceError;
use models::{exercise, routine, routine_exercise};

/// Application service for routines, their exercises and recorded entries.
///
/// Validates inputs before touching the repository and turns "no such row"
/// answers into `ServiceError::NotFound`.
///
/// ```
/// use std::sync::Arc;
/// use service::routines::RoutineService;
/// use service::routines::domain::CreateRoutineInput;
/// use service::routines::repository::mock::MockRoutineRepository;
///
/// tokio_test::block_on(async {
///     let svc = RoutineService::new(Arc::new(MockRoutineRepository::default()));
///     let user_id = uuid::Uuid::new_v4();
///     let id = svc
///         .create_routine(CreateRoutineInput { user_id, description: "leg day".into(), is_completed: None })
///         .await
///         .unwrap();
///     let listed = svc.get_exercises(id).await.unwrap();
///     assert!(!listed.is_completed);
/// });
/// ```
pub struct RoutineService<R: RoutineRepository> {
    repo: Arc<R>,
}

impl<R: RoutineRepository> RoutineService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(user_id = %input.user_id))]
    pub async fn create_routine(&self, input: CreateRoutineInput) -> Result<Uuid, ServiceError> {
        routine::validate_description(&input.description)?;
        let m = self
            .repo
            .create_routine(input.user_id, &input.description, input.is_completed.unwrap_or(false))
            .await?;
        info!(routine_id = %m.routine_id, "routine_created");
        Ok(m.routine_id)
    }

    #[instrument(skip(self, input), fields(user_id = %input.user_id, page = input.pagination.page))]
    pub async fn get_routines(&self, input: ListRoutinesInput) -> Result<RoutinePage, ServiceError> {
        self.repo.list_routines(input.user_id, input.pagination).await
    }

    #[instrument(skip(self, input), fields(user_id = %input.user_id, routine_id = %input.routine_id))]
    pub async fn update_routine(&self, input: UpdateRoutineInput) -> Result<Uuid, ServiceError> {
        match self.repo.set_routine_completed(input.routine_id, input.user_id, input.is_completed).await? {
            Some(id) => {
                info!(is_completed = input.is_completed, "routine_updated");
                Ok(id)
            }
            None => Err(ServiceError::not_found("Routine")),
        }
    }

    /// Removes the routine, every exercise under it and every entry under
    /// those exercises, or nothing at all.
    #[instrument(skip(self, input), fields(user_id = %input.user_id, routine_id = %input.routine_id))]
    pub async fn delete_routine(&self, input: DeleteRoutineInput) -> Result<CascadeReport, ServiceError> {
        match self.repo.delete_routine_cascade(input.user_id, input.routine_id).await? {
            Some(report) => {
                info!(
                    exercises_deleted = report.exercises_deleted,
                    routine_exercises_deleted = report.routine_exercises_deleted,
                    "routine_deleted"
                );
                Ok(report)
            }
            None => {
                warn!("routine_delete_not_owned_or_missing");
                Err(ServiceError::not_found("Routine"))
            }
        }
    }

    #[instrument(skip(self, input), fields(routine_id = %input.routine_id))]
    pub async fn create_exercise(&self, input: CreateExerciseInput) -> Result<Uuid, ServiceError> {
        exercise::validate_name(&input.name)?;
        exercise::validate_muscle(&input.muscle)?;
        let m = self.repo.create_exercise(input.routine_id, &input.name, &input.muscle).await?;
        info!(exercise_id = %m.exercise_id, "exercise_created");
        Ok(m.exercise_id)
    }

    pub async fn get_exercises(&self, routine_id: Uuid) -> Result<RoutineExercises, ServiceError> {
        self.repo.list_exercises(routine_id).await?.ok_or_else(|| ServiceError::not_found("Routine"))
    }

    #[instrument(skip(self, input), fields(exercise_id = %input.exercise_id))]
    pub async fn create_routine_exercise(&self, input: CreateRoutineExerciseInput) -> Result<Uuid, ServiceError> {
        routine_exercise::validate_repetitions(input.repetitions)?;
        routine_exercise::validate_weight(input.weight)?;
        routine_exercise::validate_weight_measure(&input.weight_measure)?;
        let m = self
            .repo
            .create_routine_exercise(input.exercise_id, input.repetitions, input.weight, &input.weight_measure)
            .await?;
        info!(routine_exercise_id = %m.routine_exercise_id, "routine_exercise_created");
        Ok(m.routine_exercise_id)
    }

    pub async fn get_routine_exercises(&self, exercise_id: Uuid) -> Result<ExerciseEntries, ServiceError> {
        self.repo.list_routine_exercises(exercise_id).await?.ok_or_else(|| ServiceError::not_found("Exercise"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::Pagination;
    use crate::routines::repository::mock::MockRoutineRepository;
    use crate::routines::SeaOrmRoutineRepository;
    use crate::test_support::get_db;
    use models::errors::ModelError;

    fn mock_service() -> (Arc<MockRoutineRepository>, RoutineService<MockRoutineRepository>) {
        let repo = Arc::new(MockRoutineRepository::default());
        (repo.clone(), RoutineService::new(repo))
    }

    async fn routine_for(svc: &RoutineService<impl RoutineRepository>, user_id: Uuid) -> Uuid {
        svc.create_routine(CreateRoutineInput { user_id, description: "push".into(), is_completed: None })
            .await
            .unwrap()
    }

    async fn exercise_for(svc: &RoutineService<impl RoutineRepository>, routine_id: Uuid) -> Uuid {
        svc.create_exercise(CreateExerciseInput { routine_id, name: "bench press".into(), muscle: "chest".into() })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn create_routine_defaults_to_incomplete() {
        let (repo, svc) = mock_service();
        let id = routine_for(&svc, Uuid::new_v4()).await;
        assert!(!repo.routine(id).unwrap().is_completed);
    }

    #[tokio::test]
    async fn create_routine_rejects_blank_description() {
        let (_, svc) = mock_service();
        let err = svc
            .create_routine(CreateRoutineInput { user_id: Uuid::new_v4(), description: "  ".into(), is_completed: Some(true) })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Model(ModelError::Validation(_))));
        assert_eq!(err.client_message(), "description required");
    }

    #[tokio::test]
    async fn update_by_other_user_is_not_found() {
        let (repo, svc) = mock_service();
        let owner = Uuid::new_v4();
        let id = routine_for(&svc, owner).await;

        let err = svc
            .update_routine(UpdateRoutineInput { routine_id: id, user_id: Uuid::new_v4(), is_completed: true })
            .await
            .unwrap_err();
        assert_eq!(err.client_message(), "Routine not found");
        assert!(!repo.routine(id).unwrap().is_completed);

        let updated = svc
            .update_routine(UpdateRoutineInput { routine_id: id, user_id: owner, is_completed: true })
            .await
            .unwrap();
        assert_eq!(updated, id);
        assert!(repo.routine(id).unwrap().is_completed);
    }

    #[tokio::test]
    async fn delete_of_foreign_routine_keeps_subtree() {
        let (repo, svc) = mock_service();
        let owner = Uuid::new_v4();
        let id = routine_for(&svc, owner).await;
        let ex = exercise_for(&svc, id).await;
        svc.create_routine_exercise(CreateRoutineExerciseInput { exercise_id: ex, repetitions: 8, weight: 60.0, weight_measure: "kg".into() })
            .await
            .unwrap();

        let err = svc.delete_routine(DeleteRoutineInput { user_id: Uuid::new_v4(), routine_id: id }).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(repo.routine(id).is_some());
        assert_eq!(repo.exercise_count(), 1);
        assert_eq!(repo.entry_count(), 1);
    }

    #[tokio::test]
    async fn delete_for_user_without_routines_is_not_found() {
        let (_, svc) = mock_service();
        let err = svc
            .delete_routine(DeleteRoutineInput { user_id: Uuid::new_v4(), routine_id: Uuid::new_v4() })
            .await
            .unwrap_err();
        assert_eq!(err.client_message(), "Routine not found");
    }

    #[tokio::test]
    async fn exercise_validation_runs_before_store() {
        let (repo, svc) = mock_service();
        let id = routine_for(&svc, Uuid::new_v4()).await;
        let err = svc
            .create_exercise(CreateExerciseInput { routine_id: id, name: "squat".into(), muscle: "".into() })
            .await
            .unwrap_err();
        assert_eq!(err.client_message(), "muscle required");
        assert_eq!(repo.exercise_count(), 0);
    }

    #[tokio::test]
    async fn routine_exercise_rejects_bad_numbers() {
        let (_, svc) = mock_service();
        let id = routine_for(&svc, Uuid::new_v4()).await;
        let ex = exercise_for(&svc, id).await;

        let negative = svc
            .create_routine_exercise(CreateRoutineExerciseInput { exercise_id: ex, repetitions: -1, weight: 10.0, weight_measure: "kg".into() })
            .await;
        assert!(negative.is_err());

        let nan = svc
            .create_routine_exercise(CreateRoutineExerciseInput { exercise_id: ex, repetitions: 5, weight: f64::NAN, weight_measure: "kg".into() })
            .await;
        assert!(nan.is_err());
    }

    #[tokio::test]
    async fn missing_parents_are_not_found() {
        let (_, svc) = mock_service();
        assert_eq!(svc.get_exercises(Uuid::new_v4()).await.unwrap_err().client_message(), "Routine not found");
        assert_eq!(svc.get_routine_exercises(Uuid::new_v4()).await.unwrap_err().client_message(), "Exercise not found");
    }

    #[tokio::test]
    async fn exercise_under_missing_routine_is_a_store_error() {
        let (_, svc) = mock_service();
        let err = svc
            .create_exercise(CreateExerciseInput { routine_id: Uuid::new_v4(), name: "row".into(), muscle: "back".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));
    }

    #[tokio::test]
    async fn concurrent_entries_get_distinct_ids() {
        let (repo, svc) = mock_service();
        let id = routine_for(&svc, Uuid::new_v4()).await;
        let ex = exercise_for(&svc, id).await;
        let svc = Arc::new(svc);

        let mut handles = Vec::new();
        for i in 0..16 {
            let svc = svc.clone();
            handles.push(tokio::spawn(async move {
                svc.create_routine_exercise(CreateRoutineExerciseInput {
                    exercise_id: ex,
                    repetitions: i,
                    weight: 20.0,
                    weight_measure: "kg".into(),
                })
                .await
                .unwrap()
            }));
        }
        let mut ids = Vec::new();
        for h in handles {
            ids.push(h.await.unwrap());
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 16);
        assert_eq!(repo.entry_count(), 16);
        assert_eq!(svc.get_routine_exercises(ex).await.unwrap().routine_exercises.len(), 16);
    }

    #[tokio::test]
    async fn seaorm_full_lifecycle() {
        let db = get_db().await.unwrap();
        let svc = RoutineService::new(Arc::new(SeaOrmRoutineRepository { db }));
        let user_id = Uuid::new_v4();

        let id = routine_for(&svc, user_id).await;
        let ex = exercise_for(&svc, id).await;
        for reps in [5, 8, 12] {
            svc.create_routine_exercise(CreateRoutineExerciseInput { exercise_id: ex, repetitions: reps, weight: 40.5, weight_measure: "kg".into() })
                .await
                .unwrap();
        }

        let listed = svc.get_exercises(id).await.unwrap();
        assert_eq!(listed.description, "push");
        assert_eq!(listed.exercises.len(), 1);
        assert_eq!(listed.exercises[0].exercise_id, ex);

        let page = svc
            .get_routines(ListRoutinesInput { user_id, pagination: Pagination::default() })
            .await
            .unwrap();
        assert_eq!(page.total_results, 1);
        assert_eq!(page.current_page, 1);

        let report = svc.delete_routine(DeleteRoutineInput { user_id, routine_id: id }).await.unwrap();
        assert_eq!(report.exercises_deleted, 1);
        assert_eq!(report.routine_exercises_deleted, 3);
        assert!(matches!(svc.get_exercises(id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.get_routine_exercises(ex).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn mock_listing_pages_by_offset() {
        let (_, svc) = mock_service();
        let user_id = Uuid::new_v4();
        for _ in 0..12 {
            routine_for(&svc, user_id).await;
        }
        let page = svc
            .get_routines(ListRoutinesInput { user_id, pagination: Pagination::new(Some(3), Some(5)) })
            .await
            .unwrap();
        assert_eq!(page.current_page, 3);
        assert_eq!(page.routines.len(), 2);
        assert_eq!(page.total_results, 12);
        assert_eq!(page.total_pages, 3);
    }

    #[tokio::test]
    async fn closed_pool_surfaces_as_internal_on_every_write() {
        let db = get_db().await.unwrap();
        let svc = RoutineService::new(Arc::new(SeaOrmRoutineRepository { db: db.clone() }));
        let user_id = Uuid::new_v4();
        let id = routine_for(&svc, user_id).await;
        let ex = exercise_for(&svc, id).await;
        db.close().await.unwrap();

        let results = [
            svc.create_routine(CreateRoutineInput { user_id, description: "pull".into(), is_completed: None })
                .await
                .map(|_| ()),
            svc.create_exercise(CreateExerciseInput { routine_id: id, name: "row".into(), muscle: "back".into() })
                .await
                .map(|_| ()),
            svc.create_routine_exercise(CreateRoutineExerciseInput { exercise_id: ex, repetitions: 5, weight: 50.0, weight_measure: "kg".into() })
                .await
                .map(|_| ()),
            svc.get_routines(ListRoutinesInput { user_id, pagination: Pagination::default() })
                .await
                .map(|_| ()),
        ];
        for res in results {
            let err = res.unwrap_err();
            assert!(matches!(err, ServiceError::Internal(_)), "unexpected {err:?}");
            assert_eq!(err.client_message(), "Internal Server Error");
        }
    }
}
