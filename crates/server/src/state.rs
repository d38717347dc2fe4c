use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::routines::{RoutineService, SeaOrmRoutineRepository};

/// Shared handler state; cloning only bumps the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub routines: Arc<RoutineService<SeaOrmRoutineRepository>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmRoutineRepository { db });
        Self { routines: Arc::new(RoutineService::new(repo)) }
    }
}
