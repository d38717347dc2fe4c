use models::errors::ModelError;
use sea_orm::DbErr;
use thiserror::Error;

const INTERNAL_MESSAGE: &str = "Internal Server Error";

// Pool exhaustion or a dropped connection is infrastructure, not a store answer.
fn is_infrastructure(e: &DbErr) -> bool {
    matches!(e, DbErr::ConnectionAcquire(_) | DbErr::Conn(_))
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(ModelError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Message safe to hand back to a client. Internal failures never expose detail.
    pub fn client_message(&self) -> String {
        match self {
            ServiceError::Validation(m) | ServiceError::NotFound(m) | ServiceError::Db(m) => m.clone(),
            ServiceError::Model(ModelError::Validation(m)) => m.clone(),
            ServiceError::Model(ModelError::Store(e)) if !is_infrastructure(e) => e.to_string(),
            ServiceError::Model(ModelError::Store(_)) | ServiceError::Internal(_) => INTERNAL_MESSAGE.to_string(),
        }
    }

    /// True when the failure is ours rather than the caller's.
    pub fn is_internal(&self) -> bool {
        match self {
            ServiceError::Internal(_) => true,
            ServiceError::Model(ModelError::Store(e)) => is_infrastructure(e),
            _ => false,
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        if is_infrastructure(&e) {
            ServiceError::Internal(e.to_string())
        } else {
            ServiceError::Db(e.to_string())
        }
    }
}

/// Store failures from the model layer take the same route as direct queries.
impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Store(db) => ServiceError::from(db),
            validation => ServiceError::Model(validation),
        }
    }
}
