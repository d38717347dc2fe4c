use std::any::Any;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

pub const INTERNAL_MESSAGE: &str = "Internal Server Error";

/// Error returned by every handler; rendered as `{"error": message}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self { Self::new(StatusCode::BAD_REQUEST, message) }

    pub fn internal() -> Self { Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE) }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        if e.is_internal() {
            error!(error = %e, "internal_error");
            return Self::internal();
        }
        let status = match &e {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };
        Self::new(status, e.client_message())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(r: JsonRejection) -> Self { Self::bad_request(r.body_text()) }
}

impl From<PathRejection> for ApiError {
    fn from(r: PathRejection) -> Self { Self::bad_request(r.body_text()) }
}

impl From<QueryRejection> for ApiError {
    fn from(r: QueryRejection) -> Self { Self::bad_request(r.body_text()) }
}

/// Panic handler for `CatchPanicLayer`; the payload only goes to the log.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response<String> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error!(panic = %detail, "handler_panicked");
    let body = serde_json::json!({ "error": INTERNAL_MESSAGE }).to_string();
    let mut res = Response::new(body);
    *res.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    res.headers_mut().insert(header::CONTENT_TYPE, header::HeaderValue::from_static("application/json"));
    res
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;
    use sea_orm::{DbErr, RuntimeErr};

    #[test]
    fn service_errors_map_to_status() {
        let cases = [
            (ServiceError::Validation("bad id".into()), StatusCode::BAD_REQUEST, "bad id"),
            (ServiceError::not_found("Routine"), StatusCode::NOT_FOUND, "Routine not found"),
            (ServiceError::Db("violates foreign key".into()), StatusCode::BAD_REQUEST, "violates foreign key"),
            (ServiceError::Model(ModelError::Validation("name required".into())), StatusCode::BAD_REQUEST, "name required"),
            (ServiceError::Internal("pool timeout".into()), StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE),
        ];
        for (err, status, msg) in cases {
            let api = ApiError::from(err);
            assert_eq!(api.status, status);
            assert_eq!(api.message, msg);
        }
    }

    #[test]
    fn lost_connection_on_insert_is_generic_500() {
        let err = ServiceError::from(ModelError::Store(DbErr::Conn(RuntimeErr::Internal("pool closed".into()))));
        let api = ApiError::from(err);
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message, INTERNAL_MESSAGE);
    }

    #[test]
    fn panic_response_hides_payload() {
        let res = panic_response(Box::new("boom at line 3".to_string()));
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!res.body().contains("boom"));
        assert!(res.body().contains(INTERNAL_MESSAGE));
    }
}
