use axum::{
    extract::rejection::QueryRejection,
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Failed to connect to database connection pool")]
    DeadpoolError(#[from] diesel_async::pooled_connection::deadpool::PoolError),
    #[error("Diesel query failed `{0}`")]
    DieselError(#[from] diesel::result::Error),
    #[error("Database connection failed")]
    DieselConnectionError(#[from] diesel::result::ConnectionError),
    #[error("Unknown sort key `{0}`")]
    InvalidSortKey(String),
    #[error("Limit has to be an integer, got `{0}`")]
    InvalidLimit(String),
    #[error("Invalid query string: {0}")]
    InvalidQuery(#[from] QueryRejection),
}

/// Whether the caller should fix its request or try again later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidRequest,
    StoreUnavailable,
}

impl StatsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StatsError::InvalidSortKey(_)
            | StatsError::InvalidLimit(_)
            | StatsError::InvalidQuery(_) => ErrorKind::InvalidRequest,
            StatsError::DeadpoolError(_)
            | StatsError::DieselError(_)
            | StatsError::DieselConnectionError(_) => ErrorKind::StoreUnavailable,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorKind::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for StatsError {
    fn into_response(self) -> Response {
        error!("{}", self);

        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
            "kind": self.kind(),
        }));

        (self.status_code(), body).into_response()
    }
}
