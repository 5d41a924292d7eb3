use axum::http::StatusCode;

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    users::errors::ClientError,
};

#[derive(Debug)]
pub enum PaymentsApiError {
    InvalidUserId,
}

impl PaymentsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InvalidUserId => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "userid must be a non-negative integer.".to_string(),
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to connect to payment store: {0}")]
    Connection(#[source] sqlx::Error),
    #[error("failed to write payment: {0}")]
    Write(#[source] sqlx::Error),
    #[error("failed to query payments: {0}")]
    Query(#[source] sqlx::Error),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        tracing::error!(%e);
        DefaultApiError::InternalServerError.value()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    User(#[from] ClientError),
}

impl From<QueryError> for ApiError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::Store(e) => e.into(),
            QueryError::User(e) => e.into(),
        }
    }
}
