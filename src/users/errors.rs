use reqwest::StatusCode;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("users service request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("users service did not answer in time")]
    Timeout,
    #[error("users service responded with {0}")]
    Status(StatusCode),
    #[error("users service returned a malformed body: {0}")]
    Body(#[source] serde_json::Error),
}

impl ClientError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::Timeout => DefaultApiError::GatewayTimeout.value(),
            Self::Status(status) => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: format!("Users service responded with {}.", status),
            },
            Self::Transport(_) | Self::Body(_) => DefaultApiError::BadGateway.value(),
        }
    }
}

impl From<ClientError> for ApiError {
    fn from(e: ClientError) -> Self {
        tracing::error!(%e);
        e.value()
    }
}
