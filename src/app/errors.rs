use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    InternalServerError,
    BadGateway,
    GatewayTimeout,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InternalServerError => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "An internal server error occurred.".to_string(),
            },
            Self::BadGateway => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "An upstream service failed.".to_string(),
            },
            Self::GatewayTimeout => ApiError {
                code: StatusCode::GATEWAY_TIMEOUT,
                message: "An upstream service timed out.".to_string(),
            },
        }
    }
}
