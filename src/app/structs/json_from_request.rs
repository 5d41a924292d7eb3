use axum::Json;
use axum_macros::FromRequest;

use crate::app::models::api_error::ApiError;

/// `Json` whose rejections render as an `ApiError` body instead of plain text.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonFromRequest<T>(pub T);
