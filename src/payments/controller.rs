use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, structs::json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::create_payment_dto::CreatePaymentDto,
    models::{payment::Payment, payments_with_user_info::PaymentsWithUserInfo},
    service,
    structs::sender_id::SenderId,
};

pub async fn get_payments_from(
    State(state): State<Arc<AppState>>,
    SenderId(user_id): SenderId,
) -> Result<Json<PaymentsWithUserInfo>, ApiError> {
    match service::get_payments_by_user(user_id, state.store.as_ref(), &state.users_client).await
    {
        Ok(envelope) => Ok(Json(envelope)),
        Err(e) => Err(e.into()),
    }
}

pub async fn create_payment(
    State(state): State<Arc<AppState>>,
    JsonFromRequest(dto): JsonFromRequest<CreatePaymentDto>,
) -> Result<(StatusCode, Json<Payment>), ApiError> {
    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    match service::create_payment(&dto, state.store.as_ref()).await {
        Ok(payment) => Ok((StatusCode::CREATED, Json(payment))),
        Err(e) => Err(e.into()),
    }
}
