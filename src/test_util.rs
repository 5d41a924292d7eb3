use std::{net::SocketAddr, sync::Arc, time::Duration};

use async_trait::async_trait;
use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::{
    payments::{errors::StoreError, models::payment::Payment, store::PaymentStore},
    router,
    users::client::UsersClient,
    AppState,
};

pub const MALFORMED_USER_ID: i64 = 13;
pub const SLOW_USER_ID: i64 = 99;
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:1";

/// Fake users service: ids 1 to 3 exist, `MALFORMED_USER_ID` answers with a
/// body that is not a user, `SLOW_USER_ID` stalls for two seconds, anything
/// else is a 404.
pub async fn spawn_users_service() -> String {
    let app = Router::new().route("/user/:id", get(get_user));

    let addr = SocketAddr::from(([127, 0, 0, 1], 0));
    let server = axum::Server::bind(&addr).serve(app.into_make_service());
    let addr = server.local_addr();

    tokio::spawn(server);

    format!("http://{}", addr)
}

async fn get_user(Path(id): Path<i64>) -> Response {
    if id == MALFORMED_USER_ID {
        return (StatusCode::OK, "{\"userid\": \"thirteen\"}").into_response();
    }

    if id == SLOW_USER_ID {
        tokio::time::sleep(Duration::from_secs(2)).await;
    }

    match id {
        1..=3 | SLOW_USER_ID => {
            Json(json!({"userid": id, "name": format!("user{}", id)})).into_response()
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

pub struct FailingPaymentStore;

#[async_trait]
impl PaymentStore for FailingPaymentStore {
    async fn insert(&self, _payment: &Payment) -> Result<(), StoreError> {
        Err(StoreError::Write(sqlx::Error::PoolClosed))
    }

    async fn find_by_sender(&self, _user_id: i64) -> Result<Vec<Payment>, StoreError> {
        Err(StoreError::Connection(sqlx::Error::PoolTimedOut))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Err(StoreError::Connection(sqlx::Error::PoolTimedOut))
    }
}

pub fn app_with(store: Arc<dyn PaymentStore>, users_client: UsersClient) -> Router {
    router(Arc::new(AppState {
        store,
        users_client,
    }))
}

pub async fn app_with_store(store: Arc<dyn PaymentStore>) -> Router {
    let base_url = spawn_users_service().await;
    let users_client = UsersClient::new(&base_url, Duration::from_secs(5)).unwrap();

    app_with(store, users_client)
}

/// An app whose store and users service both fail.
pub fn unavailable_app() -> Router {
    let users_client = UsersClient::new(UNREACHABLE_BASE_URL, Duration::from_secs(1)).unwrap();

    app_with(Arc::new(FailingPaymentStore), users_client)
}
