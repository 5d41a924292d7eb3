use std::{env, net::SocketAddr, sync::Arc};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::{
    app::{
        envy::Envy,
        util::sqlx::{connect_with_retry, run_migrations},
    },
    payments::store::{postgres::PgPaymentStore, PaymentStore},
    users::client::UsersClient,
};

mod app;
mod payments;
#[cfg(test)]
mod test_util;
mod users;

pub struct AppState {
    pub store: Arc<dyn PaymentStore>,
    pub users_client: UsersClient,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ping", get(app::controller::ping))
        .route("/payments", post(payments::controller::create_payment))
        .route(
            "/payments_from/:userid",
            get(payments::controller::get_payments_from),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    let app_env = envy.app_env.clone().unwrap_or(app_env);
    tracing::info!(%app_env, "environment loaded");

    // store
    let pool = connect_with_retry(&envy.database_url, envy.database_max_connections())
        .await
        .expect("failed to connect to database");

    tracing::info!("connected to db");

    run_migrations(&pool)
        .await
        .expect("failed to run migrations");

    let store: Arc<dyn PaymentStore> = Arc::new(PgPaymentStore::new(pool));

    if envy.should_seed() {
        if let Err(e) = payments::service::seed_sample_payments(store.as_ref()).await {
            tracing::error!(%e, "failed to seed sample payments");
        }
    }

    // users service
    let users_client = UsersClient::new(&envy.users_service, envy.users_service_timeout())
        .expect("failed to build users service client");

    tracing::info!(base_url = users_client.base_url(), "users service configured");

    let state = Arc::new(AppState {
        store,
        users_client,
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST]);

    // app
    let app = router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], envy.port()));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(%e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }

    tracing::info!("shutting down");
}
