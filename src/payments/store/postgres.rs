use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    app::util::sqlx::is_connection_error,
    payments::{errors::StoreError, models::payment::Payment},
};

use super::PaymentStore;

#[derive(Debug, Clone)]
pub struct PgPaymentStore {
    pool: PgPool,
}

impl PgPaymentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentStore for PgPaymentStore {
    async fn insert(&self, payment: &Payment) -> Result<(), StoreError> {
        let sqlx_result = sqlx::query(
            r#"
            INSERT INTO payment ("from", "to", amount, currency)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(payment.from)
        .bind(payment.to)
        .bind(payment.amount)
        .bind(&payment.currency)
        .execute(&self.pool)
        .await;

        match sqlx_result {
            Ok(_) => Ok(()),
            Err(e) => Err(to_store_error(e, StoreError::Write)),
        }
    }

    async fn find_by_sender(&self, user_id: i64) -> Result<Vec<Payment>, StoreError> {
        let sqlx_result = sqlx::query_as::<_, Payment>(
            r#"
            SELECT "from", "to", amount, currency FROM payment
            WHERE "from" = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await;

        match sqlx_result {
            Ok(payments) => Ok(payments),
            Err(e) => Err(to_store_error(e, StoreError::Query)),
        }
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let sqlx_result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM payment")
            .fetch_one(&self.pool)
            .await;

        match sqlx_result {
            Ok(count) => Ok(count),
            Err(e) => Err(to_store_error(e, StoreError::Query)),
        }
    }
}

fn to_store_error(e: sqlx::Error, otherwise: fn(sqlx::Error) -> StoreError) -> StoreError {
    if is_connection_error(&e) {
        return StoreError::Connection(e);
    }

    otherwise(e)
}
