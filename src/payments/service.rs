use futures::future::try_join;

use crate::users::client::UsersClient;

use super::{
    dtos::create_payment_dto::CreatePaymentDto,
    errors::{QueryError, StoreError},
    models::{payment::Payment, payments_with_user_info::PaymentsWithUserInfo},
    store::PaymentStore,
};

/// Payments written by `seed_sample_payments`.
pub fn sample_payments() -> Vec<Payment> {
    vec![
        Payment::new(1, 2, 100, "$"),
        Payment::new(1, 2, 200, "$"),
        Payment::new(2, 1, 150, "$"),
    ]
}

pub async fn get_payments_by_user(
    user_id: i64,
    store: &dyn PaymentStore,
    users_client: &UsersClient,
) -> Result<PaymentsWithUserInfo, QueryError> {
    // neither lookup needs the other's result
    let payments = async {
        store
            .find_by_sender(user_id)
            .await
            .map_err(QueryError::from)
    };
    let user = async { users_client.fetch_user(user_id).await.map_err(QueryError::from) };

    let (payments, user) = try_join(payments, user).await?;

    tracing::debug!(user_id, count = payments.len(), "assembled payments");

    Ok(PaymentsWithUserInfo::new(payments, user))
}

pub async fn create_payment(
    dto: &CreatePaymentDto,
    store: &dyn PaymentStore,
) -> Result<Payment, StoreError> {
    let payment = Payment::from_dto(dto);

    store.insert(&payment).await?;

    Ok(payment)
}

/// Inserts the sample payments unless the store already holds records.
/// Returns how many were written.
pub async fn seed_sample_payments(store: &dyn PaymentStore) -> Result<usize, StoreError> {
    let existing = store.count().await?;

    if existing > 0 {
        tracing::info!(existing, "payment store not empty, skipping seed");
        return Ok(0);
    }

    let payments = sample_payments();

    for payment in &payments {
        store.insert(payment).await?;
    }

    tracing::info!(count = payments.len(), "seeded sample payments");

    Ok(payments.len())
}
