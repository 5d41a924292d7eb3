use async_trait::async_trait;

use super::{errors::StoreError, models::payment::Payment};

#[cfg(test)]
pub mod memory;
pub mod postgres;

/// Persistence for payment records.
///
/// Implementations are shared by every request and must tolerate concurrent
/// use.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Writes one payment. No deduplication.
    async fn insert(&self, payment: &Payment) -> Result<(), StoreError>;

    /// Every payment whose `from` equals `user_id`, in store order. No match
    /// is an empty vec, not an error.
    async fn find_by_sender(&self, user_id: i64) -> Result<Vec<Payment>, StoreError>;

    async fn count(&self) -> Result<i64, StoreError>;
}
