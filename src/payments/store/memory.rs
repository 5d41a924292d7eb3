use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::payments::{errors::StoreError, models::payment::Payment};

use super::PaymentStore;

#[derive(Debug, Default)]
pub struct MemoryPaymentStore {
    payments: RwLock<Vec<Payment>>,
}

impl MemoryPaymentStore {
    pub fn with_payments(payments: Vec<Payment>) -> Self {
        Self {
            payments: RwLock::new(payments),
        }
    }
}

#[async_trait]
impl PaymentStore for MemoryPaymentStore {
    async fn insert(&self, payment: &Payment) -> Result<(), StoreError> {
        self.payments.write().await.push(payment.clone());
        Ok(())
    }

    async fn find_by_sender(&self, user_id: i64) -> Result<Vec<Payment>, StoreError> {
        let payments = self.payments.read().await;

        Ok(payments
            .iter()
            .filter(|payment| payment.from == user_id)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.payments.read().await.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payments::service::sample_payments;

    #[tokio::test]
    async fn find_by_sender_returns_exactly_their_payments() {
        let store = MemoryPaymentStore::with_payments(sample_payments());

        let from_one = store.find_by_sender(1).await.unwrap();
        let from_two = store.find_by_sender(2).await.unwrap();

        assert_eq!(
            from_one,
            vec![Payment::new(1, 2, 100, "$"), Payment::new(1, 2, 200, "$")]
        );
        assert_eq!(from_two, vec![Payment::new(2, 1, 150, "$")]);
        assert!(store.find_by_sender(3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn inserted_payment_reads_back_unchanged() {
        let store = MemoryPaymentStore::default();
        let payment = Payment::new(7, 8, 42, "€");

        store.insert(&payment).await.unwrap();

        assert_eq!(store.find_by_sender(7).await.unwrap(), vec![payment]);
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
