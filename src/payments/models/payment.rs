use serde::Serialize;
use sqlx::FromRow;

use crate::payments::dtos::create_payment_dto::CreatePaymentDto;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Payment {
    pub from: i64,
    pub to: i64,
    pub amount: i64,
    pub currency: String,
}

impl Payment {
    pub fn new(from: i64, to: i64, amount: i64, currency: &str) -> Self {
        return Self {
            from,
            to,
            amount,
            currency: currency.to_string(),
        };
    }

    pub fn from_dto(dto: &CreatePaymentDto) -> Self {
        return Self::new(dto.from, dto.to, dto.amount, &dto.currency);
    }
}
