use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePaymentDto {
    #[validate(range(min = 0, message = "from must be a non-negative user id."))]
    pub from: i64,
    #[validate(range(min = 0, message = "to must be a non-negative user id."))]
    pub to: i64,
    pub amount: i64,
    #[validate(length(
        min = 1,
        max = 8,
        message = "currency must be between 1 and 8 characters."
    ))]
    pub currency: String,
}
