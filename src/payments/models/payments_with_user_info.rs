use serde::Serialize;

use crate::{payments::RESPONSE_VERSION, users::models::user::User};

use super::payment::Payment;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentsWithUserInfo {
    pub version: String,
    pub payments: Vec<Payment>,
    pub user: User,
}

impl PaymentsWithUserInfo {
    pub fn new(payments: Vec<Payment>, user: User) -> Self {
        return Self {
            version: RESPONSE_VERSION.to_string(),
            payments,
            user,
        };
    }
}
