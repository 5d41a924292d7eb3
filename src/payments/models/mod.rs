pub mod payment;
pub mod payments_with_user_info;
