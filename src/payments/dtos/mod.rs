pub mod create_payment_dto;
