pub mod reqwest;
pub mod sqlx;
