pub mod controller;
pub mod dtos;
pub mod errors;
pub mod models;
pub mod service;
pub mod store;
pub mod structs;

pub static RESPONSE_VERSION: &str = "v2";
