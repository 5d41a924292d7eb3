use std::time::Duration;

use serde::Deserialize;

pub static DEFAULT_PORT: u16 = 8000;
pub static DEFAULT_USERS_SERVICE_TIMEOUT_SECS: u64 = 10;
pub static DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: Option<String>,
    pub port: Option<u16>,

    pub database_url: String,
    pub database_max_connections: Option<u32>,
    pub seed_sample_data: Option<bool>,

    pub users_service: String,
    pub users_service_timeout_secs: Option<u64>,
}

impl Envy {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
            .unwrap_or(DEFAULT_DATABASE_MAX_CONNECTIONS)
    }

    pub fn users_service_timeout(&self) -> Duration {
        Duration::from_secs(
            self.users_service_timeout_secs
                .unwrap_or(DEFAULT_USERS_SERVICE_TIMEOUT_SECS),
        )
    }

    pub fn should_seed(&self) -> bool {
        self.seed_sample_data.unwrap_or(false)
    }
}
