use std::time::Duration;

use crate::app::util::reqwest::{build_client, normalize_base_url};

use super::{errors::ClientError, models::user::User};

/// Looks up user profiles on the external users service.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct UsersClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl UsersClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        match build_client(timeout) {
            Ok(http_client) => Ok(Self {
                base_url: normalize_base_url(base_url),
                http_client,
            }),
            Err(e) => Err(ClientError::Transport(e)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_user(&self, user_id: i64) -> Result<User, ClientError> {
        let url = format!("{}/user/{}", self.base_url, user_id);
        tracing::debug!(%url, "fetching user");

        let res = match self.http_client.get(&url).send().await {
            Ok(res) => res,
            Err(e) => return Err(classify(e)),
        };

        let status = res.status();
        if !status.is_success() {
            tracing::warn!(user_id, %status, "users service rejected lookup");
            return Err(ClientError::Status(status));
        }

        let text = match res.text().await {
            Ok(text) => text,
            Err(e) => return Err(classify(e)),
        };

        match serde_json::from_str::<User>(&text) {
            Ok(user) => Ok(user),
            Err(e) => {
                tracing::warn!(user_id, %text, "users service returned malformed body");
                Err(ClientError::Body(e))
            }
        }
    }
}

fn classify(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        return ClientError::Timeout;
    }

    ClientError::Transport(e)
}
