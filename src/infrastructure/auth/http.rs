//! HTTP login client

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::application::errors::AuthError;
use crate::domain::entities::{AuthData, AuthResponse};
use crate::domain::traits::Authenticator;

/// Login request body
#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Authenticates by POSTing credentials to the login endpoint
pub struct HttpAuthenticator {
    url: String,
    client: Client,
}

impl HttpAuthenticator {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Authenticator for HttpAuthenticator {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        let response = self.client
            .post(&self.url)
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(|e| AuthError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();

        // Only the success body carries data; anything unreadable counts as none
        let data = match response.json::<AuthData>().await {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::debug!("Login response without pseudo ({}): {}", status, e);
                None
            }
        };

        Ok(AuthResponse { status, data })
    }
}
