// HTTP implementation of credential submission
use crate::application::session::{AuthError, AuthGateway};
use crate::infrastructure::http_client::normalize_base_url;
use async_trait::async_trait;

/// Body the backend sends on a successful login. Failed logins also answer 200, with the
/// reason as plain text.
const LOGIN_SUCCESS_BODY: &str = "Logged in successfully";

#[derive(Debug, Clone)]
pub struct HttpAuthGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthGateway {
    /// `client` must be the same one the product service uses so the session cookie is shared.
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: normalize_base_url(base_url),
        }
    }

    async fn submit(&self, path: &str, form: &[(&str, &str)]) -> Result<String, AuthError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .form(form)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(path, status = status.as_u16(), "auth endpoint responded");

        if !status.is_success() {
            let reason = if body.trim().is_empty() {
                format!("request failed with status {}", status.as_u16())
            } else {
                body.trim().to_string()
            };
            return Err(AuthError::Rejected(reason));
        }
        Ok(body)
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let body = self
            .submit("/login", &[("username", username), ("password", password)])
            .await?;
        if body.trim() != LOGIN_SUCCESS_BODY {
            return Err(AuthError::Rejected(body.trim().to_string()));
        }
        tracing::info!(username, "logged in");
        Ok(())
    }

    async fn register(&self, username: &str, email: &str, password: &str) -> Result<(), AuthError> {
        self.submit(
            "/register",
            &[
                ("username", username),
                ("email", email),
                ("password", password),
            ],
        )
        .await?;
        tracing::info!(username, "registered");
        Ok(())
    }
}
