//! Credential lifecycle: login, registration and logout.

use serde::{Deserialize, Serialize};

use crate::{ApiRequest, AuthenticatedClient, Result, Transport, check};

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGOUT_PATH: &str = "/auth/logout";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

#[derive(Serialize)]
struct LoginInput<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterInput<'a> {
    email: &'a str,
    password: &'a str,
    username: &'a str,
}

impl<T: Transport> AuthenticatedClient<T> {
    /// Authenticates and replaces the held credential with the issued token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let request = ApiRequest::post(LOGIN_PATH)
            .json(&LoginInput {
                username: email,
                password,
            })?
            .without_renewal();

        let response: LoginResponse = check(self.request(request).await?)?.json()?;
        self.set_credential(Some(response.access_token.to_owned()));

        tracing::info!(email, "logged in");

        Ok(response)
    }

    /// Creates an account. The held credential is left untouched.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<UserInfo> {
        let request = ApiRequest::post(REGISTER_PATH)
            .json(&RegisterInput {
                email,
                password,
                username,
            })?
            .without_renewal();

        let user = self.fetch(request).await?;
        tracing::info!(email, "registered");

        Ok(user)
    }

    /// Clears the held credential, then tells the backend to drop the session.
    ///
    /// Notifying the backend is best effort: a failure is logged and the
    /// local credential stays cleared. The renewal guard is held throughout,
    /// so a request that was in flight cannot store a renewed credential
    /// afterwards.
    pub async fn logout(&self) {
        let _guard = self.renewal_guard().await;
        self.set_credential(None);

        let request = ApiRequest::post(LOGOUT_PATH).without_renewal();
        match self.request(request).await {
            Ok(response) if response.is_success() => tracing::info!("logged out"),
            Ok(response) => tracing::warn!(status = %response.status, "logout not acknowledged"),
            Err(err) => tracing::warn!(error = %err, "logout notification failed"),
        }
    }
}
