use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::sync::{Mutex, MutexGuard};

use crate::{ApiRequest, ApiResponse, ClientError, CredentialStore, Result, Transport};

pub const REFRESH_PATH: &str = "/auth/refresh";

#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access_token: String,
}

/// Attaches the held bearer credential to every request and renews it once
/// when the backend answers unauthorized.
pub struct AuthenticatedClient<T> {
    transport: Arc<T>,
    credential: CredentialStore,
    renewal: Arc<Mutex<()>>,
}

impl<T> Clone for AuthenticatedClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            credential: self.credential.clone(),
            renewal: self.renewal.clone(),
        }
    }
}

impl<T: Transport> AuthenticatedClient<T> {
    pub fn new(transport: T) -> Self {
        Self::with_credential(transport, CredentialStore::new())
    }

    pub fn with_credential(transport: T, credential: CredentialStore) -> Self {
        Self {
            transport: Arc::new(transport),
            credential,
            renewal: Arc::new(Mutex::new(())),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn credential(&self) -> Option<String> {
        self.credential.get()
    }

    pub fn set_credential(&self, token: Option<String>) {
        self.credential.set(token);
    }

    pub fn credential_store(&self) -> &CredentialStore {
        &self.credential
    }

    /// Sends `request`, returning the backend's response as-is.
    ///
    /// An unauthorized response triggers exactly one refresh call; when it
    /// yields a new credential the request is retried once with it. When the
    /// refresh fails the original unauthorized response is returned.
    pub async fn request(&self, request: ApiRequest) -> Result<ApiResponse> {
        let sent_with = self.credential.get();
        let response = self.send(request.clone(), sent_with.clone()).await?;

        if !response.is_unauthorized() || !request.renewable {
            return Ok(response);
        }

        tracing::debug!(path = %request.path, "unauthorized, renewing credential");

        match self.renew(sent_with.as_deref()).await {
            Some(token) => self.send(request, Some(token)).await,
            None => Ok(response),
        }
    }

    /// Sends `request` and decodes a successful JSON body.
    pub async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R> {
        let response = check(self.request(request).await?)?;

        Ok(response.json()?)
    }

    /// Sends `request` and discards a successful body.
    pub async fn execute(&self, request: ApiRequest) -> Result<()> {
        check(self.request(request).await?)?;

        Ok(())
    }

    pub(crate) async fn renewal_guard(&self) -> MutexGuard<'_, ()> {
        self.renewal.lock().await
    }

    async fn send(&self, mut request: ApiRequest, bearer: Option<String>) -> Result<ApiResponse> {
        request.bearer = bearer;

        Ok(self.transport.send(request).await?)
    }

    /// Single renewal attempt, serialized so simultaneous unauthorized
    /// requests share one refresh call.
    ///
    /// A credential that changed while waiting for the guard is not renewed
    /// again: a new one is reused and a cleared one (logout) stays cleared.
    async fn renew(&self, stale: Option<&str>) -> Option<String> {
        let _guard = self.renewal_guard().await;

        let current = self.credential.get();
        if current.as_deref() != stale {
            match current {
                Some(_) => tracing::debug!("credential already renewed by a concurrent request"),
                None => tracing::debug!("credential cleared while waiting, not renewing"),
            }
            return current;
        }

        let refresh = ApiRequest::post(REFRESH_PATH).without_renewal();
        let response = match self.transport.send(refresh).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, "credential renewal failed");
                return None;
            }
        };

        if !response.is_success() {
            tracing::info!(status = %response.status, "credential renewal rejected");
            return None;
        }

        match response.json::<RefreshResponse>() {
            Ok(body) => {
                self.credential.set(Some(body.access_token.to_owned()));
                tracing::debug!("credential renewed");
                Some(body.access_token)
            }
            Err(err) => {
                tracing::warn!(error = %err, "malformed renewal response");
                None
            }
        }
    }
}

/// Maps a non-success response to the matching [`ClientError`].
pub fn check(response: ApiResponse) -> Result<ApiResponse> {
    if response.is_success() {
        return Ok(response);
    }

    if response.is_unauthorized() {
        return Err(ClientError::Unauthorized);
    }

    Err(ClientError::Status {
        status: response.status,
        message: response.error_message(),
    })
}
