#![allow(dead_code)]

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use cookapp_client::{ApiRequest, ApiResponse, StatusCode, Transport, TransportError};

/// In-memory backend that accepts exactly one bearer token at a time.
pub struct FakeBackend {
    valid_token: Mutex<String>,
    refresh: RefreshBehavior,
    logout: LogoutBehavior,
    requests: Mutex<Vec<ApiRequest>>,
    refresh_calls: AtomicUsize,
    yield_on_send: bool,
}

#[derive(Clone, Copy, PartialEq)]
pub enum RefreshBehavior {
    /// Issue `fresh-<n>` and accept it from then on.
    Succeed,
    /// Answer 401.
    Reject,
    /// Answer 200 with a body that is not a token.
    Garbage,
    /// Fail at the transport level.
    Unreachable,
    /// Issue a token that the backend keeps rejecting.
    IssueUseless,
}

#[derive(Clone, Copy, PartialEq)]
pub enum LogoutBehavior {
    /// Answer 200.
    Acknowledge,
    /// Answer 500.
    Fail,
    /// Fail at the transport level.
    Unreachable,
}

impl FakeBackend {
    pub fn new(valid_token: &str, refresh: RefreshBehavior) -> Self {
        Self {
            valid_token: Mutex::new(valid_token.to_owned()),
            refresh,
            logout: LogoutBehavior::Acknowledge,
            requests: Mutex::new(Vec::new()),
            refresh_calls: AtomicUsize::new(0),
            yield_on_send: false,
        }
    }

    /// Suspend on every send so concurrent requests interleave.
    pub fn interleaved(mut self) -> Self {
        self.yield_on_send = true;
        self
    }

    pub fn with_logout(mut self, logout: LogoutBehavior) -> Self {
        self.logout = logout;
        self
    }

    pub fn refresh_calls(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> usize {
        self.requests().iter().filter(|r| r.path == path).count()
    }

    fn handle_logout(&self) -> Result<ApiResponse, TransportError> {
        match self.logout {
            LogoutBehavior::Acknowledge => Ok(ApiResponse::new(
                StatusCode::OK,
                r#"{"message": "Successfully logged out"}"#,
            )),
            LogoutBehavior::Fail => Ok(ApiResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                r#"{"detail": "Internal Server Error"}"#,
            )),
            LogoutBehavior::Unreachable => {
                Err(TransportError::Unavailable("connection reset".to_owned()))
            }
        }
    }

    fn handle_refresh(&self) -> Result<ApiResponse, TransportError> {
        let n = self.refresh_calls.fetch_add(1, Ordering::SeqCst) + 1;

        match self.refresh {
            RefreshBehavior::Succeed => {
                let token = format!("fresh-{n}");
                *self.valid_token.lock().unwrap() = token.clone();
                Ok(ApiResponse::new(
                    StatusCode::OK,
                    format!(r#"{{"access_token": "{token}", "token_type": "bearer"}}"#),
                ))
            }
            RefreshBehavior::IssueUseless => Ok(ApiResponse::new(
                StatusCode::OK,
                format!(r#"{{"access_token": "useless-{n}", "token_type": "bearer"}}"#),
            )),
            RefreshBehavior::Reject => Ok(ApiResponse::new(
                StatusCode::UNAUTHORIZED,
                r#"{"detail": "Missing refresh token"}"#,
            )),
            RefreshBehavior::Garbage => Ok(ApiResponse::new(StatusCode::OK, "<html>")),
            RefreshBehavior::Unreachable => {
                Err(TransportError::Unavailable("connection refused".to_owned()))
            }
        }
    }
}

#[async_trait]
impl Transport for FakeBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());

        if self.yield_on_send {
            tokio::task::yield_now().await;
        }

        if request.path == "/auth/refresh" {
            return self.handle_refresh();
        }

        if request.path == "/auth/logout" {
            return self.handle_logout();
        }

        let valid = self.valid_token.lock().unwrap().clone();
        if request.bearer.as_deref() != Some(valid.as_str()) {
            return Ok(ApiResponse::new(
                StatusCode::UNAUTHORIZED,
                r#"{"detail": "Unauthorized"}"#,
            ));
        }

        Ok(ApiResponse::new(
            StatusCode::OK,
            format!(r#"{{"path": "{}"}}"#, request.path),
        ))
    }
}
