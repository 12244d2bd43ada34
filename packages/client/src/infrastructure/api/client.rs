//! Authenticated JSON transport.
//!
//! Every request carries the session's bearer token; there is no global
//! token storage. Non-2xx responses become typed errors before any body
//! decoding is attempted.

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::dto::{LoginRequestDto, LoginResponseDto};
use super::error::ApiError;

/// An authenticated session against one API base URL.
#[derive(Debug, Clone)]
pub struct Session {
    /// Base URL, e.g. `http://localhost:24680/api`
    pub base_url: String,
    /// Bearer token attached to every request
    pub token: String,
}

impl Session {
    /// Build a session from an already-issued token.
    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Log in with email/password and build a session from the issued token.
    pub async fn login(base_url: &str, email: &str, password: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::new();
        let response = http
            .post(format!("{base_url}/auth/login"))
            .json(&LoginRequestDto {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;

        let body: LoginResponseDto = check_status(response)?.json().await?;
        Ok(Self::with_token(base_url, body.token))
    }
}

/// JSON client bound to a session.
pub struct ApiClient {
    http: reqwest::Client,
    session: Session,
}

impl ApiClient {
    /// Create a client for the given session.
    pub fn new(session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            session,
        }
    }

    /// The identity-independent part of the session (base URL, token).
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.session.base_url)
    }

    /// `GET <path>` and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(&self.session.token)
            .send()
            .await?;
        Ok(check_status(response)?.json().await?)
    }

    /// `POST <path>` with a JSON body and decode the JSON response.
    pub async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(&self.session.token)
            .json(body)
            .send()
            .await?;
        Ok(check_status(response)?.json().await?)
    }

    /// `PUT <path>` with a JSON body and decode the JSON response.
    pub async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .http
            .put(self.url(path))
            .bearer_auth(&self.session.token)
            .json(body)
            .send()
            .await?;
        Ok(check_status(response)?.json().await?)
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized),
        status => Err(ApiError::Status(status.as_u16())),
    }
}
