//! Typed client for the auth endpoints of the Reelbase backend
//!
//! Requests are plain JSON over `fetch` (via `gloo-net`). Authorized calls send
//! the session credential as a bearer token. A failed call is returned to the
//! calling view as an [`ApiError`]; nothing here retries or touches the session.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::session::{Credential, User};

/// Backend base URL used when the shell carries none
pub const DEFAULT_BACKEND_URL: &str = "/api";

/// Name of the `<meta>` tag the server uses to hand the backend URL to the client
pub const BACKEND_META_NAME: &str = "reelbase-backend";

/// API error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Server error")]
    Network(String),

    #[error("Your session is no longer valid. Please sign in again.")]
    Unauthorized,

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Unexpected response from server: {0}")]
    Decode(String),

    #[error("Backend is not reachable from the server")]
    Unavailable,
}

impl ApiError {
    /// Map a non-success response to an error, preferring the backend's
    /// `message` field over `fallback`
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        let message = serde_json::from_str::<MessageResponse>(body)
            .ok()
            .and_then(|m| m.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        ApiError::Rejected { status, message }
    }
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct ForgotPasswordRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetPasswordRequest<'a> {
    email: &'a str,
    reset_code: &'a str,
    new_password: &'a str,
}

/// Successful login body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: Credential,
}

#[derive(Debug, Default, Deserialize)]
struct MessageResponse {
    #[serde(default)]
    message: Option<String>,
}

/// Body of `PUT /auth/profile`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub username: String,
    #[serde(rename = "profilePic", skip_serializing_if = "Option::is_none")]
    pub profile_pic_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

impl ProfileUpdate {
    /// Attach a password change. Ignored when `new_password` is blank.
    pub fn with_password_change(mut self, current: String, new_password: String) -> Self {
        if !new_password.is_empty() {
            self.current_password = Some(current);
            self.new_password = Some(new_password);
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
}

/// Client for the auth endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendClient {
    base_url: String,
}

impl Default for BackendClient {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        Self {
            base_url: if trimmed.is_empty() {
                DEFAULT_BACKEND_URL.to_string()
            } else {
                trimmed.to_string()
            },
        }
    }

    /// Client for the backend named in the shell's `<meta>` tag
    #[cfg(not(feature = "ssr"))]
    pub fn from_document() -> Self {
        let configured = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| {
                d.query_selector(&format!("meta[name=\"{}\"]", BACKEND_META_NAME))
                    .ok()
                    .flatten()
            })
            .and_then(|meta| meta.get_attribute("content"));

        match configured {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }

    #[cfg(feature = "ssr")]
    pub fn from_document() -> Self {
        Self::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `POST /auth/login`
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            email: email.trim(),
            password,
        };
        self.send(Method::Post, "auth/login", None, Some(&body), "Login failed")
            .await
    }

    /// `POST /auth/register`, returns the backend's confirmation message
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        let body = RegisterRequest {
            username: username.trim(),
            email: email.trim(),
            password,
        };
        let response: MessageResponse = self
            .send(
                Method::Post,
                "auth/register",
                None,
                Some(&body),
                "Registration failed",
            )
            .await?;
        Ok(response
            .message
            .unwrap_or_else(|| "Registration successful".to_string()))
    }

    /// `POST /auth/forgot-password`
    pub async fn forgot_password(&self, email: &str) -> Result<String, ApiError> {
        let body = ForgotPasswordRequest {
            email: email.trim(),
        };
        let response: MessageResponse = self
            .send(
                Method::Post,
                "auth/forgot-password",
                None,
                Some(&body),
                "Error sending reset email",
            )
            .await?;
        Ok(response
            .message
            .unwrap_or_else(|| "Reset code sent".to_string()))
    }

    /// `POST /auth/reset-password`
    pub async fn reset_password(
        &self,
        email: &str,
        reset_code: &str,
        new_password: &str,
    ) -> Result<String, ApiError> {
        let body = ResetPasswordRequest {
            email: email.trim(),
            reset_code: reset_code.trim(),
            new_password,
        };
        let response: MessageResponse = self
            .send(
                Method::Post,
                "auth/reset-password",
                None,
                Some(&body),
                "Reset failed",
            )
            .await?;
        Ok(response
            .message
            .unwrap_or_else(|| "Password reset successful".to_string()))
    }

    /// `GET /auth/profile`
    pub async fn fetch_profile(&self, credential: &Credential) -> Result<User, ApiError> {
        self.send::<(), _>(
            Method::Get,
            "auth/profile",
            Some(credential),
            None,
            "Failed to load profile",
        )
        .await
    }

    /// `PUT /auth/profile`, returns the updated user
    pub async fn update_profile(
        &self,
        credential: &Credential,
        update: &ProfileUpdate,
    ) -> Result<User, ApiError> {
        self.send(
            Method::Put,
            "auth/profile",
            Some(credential),
            Some(update),
            "Error updating profile",
        )
        .await
    }

    #[cfg(not(feature = "ssr"))]
    async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        credential: Option<&Credential>,
        body: Option<&B>,
        fallback: &str,
    ) -> Result<T, ApiError> {
        use gloo_net::http::Request;

        let url = self.endpoint(path);
        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
        };
        if let Some(credential) = credential {
            builder = builder.header("Authorization", &credential.bearer());
        }

        let request = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?,
        };

        let response = request.send().await.map_err(|e| {
            leptos::logging::warn!("Request to {} failed: {}", url, e);
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode_response(status, &text, fallback)
    }

    #[cfg(feature = "ssr")]
    async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        _method: Method,
        _path: &str,
        _credential: Option<&Credential>,
        _body: Option<&B>,
        _fallback: &str,
    ) -> Result<T, ApiError> {
        Err(ApiError::Unavailable)
    }
}

/// Turn a raw response into a typed body or an [`ApiError`]
pub fn decode_response<T: DeserializeOwned>(
    status: u16,
    body: &str,
    fallback: &str,
) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_response(status, body, fallback));
    }
    // Some endpoints answer 2xx with an empty body
    let body = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
