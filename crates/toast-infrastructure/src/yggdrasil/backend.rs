//! YggdrasilBackend - credential verification against a Yggdrasil-compatible
//! authentication server.

use super::types::{Agent, AuthenticateRequest, AuthenticateResponse, ErrorResponse};
use async_trait::async_trait;
use reqwest::Client;
use toast_core::auth::{AuthBackend, AuthError, AuthResult};
use toast_core::config::AuthSettings;
use toast_core::session::Session;
use uuid::Uuid;

const UNAVAILABLE_MESSAGE: &str = "Cannot contact authentication server";

/// [`AuthBackend`] that talks to `{server_url}/authenticate`.
#[derive(Clone)]
pub struct YggdrasilBackend {
    client: Client,
    server_url: String,
    client_token: String,
    initial_username: String,
}

impl YggdrasilBackend {
    /// Creates a backend from the auth settings.
    ///
    /// # Arguments
    ///
    /// * `settings` - Server URL and request timeout
    /// * `initial_username` - Username of the offline session the process starts with
    pub fn new(settings: &AuthSettings, initial_username: impl Into<String>) -> AuthResult<Self> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|err| AuthError::other(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            server_url: settings.server_url.trim_end_matches('/').to_string(),
            client_token: Uuid::new_v4().simple().to_string(),
            initial_username: initial_username.into(),
        })
    }

    fn authenticate_url(&self) -> String {
        format!("{}/authenticate", self.server_url)
    }
}

#[async_trait]
impl AuthBackend for YggdrasilBackend {
    fn current_session(&self) -> Session {
        Session::offline(self.initial_username.clone())
    }

    async fn verify_online(&self, username: &str, password: &str) -> AuthResult<Session> {
        let body = AuthenticateRequest {
            agent: Agent::default(),
            username,
            password,
            client_token: &self.client_token,
            request_user: true,
        };

        tracing::debug!("[Yggdrasil] Authenticating {} at {}", username, self.server_url);

        let response = self
            .client
            .post(self.authenticate_url())
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(map_transport_error)?;

        parse_authenticate_response(status, &text)
    }
}

fn map_transport_error(err: reqwest::Error) -> AuthError {
    if err.is_timeout() {
        AuthError::Timeout
    } else {
        tracing::debug!("[Yggdrasil] Transport error: {}", err);
        AuthError::unavailable(UNAVAILABLE_MESSAGE)
    }
}

/// Turns an `/authenticate` reply into a session or a typed failure.
pub(crate) fn parse_authenticate_response(status: u16, body: &str) -> AuthResult<Session> {
    if (200..300).contains(&status) {
        let parsed: AuthenticateResponse = serde_json::from_str(body).map_err(|err| {
            AuthError::other(format!("Malformed authentication response: {err}"))
        })?;

        return parsed
            .selected_profile
            .map(|profile| Session::online(profile.name))
            .ok_or_else(|| AuthError::other("No profile selected"));
    }

    Err(map_error_response(status, body))
}

fn map_error_response(status: u16, body: &str) -> AuthError {
    let Ok(error) = serde_json::from_str::<ErrorResponse>(body) else {
        let body = body.trim();
        let message = if body.is_empty() {
            format!("HTTP {status}")
        } else {
            body.to_string()
        };
        return AuthError::server(status, message);
    };

    let message = error.error_message.unwrap_or_else(|| error.error.clone());

    if error.cause.as_deref() == Some("UserMigratedException") {
        return AuthError::InvalidCredentials;
    }

    match error.error.as_str() {
        "ForbiddenOperationException" | "UserMigratedException" => AuthError::InvalidCredentials,
        "InsufficientPrivilegesException" => AuthError::InsufficientPrivileges(message),
        _ => AuthError::server(status, message),
    }
}
