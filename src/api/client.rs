//! Transport client — blocking HTTP calls to the storage service.
//!
//! Every call is one-shot: no retry, no backoff, no client-imposed
//! timeout. The client never interprets secret content; payload strings
//! pass through opaque in both directions. Transport and HTTP failures
//! collapse into the crate error taxonomy so callers see exactly one
//! error channel.

use serde_json::Value;

use crate::api::types::{rejection_message, NewSecretRequest, NewUserRequest, StoredSecret};
use crate::errors::{Result, TresorError};
use crate::session::Session;

/// Client for the Tresor storage service HTTP API.
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client for the service at `base_url`
    /// (e.g. `http://localhost:8080/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Submit a new secret.
    ///
    /// `content` must already be serialized by the secret codec. On
    /// success the service's stored-secret representation (with its
    /// assigned id) is returned.
    pub fn create_secret(
        &self,
        session: &Session,
        title: &str,
        content: String,
    ) -> Result<StoredSecret> {
        let request = NewSecretRequest {
            user_id: session.user_id,
            title: title.to_string(),
            email: session.email.clone(),
            encrypt_password: session.master_password.to_string(),
            content,
        };

        let response = ureq::post(&format!("{}/secrets", self.base_url))
            .set("User-Agent", USER_AGENT)
            .send_json(&request)
            .map_err(into_tresor_error)?;

        let body: Value = response
            .into_json()
            .map_err(|e| TresorError::MalformedResponse(format!("create secret: {e}")))?;

        serde_json::from_value(body)
            .map_err(|e| TresorError::MalformedResponse(format!("create secret: {e}")))
    }

    /// Fetch all secrets belonging to the session's user.
    pub fn secrets_for_user(&self, session: &Session) -> Result<Vec<StoredSecret>> {
        let url = format!("{}/secrets/user/{}", self.base_url, session.user_id);
        let response = ureq::get(&url)
            .set("User-Agent", USER_AGENT)
            .call()
            .map_err(into_tresor_error)?;

        let body: Value = response
            .into_json()
            .map_err(|e| TresorError::MalformedResponse(format!("secret listing: {e}")))?;

        if !body.is_array() {
            return Err(TresorError::MalformedResponse(
                "secret listing is not an array".to_string(),
            ));
        }

        serde_json::from_value(body)
            .map_err(|e| TresorError::MalformedResponse(format!("secret listing: {e}")))
    }

    /// Register a new user account.
    ///
    /// Password policy is the caller's responsibility and must have been
    /// enforced before this call; the service applies its own validation
    /// on top and rejections surface as `RemoteRejected`.
    pub fn register_user(&self, registration: &NewUserRequest) -> Result<()> {
        ureq::post(&format!("{}/users", self.base_url))
            .set("User-Agent", USER_AGENT)
            .send_json(registration)
            .map_err(into_tresor_error)?;

        Ok(())
    }
}

const USER_AGENT: &str = concat!("tresor/", env!("CARGO_PKG_VERSION"));

/// Map a ureq failure into the crate taxonomy.
///
/// A non-success status with a readable `{message}` body surfaces the
/// server's own message; everything else — connection failures, DNS,
/// unreadable error bodies — is the generic transport failure.
fn into_tresor_error(error: ureq::Error) -> TresorError {
    match error {
        ureq::Error::Status(_code, response) => match response.into_json::<Value>() {
            Ok(body) => match rejection_message(&body) {
                Some(message) => TresorError::RemoteRejected(message),
                None => TresorError::TransportUnavailable,
            },
            Err(_) => TresorError::TransportUnavailable,
        },
        _ => TresorError::TransportUnavailable,
    }
}
