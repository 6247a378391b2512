//! Session context — the current user's identity and master password.
//!
//! The session is resolved once per invocation and passed explicitly
//! into every operation that needs identity. Nothing in the client
//! mutates it after resolution, and nothing holds it as a global.

use zeroize::Zeroizing;

use crate::errors::{Result, TresorError};

/// The caller's identity against the storage service.
///
/// `master_password` is the password the service uses to derive the
/// content-encryption key server-side; it is wiped from memory on drop.
pub struct Session {
    /// User id assigned by the storage service at registration.
    pub user_id: i64,

    /// Account email address.
    pub email: String,

    /// Master password for server-side content encryption.
    pub master_password: Zeroizing<String>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .field("master_password", &"<redacted>")
            .finish()
    }
}

impl Session {
    /// Build a session from already-resolved parts, verifying that each
    /// required part is present.
    ///
    /// This is the precondition check behind every network call: a
    /// missing part is a `SessionMissing` failure, never an internal
    /// error further down.
    pub fn new(
        user_id: Option<i64>,
        email: Option<String>,
        master_password: Zeroizing<String>,
    ) -> Result<Self> {
        let user_id = user_id.ok_or(TresorError::SessionMissing("user id"))?;

        let email = match email {
            Some(email) if !email.is_empty() => email,
            _ => return Err(TresorError::SessionMissing("email")),
        };

        if master_password.is_empty() {
            return Err(TresorError::SessionMissing("master password"));
        }

        Ok(Self {
            user_id,
            email,
            master_password,
        })
    }
}

/// Get the master password, trying in order:
/// 1. `TRESOR_MASTER_PASSWORD` env var (scripting/CI)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn resolve_master_password() -> Result<Zeroizing<String>> {
    // 1. Check the environment variable first.
    if let Ok(pw) = std::env::var("TRESOR_MASTER_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    // 2. Fall back to interactive prompt.
    let pw = dialoguer::Password::new()
        .with_prompt("Enter master password")
        .interact()
        .map_err(|e| TresorError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}
