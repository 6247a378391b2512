use thiserror::Error;

/// All errors that can occur in the Tresor client.
#[derive(Debug, Error)]
pub enum TresorError {
    // --- Transport errors ---
    /// The storage service answered a non-success status with an explicit
    /// message. Shown to the user verbatim.
    #[error("{0}")]
    RemoteRejected(String),

    #[error("Could not reach the secret-storage service — check your connection and API settings")]
    TransportUnavailable,

    #[error("Unexpected response from the secret-storage service: {0}")]
    MalformedResponse(String),

    // --- Content errors ---
    /// A single stored secret's content could not be decoded. Recovered
    /// per item during listing; surfaced only when one item is at stake.
    #[error("Secret content could not be decoded: {0}")]
    ContentParse(String),

    // --- Validation errors ---
    #[error("Password does not meet the strength requirements")]
    WeakPassword,

    #[error("Password mismatch — passwords do not match")]
    PasswordMismatch,

    // --- Session errors ---
    #[error("No {0} available — please log in first")]
    SessionMissing(&'static str),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for Tresor results.
pub type Result<T> = std::result::Result<T, TresorError>;
