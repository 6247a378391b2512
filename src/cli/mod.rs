//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use clap::Parser;

use crate::api::ApiClient;
use crate::config::Settings;
use crate::errors::Result;
use crate::session::{resolve_master_password, Session};

/// Tresor CLI: client for the Tresor secret-storage service.
#[derive(Parser)]
#[command(
    name = "tresor",
    about = "Client for the Tresor secret-storage service",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Account email address
    #[arg(long, env = "TRESOR_EMAIL", global = true)]
    pub email: Option<String>,

    /// User id assigned by the storage service at registration
    #[arg(long, env = "TRESOR_USER_ID", global = true)]
    pub user_id: Option<i64>,

    /// Directory containing .tresor.toml (default: current directory)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Register a new account (enforces password policy)
    Register {
        /// First name
        #[arg(long)]
        first_name: Option<String>,
        /// Last name
        #[arg(long)]
        last_name: Option<String>,
    },

    /// Submit a new secret
    Add {
        #[command(subcommand)]
        kind: AddKind,
    },

    /// List your secrets, grouped by kind
    List,

    /// Show version and check for updates
    Version,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

/// The kinds of secret that can be submitted.
#[derive(clap::Subcommand)]
pub enum AddKind {
    /// A login credential (username, password, url)
    Credential {
        /// Login username
        #[arg(long)]
        username: Option<String>,
        /// Site or service URL; doubles as the secret title
        #[arg(long)]
        url: Option<String>,
        /// Secret title (default: the url, or "Credential")
        #[arg(long)]
        title: Option<String>,
    },

    /// A free-text note
    Note {
        /// Note title; doubles as the secret title
        #[arg(long)]
        title: Option<String>,
        /// Note body (omit to type interactively)
        #[arg(long)]
        content: Option<String>,
    },

    /// A payment card
    Card {
        /// Card number
        #[arg(long)]
        number: Option<String>,
        /// Expiration (e.g. 12/27)
        #[arg(long)]
        expiration: Option<String>,
        /// Secret title (default: "Card")
        #[arg(long)]
        title: Option<String>,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load settings and build the API client from them.
pub fn api_client(cli: &Cli) -> Result<ApiClient> {
    let settings = load_settings(cli)?;
    Ok(ApiClient::new(settings.base_url()))
}

/// Load settings from `--config` (or the current directory) plus
/// `TRESOR_API_*` environment overrides.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let dir = match &cli.config {
        Some(dir) => std::path::PathBuf::from(dir),
        None => std::env::current_dir()?,
    };
    Settings::load(&dir)
}

/// Resolve the full session context (user id, email, master password).
///
/// Fails with `SessionMissing` before any network traffic when a part
/// is absent. Identity parts are checked before the password so a
/// missing email is reported without an interactive prompt ever
/// appearing.
pub fn resolve_session(cli: &Cli) -> Result<Session> {
    let user_id = cli
        .user_id
        .ok_or(crate::errors::TresorError::SessionMissing("user id"))?;
    let email = match cli.email.as_deref() {
        Some(email) if !email.is_empty() => email.to_string(),
        _ => return Err(crate::errors::TresorError::SessionMissing("email")),
    };

    let master_password = resolve_master_password()?;
    Session::new(Some(user_id), Some(email), master_password)
}
