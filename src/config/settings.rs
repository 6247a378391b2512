use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TresorError};

/// API endpoint configuration, loaded from `.tresor.toml`.
///
/// Every field has a sensible default so the client works out-of-the-box
/// against a local service without any config file at all. Environment
/// variables (`TRESOR_API_*`) override file values; both are read once
/// at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// URL scheme of the storage service (e.g. "http" or "https").
    #[serde(default = "default_api_protocol")]
    pub api_protocol: String,

    /// Hostname of the storage service.
    #[serde(default = "default_api_host")]
    pub api_host: String,

    /// TCP port of the storage service. Omit to use the scheme default.
    #[serde(default = "default_api_port")]
    pub api_port: Option<u16>,

    /// Path prefix of the API (e.g. "/api").
    #[serde(default = "default_api_path")]
    pub api_path: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_api_protocol() -> String {
    "http".to_string()
}

fn default_api_host() -> String {
    "localhost".to_string()
}

fn default_api_port() -> Option<u16> {
    Some(8080)
}

fn default_api_path() -> String {
    "/api".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_protocol: default_api_protocol(),
            api_host: default_api_host(),
            api_port: default_api_port(),
            api_path: default_api_path(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for.
    const FILE_NAME: &'static str = ".tresor.toml";

    /// Load settings from `<config_dir>/.tresor.toml`, then apply
    /// `TRESOR_API_*` environment overrides.
    ///
    /// If the file does not exist, defaults are used. If the file exists
    /// but cannot be parsed, an error is returned.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let mut settings = Self::load_file(config_dir)?;
        settings.apply_env_overrides(|name| std::env::var(name).ok());
        Ok(settings)
    }

    /// Load settings from the config file only (no env overrides).
    fn load_file(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            TresorError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Apply environment-variable overrides via an injectable lookup,
    /// so tests don't have to mutate the process environment.
    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(protocol) = lookup("TRESOR_API_PROTOCOL") {
            self.api_protocol = protocol;
        }
        if let Some(host) = lookup("TRESOR_API_HOST") {
            self.api_host = host;
        }
        if let Some(port) = lookup("TRESOR_API_PORT") {
            // An empty value explicitly clears the port.
            if port.is_empty() {
                self.api_port = None;
            } else if let Ok(port) = port.parse::<u16>() {
                self.api_port = Some(port);
            }
        }
        if let Some(path) = lookup("TRESOR_API_PATH") {
            self.api_path = path;
        }
    }

    /// Compose the base URL of the storage service:
    /// `protocol://host[:port]path`.
    pub fn base_url(&self) -> String {
        let port_part = match self.api_port {
            Some(port) => format!(":{port}"),
            None => String::new(),
        };
        format!(
            "{}://{}{}{}",
            self.api_protocol, self.api_host, port_part, self.api_path
        )
    }
}

// ── Tests ────────────────────────────────────────────────────────────
