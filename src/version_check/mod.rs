//! Version check — query crates.io for the latest published version.
//!
//! Behind the `version-check` feature flag. Caches results for 24 hours
//! in `~/.config/tresor/version-check.json`. Never fails — returns `None`
//! on any error.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How long to cache the version check result.
const CACHE_TTL_HOURS: i64 = 24;

/// Cached version check result.
#[derive(Serialize, Deserialize)]
struct CachedVersion {
    latest: String,
    checked_at: DateTime<Utc>,
}

/// Check for the latest version of tresor-cli on crates.io.
///
/// Returns `Some(version_string)` if a newer version is available,
/// or `None` if already up-to-date or on any error.
pub fn check_latest_version(current: &str) -> Option<String> {
    // Try cache first.
    if let Some(cached) = read_cache() {
        let age = Utc::now() - cached.checked_at;
        if age.num_hours() < CACHE_TTL_HOURS {
            return if cached.latest == current {
                None
            } else {
                Some(cached.latest)
            };
        }
    }

    // Fetch from crates.io.
    let latest = fetch_latest_version()?;

    // Cache the result (fire-and-forget).
    let _ = write_cache(&latest);

    if latest == current {
        None
    } else {
        Some(latest)
    }
}

/// Fetch the latest version from the crates.io API.
#[cfg(feature = "version-check")]
fn fetch_latest_version() -> Option<String> {
    let resp = ureq::get("https://crates.io/api/v1/crates/tresor-cli")
        .set(
            "User-Agent",
            &format!("tresor/{}", env!("CARGO_PKG_VERSION")),
        )
        .call()
        .ok()?;

    let body: serde_json::Value = resp.into_json().ok()?;
    let version = body.get("crate")?.get("max_version")?.as_str()?.to_string();

    Some(version)
}

#[cfg(not(feature = "version-check"))]
fn fetch_latest_version() -> Option<String> {
    None
}

/// Path to the cache file.
fn cache_path() -> Option<PathBuf> {
    let config_dir = dirs_cache_path()?;
    Some(config_dir.join("version-check.json"))
}

/// Get the tresor config directory.
fn dirs_cache_path() -> Option<PathBuf> {
    // Use $HOME/.config/tresor on all platforms.
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok()?;
    let path = PathBuf::from(home).join(".config").join("tresor");
    Some(path)
}

/// Read the cached version check.
fn read_cache() -> Option<CachedVersion> {
    let path = cache_path()?;
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write a version check result to cache.
fn write_cache(version: &str) -> Option<()> {
    let path = cache_path()?;

    // Create the directory if needed.
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }

    let cached = CachedVersion {
        latest: version.to_string(),
        checked_at: Utc::now(),
    };

    let content = serde_json::to_string_pretty(&cached).ok()?;
    fs::write(path, content).ok()?;

    Some(())
}
