//! `tresor add` — submit a new secret to the storage service.
//!
//! Collects the typed fields for one secret kind, applies the title
//! default, encodes the content, and submits it under the resolved
//! session.

use std::io::{self, IsTerminal, Read};

use crate::cli::{api_client, output, resolve_session, AddKind, Cli};
use crate::errors::{Result, TresorError};
use crate::secret::{codec, SecretContent};

/// Execute the `add` command for one secret kind.
pub fn execute(cli: &Cli, kind: &AddKind) -> Result<()> {
    let (title, content) = match kind {
        AddKind::Credential {
            username,
            url,
            title,
        } => {
            let username = required_text(username.as_deref(), "username")?;
            let password = secret_value("password")?;
            let url = required_text(url.as_deref(), "url")?;

            // Use the URL as the title, or fall back to the kind label.
            let title = match title.as_deref() {
                Some(t) if !t.is_empty() => t.to_string(),
                _ if !url.is_empty() => url.clone(),
                _ => "Credential".to_string(),
            };

            (title, SecretContent::credential(&username, &password, &url))
        }

        AddKind::Note { title, content } => {
            let note_title = required_text(title.as_deref(), "title")?;
            let body = required_text(content.as_deref(), "content")?;

            let title = if note_title.is_empty() {
                "Note".to_string()
            } else {
                note_title.clone()
            };

            (title, SecretContent::note(&note_title, &body))
        }

        AddKind::Card {
            number,
            expiration,
            title,
        } => {
            let number = required_text(number.as_deref(), "card number")?;
            let expiration = required_text(expiration.as_deref(), "expiration")?;
            let cvv = secret_value("cvv")?;

            let title = match title.as_deref() {
                Some(t) if !t.is_empty() => t.to_string(),
                _ => "Card".to_string(),
            };

            (title, SecretContent::card(&number, &expiration, &cvv))
        }
    };

    // Session preconditions are checked before anything goes on the wire.
    let session = resolve_session(cli)?;
    let client = api_client(cli)?;

    let stored = client.create_secret(&session, &title, codec::encode(&content))?;

    match stored.id {
        Some(id) => output::success(&format!("Secret '{title}' saved (#{id}).")),
        None => output::success(&format!("Secret '{title}' saved.")),
    }
    output::tip("Run `tresor list` to see your secrets.");

    Ok(())
}

/// Take a field value from the flag or prompt for it.
fn required_text(value: Option<&str>, field: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v.to_string()),
        None => dialoguer::Input::new()
            .with_prompt(format!("Please enter {field}"))
            .interact_text()
            .map_err(|e| TresorError::CommandFailed(format!("input prompt: {e}"))),
    }
}

/// Determine a sensitive field value from one of two sources: piped
/// input (stdin is not a terminal), or an interactive hidden prompt.
/// Sensitive values are never accepted as command-line arguments —
/// they would end up in shell history.
fn secret_value(field: &str) -> Result<String> {
    if !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf.trim_end().to_string());
    }

    dialoguer::Password::new()
        .with_prompt(format!("Enter {field}"))
        .interact()
        .map_err(|e| TresorError::CommandFailed(format!("input prompt: {e}")))
}
