//! `tresor register` — create an account with the storage service.
//!
//! Password strength is validated locally before anything leaves the
//! machine. The strength verdict is recomputed on the submitted value
//! itself; weakness and confirmation mismatch are reported as distinct
//! failures.

use crate::api::types::NewUserRequest;
use crate::cli::{api_client, output, Cli};
use crate::errors::{Result, TresorError};
use crate::policy;

/// Execute the `register` command.
pub fn execute(cli: &Cli, first_name: Option<&str>, last_name: Option<&str>) -> Result<()> {
    let first_name = required_text(first_name, "First name")?;
    let last_name = required_text(last_name, "Last name")?;
    let email = match cli.email.as_deref() {
        Some(email) if !email.is_empty() => email.to_string(),
        _ => prompt_text("Email")?,
    };

    let password = resolve_password("TRESOR_PASSWORD", "Choose account password")?;

    // Evaluate the value being submitted, not any earlier checklist state.
    let criteria = policy::evaluate(&password);
    if !criteria.is_strong() {
        output::error("Please ensure all password requirements are met:");
        output::print_criteria_checklist(&criteria);
        return Err(TresorError::WeakPassword);
    }

    let confirmation = resolve_password("TRESOR_PASSWORD_CONFIRM", "Confirm account password")?;
    if *password != *confirmation {
        return Err(TresorError::PasswordMismatch);
    }

    let client = api_client(cli)?;
    client.register_user(&NewUserRequest {
        first_name,
        last_name,
        email: email.clone(),
        password: password.to_string(),
    })?;

    output::success(&format!("Account registered for {email}."));
    output::tip("Export TRESOR_EMAIL and TRESOR_USER_ID to skip the flags next time.");

    Ok(())
}

/// Take a value from the flag or prompt for it.
fn required_text(value: Option<&str>, prompt: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => prompt_text(prompt),
    }
}

fn prompt_text(prompt: &str) -> Result<String> {
    dialoguer::Input::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| TresorError::CommandFailed(format!("input prompt: {e}")))
}

/// Read a password from the named env var (scripting/CI) or an
/// interactive hidden prompt.
fn resolve_password(env_var: &str, prompt: &str) -> Result<zeroize::Zeroizing<String>> {
    if let Ok(pw) = std::env::var(env_var) {
        if !pw.is_empty() {
            return Ok(zeroize::Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| TresorError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(zeroize::Zeroizing::new(pw))
}
