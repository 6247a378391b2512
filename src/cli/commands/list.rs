//! `tresor list` — display the user's secrets grouped by kind.

use crate::cli::{api_client, output, resolve_session, Cli};
use crate::errors::Result;
use crate::secret::group_by_kind;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let session = resolve_session(cli)?;
    let client = api_client(cli)?;

    let stored = client.secrets_for_user(&session)?;
    let groups = group_by_kind(&stored);

    let shown: usize = groups.iter().map(|g| g.secrets.len()).sum();
    output::info(&format!("{} — {} secret(s)", session.email, shown));

    output::print_secret_groups(&groups);

    Ok(())
}
