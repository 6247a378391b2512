//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::policy::PasswordCriteria;
use crate::secret::{fields_for_display, SecretGroup};

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print grouped secrets, one headed table per kind.
pub fn print_secret_groups(groups: &[SecretGroup]) {
    if groups.is_empty() {
        info("No secrets available.");
        tip("Run `tresor add credential` to store your first secret.");
        return;
    }

    for group in groups {
        println!(
            "\n{} {}",
            style(capitalize(&group.kind)).bold().underlined(),
            style(format!("({})", group.secrets.len())).dim()
        );

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Title", "Fields"]);

        for secret in &group.secrets {
            let title = match secret.id {
                Some(id) => format!("{} (#{id})", secret.title),
                None => secret.title.clone(),
            };

            let fields = fields_for_display(&secret.content)
                .iter()
                .map(|(name, value)| format!("{name}: {value}"))
                .collect::<Vec<_>>()
                .join("\n");

            table.add_row(vec![title, fields]);
        }

        println!("{table}");
    }
}

/// Print the password criteria checklist shown on registration.
pub fn print_criteria_checklist(criteria: &PasswordCriteria) {
    let rows = [
        (criteria.min_length, "At least 8 characters"),
        (criteria.has_upper_case, "At least one uppercase letter (A-Z)"),
        (criteria.has_lower_case, "At least one lowercase letter (a-z)"),
        (criteria.has_digit, "At least one digit (0-9)"),
        (
            criteria.has_special_char,
            "At least one special character (e.g. !@#$%)",
        ),
    ];

    for (met, label) in rows {
        if met {
            println!("  {} {}", style("\u{2713}").green(), label);
        } else {
            println!("  {} {}", style("\u{2022}").dim(), style(label).dim());
        }
    }
}

/// Uppercase the first character, as group headings are kind tags.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
