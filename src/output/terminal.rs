//! Terminal renderer: one line per user, then the selected user in full.

use colored::Colorize;
use serde_json::Value;

use crate::controller::ViewState;
use crate::models::User;
use crate::output::ViewRenderer;

/// Terminal output renderer with colored text.
pub struct TerminalRenderer;

impl ViewRenderer for TerminalRenderer {
    fn render(&self, state: &ViewState) -> String {
        let mut output = String::new();

        if state.users.is_empty() {
            output.push_str(&format!("{}\n", "  No users.".dimmed()));
        } else {
            for user in &state.users {
                output.push_str(&format!(
                    "  {} {} {}\n",
                    "•".cyan(),
                    user.label().bold(),
                    format!("(id {})", user.id).dimmed(),
                ));
            }
            output.push_str(&format!("{}\n", "───────────────────────────────────".dimmed()));
            output.push_str(&format!(
                "  {} {}\n",
                state.users.len().to_string().bold(),
                if state.users.len() == 1 { "user" } else { "users" },
            ));
        }

        if let Some(ref user) = state.user {
            output.push('\n');
            output.push_str(&render_detail(user));
        }

        output
    }
}

/// Full attribute listing for a single user.
fn render_detail(user: &User) -> String {
    let mut output = format!("  {} {}\n", "User".bold(), user.id.to_string().green().bold());
    for (key, value) in &user.attributes {
        let shown = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        output.push_str(&format!("    {} {}\n", format!("{key}:").cyan(), shown));
    }
    output
}
