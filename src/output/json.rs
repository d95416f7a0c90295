//! JSON output renderer.
//!
//! Outputs `{"users": [...], "user": {...}}`; `user` is omitted when unset.

use crate::controller::ViewState;
use crate::output::ViewRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl ViewRenderer for JsonRenderer {
    fn render(&self, state: &ViewState) -> String {
        let mut rendered =
            serde_json::to_string_pretty(state).unwrap_or_else(|_| "{}".to_string());
        rendered.push('\n');
        rendered
    }
}
