//! View renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::controller::ViewState;

/// Trait for rendering a view state snapshot.
pub trait ViewRenderer {
    /// Render the view state to a string.
    fn render(&self, state: &ViewState) -> String;
}
