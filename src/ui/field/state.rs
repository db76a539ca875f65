//! State for the reactive field.

use crate::store::UiState;

/// Text the field holds before the first activation.
pub const INITIAL_TEXT: &str = "test";

/// The single observable value of the app.
///
/// Starts as [`INITIAL_TEXT`]; an activation replaces it with the initial
/// text followed by the activation time in milliseconds since the epoch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub text: String,
}

impl Default for FieldState {
    fn default() -> Self {
        Self {
            text: INITIAL_TEXT.to_string(),
        }
    }
}

impl UiState for FieldState {}

impl FieldState {
    /// True until the first activation.
    pub fn is_initial(&self) -> bool {
        self.text == INITIAL_TEXT
    }

    /// The numeric suffix after the prefix, if the field has been stamped.
    pub fn stamp_millis(&self) -> Option<u64> {
        self.text.strip_prefix(INITIAL_TEXT)?.parse().ok()
    }
}
