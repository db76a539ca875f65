//! The reactive field feature module.
//!
//! One observable text value, restamped with the current wall-clock time on
//! every user activation.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - The text value ("test" until the first activation)
//! - `intent.rs` - User activation, carrying the captured timestamp
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `view.rs` - The rendered row and the clickable control rect

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::FieldIntent;
pub use reducer::FieldReducer;
pub use state::{FieldState, INITIAL_TEXT};
pub use view::{field_line, update_control_rect, UPDATE_LABEL};
