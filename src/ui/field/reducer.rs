use crate::store::Reducer;
use crate::ui::field::intent::FieldIntent;
use crate::ui::field::state::{FieldState, INITIAL_TEXT};

pub struct FieldReducer;

impl Reducer for FieldReducer {
    type State = FieldState;
    type Intent = FieldIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Assigns, never appends: an activation from any state lands in
            // "updated" with a fresh stamp.
            FieldIntent::Activate { at_ms } => FieldState {
                text: format!("{}{}", INITIAL_TEXT, at_ms),
            },
        }
    }
}
