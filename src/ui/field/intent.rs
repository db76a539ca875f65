use crate::store::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIntent {
    /// User activated the update control.
    ///
    /// Carries the wall-clock time (milliseconds since the epoch) captured
    /// at the event boundary, so the reducer stays pure.
    Activate { at_ms: u64 },
}

impl Intent for FieldIntent {}
