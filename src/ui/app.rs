use crate::config::ConfigStore;
use crate::store::Store;
use crate::ui::field::{FieldIntent, FieldReducer};
use std::time::{SystemTime, UNIX_EPOCH};

/// Component host: owns the field store and the loop-level flags.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    config: ConfigStore,
    /// Reactive field state container (MVI pattern). Views subscribe to it
    /// for change notifications.
    field: Store<FieldReducer>,
}

impl App {
    pub fn new(config: ConfigStore) -> Self {
        Self {
            should_quit: false,
            size: None,
            config,
            field: Store::new(),
        }
    }

    /// The field store, for subscribing and rendering.
    pub fn field_store(&self) -> &Store<FieldReducer> {
        &self.field
    }

    /// Current field text.
    pub fn text(&self) -> String {
        self.field.get().text
    }

    /// True until the first activation.
    pub fn is_initial(&self) -> bool {
        self.field.get().is_initial()
    }

    /// Apply an activation: stamp the field with the current wall-clock time.
    ///
    /// Returns the new text.
    pub fn activate(&mut self) -> String {
        let at_ms = unix_now_ms();
        let state = self.field.dispatch(FieldIntent::Activate { at_ms });
        tracing::debug!(text = %state.text, "field activated");
        state.text
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {}

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Last known terminal size, set on startup and resize.
    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }
}

fn unix_now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
