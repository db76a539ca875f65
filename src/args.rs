use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Command line arguments. Flags override values from the config file.
#[derive(Debug, Parser)]
#[command(name = "tickspan", version, about = "A reactive text field in the terminal")]
pub struct Args {
    /// Path to the config file (default: platform config dir).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Tick interval override in milliseconds.
    #[arg(long = "tick-ms", value_name = "MS")]
    pub tick_ms: Option<u64>,

    /// Disable mouse capture (the update control is keyboard-only).
    #[arg(long = "no-mouse")]
    pub no_mouse: bool,
}

impl Args {
    /// The config file path to load, honoring the `--config` override.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply flag overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(tick_ms) = self.tick_ms {
            config.ui.tick_rate_ms = tick_ms;
        }
        if self.no_mouse {
            config.ui.mouse_capture = false;
        }
    }
}
