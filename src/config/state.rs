// Application state module
// Immutable per-process state shared across connection tasks

use std::time::Instant;

use super::types::{Config, LoggingConfig};
use crate::greeting::{Greeter, VERSION};

/// Application state
#[derive(Debug)]
pub struct AppState {
    pub greeter: Greeter,
    pub logging: LoggingConfig,
}

impl AppState {
    /// Create `AppState` from loaded configuration and the process start time
    pub fn new(config: &Config, started_at: Instant) -> Self {
        Self {
            greeter: Greeter::new(VERSION, config.warmup.window(), started_at),
            logging: config.logging.clone(),
        }
    }
}
