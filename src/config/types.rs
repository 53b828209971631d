// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub warmup: WarmupConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Warm-up gate configuration
#[derive(Debug, Deserialize, Clone)]
pub struct WarmupConfig {
    /// Seconds after start during which requests fail; 0 disables the gate
    pub window_secs: u64,
}

impl WarmupConfig {
    pub const fn window(&self) -> Option<Duration> {
        if self.window_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.window_secs))
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (common or json)
    pub access_log_format: String,
}
