//! Greeting module
//!
//! Core logic of the server: decide, for a request path and the process age,
//! whether to greet or to answer with the warm-up error. Pure and
//! clock-injectable so the gate can be tested without waiting two minutes.

use std::time::{Duration, Instant};

use hyper::StatusCode;

use crate::http::{decode_path, escape_html};

/// Server version reported in every greeting body.
pub const VERSION: &str = "1.3";

const UNREADY_BODY: &str = "Server Error";

/// Decides greeting replies based on the request path and process age.
#[derive(Debug)]
pub struct Greeter {
    version: &'static str,
    warmup_window: Option<Duration>,
    started_at: Instant,
}

impl Greeter {
    pub const fn new(
        version: &'static str,
        warmup_window: Option<Duration>,
        started_at: Instant,
    ) -> Self {
        Self {
            version,
            warmup_window,
            started_at,
        }
    }

    /// Reply for a request arriving now.
    pub fn reply(&self, path: &str) -> Reply {
        self.reply_at(path, self.started_at.elapsed())
    }

    /// Reply for a request arriving at the given process age.
    ///
    /// The warm-up gate rejects strictly below the window, so a request at
    /// exactly the window boundary is served.
    pub fn reply_at(&self, path: &str, elapsed: Duration) -> Reply {
        if let Some(window) = self.warmup_window {
            if elapsed < window {
                return Reply::Unready;
            }
        }
        let escaped = escape_html(&decode_path(path));
        Reply::Hello(format!("({}) Hello, \"{escaped}\"", self.version))
    }
}

/// Outcome of a greeting decision.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Process still inside its warm-up window.
    Unready,
    /// Ready; carries the full greeting body.
    Hello(String),
}

impl Reply {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Unready => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Hello(_) => StatusCode::OK,
        }
    }

    pub fn into_body(self) -> String {
        match self {
            Self::Unready => UNREADY_BODY.to_string(),
            Self::Hello(body) => body,
        }
    }
}
