use std::time::Duration;

use pickup_core::Diagnostics;
use serde::Serialize;

/// A developer message shown on screen until `expires_at`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScreenMessage {
    pub text: String,
    pub expires_at: Duration,
}

/// Forwards developer messages to `tracing` and keeps them on screen for a
/// fixed lifetime of world time.
#[derive(Debug)]
pub struct TracingDiagnostics {
    lifetime: Duration,
    now: Duration,
    messages: Vec<ScreenMessage>,
}

impl TracingDiagnostics {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            now: Duration::ZERO,
            messages: Vec::new(),
        }
    }

    /// Moves the clock and drops expired messages.
    pub fn advance_to(&mut self, now: Duration) {
        self.now = now;
        self.messages.retain(|message| message.expires_at > now);
    }

    /// Messages still on screen, oldest first.
    pub fn messages(&self) -> &[ScreenMessage] {
        &self.messages
    }
}

impl Diagnostics for TracingDiagnostics {
    fn debug_message(&mut self, message: &str) {
        tracing::debug!(target: "pickup::screen", "{}", message);
        self.messages.push(ScreenMessage {
            text: message.to_owned(),
            expires_at: self.now + self.lifetime,
        });
    }
}
