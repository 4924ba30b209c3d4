//! Input polling
//!
//! The screen pulls one batch of events per frame from an `EventSource`.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};

/// Frame budget while waiting for input (~60fps)
pub const FRAME_TIMEOUT: Duration = Duration::from_millis(16);

/// Per-frame batch of input events
pub trait EventSource {
    /// Events that arrived since the last call; may be empty
    fn poll_events(&mut self) -> Result<Vec<Event>>;
}

/// Reads from the real terminal via crossterm
#[derive(Debug, Clone)]
pub struct CrosstermEvents {
    timeout: Duration,
}

impl CrosstermEvents {
    pub fn new() -> Self {
        Self::with_timeout(FRAME_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for CrosstermEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for CrosstermEvents {
    fn poll_events(&mut self) -> Result<Vec<Event>> {
        let mut events = Vec::new();
        if !event::poll(self.timeout)? {
            return Ok(events);
        }

        // Drain everything already queued so one frame handles the whole burst
        loop {
            events.push(event::read()?);
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }
        Ok(events)
    }
}
