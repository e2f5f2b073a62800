//! Terminal event source abstraction to enable scripted input in tests

use anyhow::Result;
use crossterm::event::{self, Event};
use std::time::Duration;

/// Source of terminal input events
#[cfg_attr(test, mockall::automock)]
pub trait EventSource {
    /// Wait up to `timeout` for an event to become available
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read the next event, blocking until one arrives
    fn read(&mut self) -> Result<Event>;
}

/// Events read from the real terminal through crossterm
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        Ok(event::poll(timeout)?)
    }

    fn read(&mut self) -> Result<Event> {
        Ok(event::read()?)
    }
}
