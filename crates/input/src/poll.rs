//! Non-blocking single-event poll.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};

use crate::map::handle_key_event;
use crate::types::GameAction;

/// Wait up to `timeout` for one terminal event and map it to an action.
///
/// No event, a non-key event, or an unmapped key all yield `Ok(None)`.
pub fn poll_action(timeout: Duration) -> io::Result<Option<GameAction>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) => Ok(handle_key_event(key)),
        _ => Ok(None),
    }
}
