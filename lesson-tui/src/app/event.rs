//! Event handling infrastructure
//!
//! A reader thread polls the terminal and forwards input over a channel;
//! ticks come from a separate timer channel. [`EventHandler::next`] merges
//! both into a single stream.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{select, unbounded, Receiver};
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

use crate::app::Action;
use crate::error::{Result, TuiError};

/// How often the reader thread checks for shutdown
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// TUI events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Keyboard input
    Key(KeyEvent),

    /// Terminal resize
    Resize(u16, u16),

    /// Periodic tick for timers and transitions
    Tick(Duration),
}

impl From<TuiEvent> for Action {
    fn from(event: TuiEvent) -> Self {
        match event {
            TuiEvent::Key(key) => Action::Key(key),
            TuiEvent::Resize(w, h) => Action::Resize(w, h),
            TuiEvent::Tick(elapsed) => Action::Tick(elapsed),
        }
    }
}

/// Event handler backed by a terminal reader thread
pub struct EventHandler {
    tick_rate: Duration,
    input: Receiver<TuiEvent>,
    ticks: Receiver<Instant>,
    last_tick: Instant,
    stop: Arc<AtomicBool>,
    reader: Option<JoinHandle<()>>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate_ms: u64) -> Self {
        let tick_rate = Duration::from_millis(tick_rate_ms.max(1));
        let (tx, input) = unbounded();
        let stop = Arc::new(AtomicBool::new(false));

        let reader_stop = Arc::clone(&stop);
        let reader = thread::spawn(move || {
            while !reader_stop.load(Ordering::Relaxed) {
                match event::poll(POLL_INTERVAL) {
                    Ok(false) => continue,
                    Ok(true) => {}
                    Err(e) => {
                        tracing::error!(error = %e, "Terminal poll failed");
                        break;
                    }
                }

                let forwarded = match event::read() {
                    // Release events would double every keystroke on Windows
                    Ok(CrosstermEvent::Key(key)) if key.kind != KeyEventKind::Release => {
                        Some(TuiEvent::Key(key))
                    }
                    Ok(CrosstermEvent::Resize(w, h)) => Some(TuiEvent::Resize(w, h)),
                    Ok(_) => None,
                    Err(e) => {
                        tracing::error!(error = %e, "Terminal read failed");
                        break;
                    }
                };

                if let Some(event) = forwarded {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
            }
        });

        Self {
            tick_rate,
            input,
            ticks: crossbeam_channel::tick(tick_rate),
            last_tick: Instant::now(),
            stop,
            reader: Some(reader),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Block until the next input event or tick
    ///
    /// Fails once the reader thread has gone away.
    pub fn next(&mut self) -> Result<TuiEvent> {
        select! {
            recv(self.input) -> event => {
                event.map_err(|_| TuiError::Event("terminal reader stopped".to_string()))
            }
            recv(self.ticks) -> at => {
                let at = at.map_err(|_| TuiError::Event("tick timer stopped".to_string()))?;
                let elapsed = at.saturating_duration_since(self.last_tick);
                self.last_tick = at;
                Ok(TuiEvent::Tick(elapsed))
            }
        }
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(reader) = self.reader.take() {
            let _ = reader.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_event_converts_to_action() {
        let key = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(Action::from(TuiEvent::Key(key)), Action::Key(key));
        assert_eq!(Action::from(TuiEvent::Resize(80, 24)), Action::Resize(80, 24));
        assert_eq!(
            Action::from(TuiEvent::Tick(Duration::from_millis(100))),
            Action::Tick(Duration::from_millis(100))
        );
    }
}
