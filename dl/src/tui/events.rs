//! Terminal event source
//!
//! Bridges crossterm's blocking poll loop onto a tokio channel so the main
//! loop can await input. A poll window that expires with no input becomes a
//! Tick, which the runner uses to check on the initial load.

use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind};
use eyre::Result;
use tokio::sync::mpsc;

/// Terminal events
#[derive(Debug)]
pub enum Event {
    /// Key press
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Periodic refresh; no input arrived within a tick
    Tick,
}

/// Receiving side of the terminal event stream
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Start the polling thread with the given tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        std::thread::spawn(move || poll_loop(tick_rate, tx));
        Self { rx }
    }

    /// Await the next event.
    pub async fn next(&mut self) -> Result<Event> {
        self.rx.recv().await.ok_or_else(|| eyre::eyre!("Event channel closed"))
    }
}

/// Blocking crossterm poll loop. Runs until the receiving side is dropped.
fn poll_loop(tick_rate: Duration, tx: mpsc::UnboundedSender<Event>) {
    loop {
        let sent = if event::poll(tick_rate).unwrap_or(false) {
            match event::read() {
                // Only key presses; release/repeat reports would double-fire
                // handlers on Windows terminals
                Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => tx.send(Event::Key(key)),
                Ok(event::Event::Resize(w, h)) => tx.send(Event::Resize(w, h)),
                _ => continue,
            }
        } else {
            tx.send(Event::Tick)
        };

        if sent.is_err() {
            break;
        }
    }
}
