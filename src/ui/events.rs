use crossterm::event::{self, Event, KeyEvent};
use std::sync::mpsc::{self, Receiver, RecvError, Sender};
use std::thread;

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Forwards terminal events from a reader thread to the UI loop.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || read_loop(tx));
        Self { rx }
    }

    /// Blocks until the next event. Fails once the reader thread is gone.
    pub fn next(&self) -> Result<AppEvent, RecvError> {
        self.rx.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn read_loop(tx: Sender<AppEvent>) {
    loop {
        let event = match event::read() {
            Ok(event) => event,
            Err(err) => {
                tracing::error!(target: "events", error = %err, "terminal read failed");
                break;
            }
        };
        let forwarded = match event {
            Event::Key(key) => AppEvent::Key(key),
            Event::Resize(cols, rows) => AppEvent::Resize(cols, rows),
            _ => continue,
        };
        if tx.send(forwarded).is_err() {
            // UI loop has exited.
            break;
        }
    }
}
