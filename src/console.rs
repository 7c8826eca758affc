//! On-screen diagnostics pane.
//!
//! The terminal belongs to the UI, so component logs land here and are
//! mirrored to the `tracing` log file.

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    /// Component that emitted the line.
    pub source: &'static str,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Console {
    lines: VecDeque<ConsoleLine>,
    capacity: usize,
}

impl Console {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn log(&mut self, source: &'static str, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(target: "console", source, "{}", message);
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(ConsoleLine { source, message });
    }

    pub fn lines(&self) -> impl DoubleEndedIterator<Item = &ConsoleLine> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines whose message equals `message`.
    pub fn count(&self, message: &str) -> usize {
        self.lines.iter().filter(|l| l.message == message).count()
    }
}
