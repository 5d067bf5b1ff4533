//! `CommandBacklog`: the time-ordered queue of pending commands.
//!
//! Commands are stored sorted by descending time so the next one due is
//! always the last element.  The backlog only shrinks during a run; memory
//! held by already-dispatched commands is released as they are popped.

use crate::Command;

/// Pending commands, earliest-due at the end.
#[derive(Debug, Default, Clone)]
pub struct CommandBacklog {
    inner: Vec<Command>,
}

impl CommandBacklog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a backlog from commands in file order.
    ///
    /// Commands sharing a due time are dispatched in the order given.
    pub fn from_commands(mut commands: Vec<Command>) -> Self {
        // Reversing first lets the stable sort leave equal-time commands in
        // reverse input order, so `pop` yields them in input order.
        commands.reverse();
        commands.sort_by(Command::storage_order);
        Self { inner: commands }
    }

    /// The earliest-due command, without removing it.
    pub fn peek(&self) -> Option<&Command> {
        self.inner.last()
    }

    /// Remove and return the earliest command if it is due at `now_secs`.
    ///
    /// Returns `None` when the backlog is empty or the next command lies in
    /// the future.
    pub fn pop_due(&mut self, now_secs: f64) -> Option<Command> {
        if self.peek()?.is_due(now_secs) {
            self.inner.pop()
        } else {
            None
        }
    }

    /// Due time of the earliest pending command.
    pub fn next_time(&self) -> Option<f64> {
        self.peek().map(|c| c.time)
    }

    /// Pending commands in dispatch order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.inner.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
