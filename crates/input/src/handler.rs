//! Per-tick command buffering.
//!
//! Key events arrive faster than ticks. The queue keeps them in arrival order
//! and releases one per tick, so a quick "up, left" still turns twice instead
//! of the second key overwriting the first.

use arrayvec::ArrayVec;

use crate::types::{Command, Phase};

/// Maximum number of commands held between ticks
pub const QUEUE_CAPACITY: usize = 8;

/// Bounded FIFO of pending commands
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pending: ArrayVec<Command, QUEUE_CAPACITY>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a command. Returns false if it was dropped.
    ///
    /// A direction identical to the most recent queued command is coalesced,
    /// which keeps key auto-repeat from filling the queue.
    pub fn push(&mut self, command: Command) -> bool {
        if command == Command::None {
            return false;
        }
        if let (Command::SetDirection(_), Some(last)) = (command, self.pending.last()) {
            if *last == command {
                return false;
            }
        }
        self.pending.try_push(command).is_ok()
    }

    /// Enqueue a command for an engine in `phase`.
    ///
    /// Input is discarded while the engine is still `Ready` (the get-ready
    /// window), so nothing pressed before the first tick replays once play starts.
    pub fn push_in(&mut self, phase: Phase, command: Command) -> bool {
        if phase == Phase::Ready {
            return false;
        }
        self.push(command)
    }

    /// Next command for the engine, `Command::None` when idle.
    pub fn next_command(&mut self) -> Command {
        if self.pending.is_empty() {
            return Command::None;
        }
        self.pending.remove(0)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
