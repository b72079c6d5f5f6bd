//! Actor mailbox implementation.

use std::collections::VecDeque;

use super::Message;

/// Unbounded FIFO of messages waiting for one actor.
///
/// Only the kernel touches a mailbox: `send` pushes to the back, a scheduling
/// step pops the front right before `behave` runs.
#[derive(Debug)]
pub struct Mailbox<M: Message> {
    queue: VecDeque<M>,
    enqueued_count: u64,
    processed_count: u64,
}

impl<M: Message> Mailbox<M> {
    pub fn new() -> Self {
        Mailbox {
            queue: VecDeque::new(),
            enqueued_count: 0,
            processed_count: 0,
        }
    }

    pub fn push(&mut self, message: M) {
        self.queue.push_back(message);
        self.enqueued_count = self.enqueued_count.wrapping_add(1);
    }

    /// Pop the oldest pending message.
    pub fn pop(&mut self) -> Option<M> {
        let message = self.queue.pop_front();
        if message.is_some() {
            self.processed_count = self.processed_count.wrapping_add(1);
        }
        message
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Total messages ever pushed.
    pub fn enqueued_count(&self) -> u64 {
        self.enqueued_count
    }

    /// Total messages handed to the actor.
    pub fn processed_count(&self) -> u64 {
        self.processed_count
    }
}
