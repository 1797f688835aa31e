//! Capacity-bounded message buffer with FIFO eviction.

use crate::model::Message;
use log::debug;
use std::collections::VecDeque;

/// Ordered message history bounded by an optional capacity.
///
/// `None` means unbounded. A capacity of zero never stores anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryBuffer {
    messages: VecDeque<Message>,
    capacity: Option<usize>,
}

impl HistoryBuffer {
    /// Create an empty buffer.
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            messages: VecDeque::new(),
            capacity,
        }
    }

    /// Build a buffer by appending `messages` in order.
    pub fn from_messages(
        capacity: Option<usize>,
        messages: impl IntoIterator<Item = Message>,
    ) -> Self {
        let mut buffer = Self::new(capacity);
        for message in messages {
            buffer.append(message);
        }
        buffer
    }

    /// Append at the tail, returning any messages evicted from the head.
    pub fn append(&mut self, message: Message) -> Vec<Message> {
        match self.capacity {
            Some(0) => {
                debug!("discarded message (role={}, capacity=0)", message.role());
                vec![message]
            }
            Some(capacity) => {
                self.messages.push_back(message);
                let overflow = self.messages.len().saturating_sub(capacity);
                let evicted: Vec<Message> = self.messages.drain(..overflow).collect();
                if !evicted.is_empty() {
                    debug!(
                        "evicted oldest messages (count={}, capacity={})",
                        evicted.len(),
                        capacity
                    );
                }
                evicted
            }
            None => {
                self.messages.push_back(message);
                Vec::new()
            }
        }
    }

    /// Configured capacity.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Number of stored messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the buffer holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Message at `index`, oldest first.
    pub fn get(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }
}

impl<'a> IntoIterator for &'a HistoryBuffer {
    type Item = &'a Message;
    type IntoIter = std::collections::vec_deque::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
