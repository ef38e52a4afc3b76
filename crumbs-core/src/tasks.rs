// SPDX-License-Identifier: LGPL-3.0-only
//! Zero-delay deferred task queue.
//!
//! Work queued here runs on the next event-loop turn, after the current
//! layout pass has finished. This replaces a single-shot timer: there is no
//! delay, only an ordering guarantee that the queued work does not run
//! re-entrantly inside the pass that scheduled it.

use std::collections::VecDeque;

/// A FIFO queue of values to be processed after the current layout pass.
#[derive(Clone, Debug)]
pub struct DeferredQueue<T> {
    queued: VecDeque<T>,
}

impl<T> DeferredQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            queued: VecDeque::new(),
        }
    }

    /// Schedule a value for the next turn.
    pub fn push(&mut self, value: T) {
        self.queued.push_back(value);
    }

    /// Take everything queued so far, in scheduling order.
    pub fn drain(&mut self) -> Vec<T> {
        self.queued.drain(..).collect()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }

    /// Number of queued values.
    pub fn len(&self) -> usize {
        self.queued.len()
    }
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
