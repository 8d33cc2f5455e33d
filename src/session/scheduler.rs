//! Virtual-time task queue
//!
//! The original fiction was choreographed with chained wall-clock timeouts.
//! Here every delayed effect is a task with a due time on the session's
//! virtual clock: the UI thread advances the clock and drains whatever has
//! come due, and tests advance it deterministically. Tasks cannot be
//! cancelled individually once scheduled, but teardown clears the queue.

use crate::content::Classification;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

/// A delayed effect against the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Task {
    /// Append a system message
    System {
        text: String,
        classification: Classification,
    },
    /// Append an entity message
    Entity { sender: String, text: String },
    /// Raise a notification toast
    Notify { text: String, kind: NoticeKind },
    /// Enter the disturbed visual state for `lasting`
    Disturb { lasting: Duration },
    /// Enter the glitch visual state for `lasting`
    Glitch { lasting: Duration },
    /// Publish the location-analysis report to its panel
    LocationReport { lines: Vec<String> },
    /// Publish the symbol-decoder report to its panel
    DecoderReport { lines: Vec<String> },
    /// Resolve an evidence-file open by archive index
    EvidenceResult { index: usize },
    /// Flip the session's proxied flag
    MarkProxied,
}

/// Notification severity, cosmetic only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug)]
struct Scheduled {
    due: Duration,
    seq: u64,
    task: Task,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due.cmp(&other.due).then(self.seq.cmp(&other.seq))
    }
}

/// One-shot task queue ordered by (due time, insertion order)
#[derive(Debug, Default)]
pub(crate) struct Scheduler {
    queue: BinaryHeap<Reverse<Scheduled>>,
    seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a task to fire once virtual time reaches `due`
    pub fn schedule(&mut self, due: Duration, task: Task) {
        let seq = self.seq;
        self.seq += 1;
        self.queue.push(Reverse(Scheduled { due, seq, task }));
    }

    /// Pop the next task whose due time has been reached, if any
    pub fn pop_due(&mut self, now: Duration) -> Option<Task> {
        if self.queue.peek().is_some_and(|Reverse(s)| s.due <= now) {
            self.queue.pop().map(|Reverse(s)| s.task)
        } else {
            None
        }
    }

    /// Number of tasks still waiting
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Drop every pending task; used on session teardown
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
