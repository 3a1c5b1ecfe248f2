use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

pub const DEFAULT_HISTORY_SIZE: usize = 10;

/// The most recently visited distinct URLs, oldest at the front.
#[derive(Debug)]
pub struct VisitHistory {
    capacity: usize,
    visited: Mutex<VecDeque<String>>,
}

impl Default for VisitHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE)
    }
}

impl VisitHistory {
    pub fn new(capacity: usize) -> Self {
        VisitHistory {
            capacity,
            visited: Mutex::new(VecDeque::with_capacity(capacity.saturating_add(1))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        // The deque is left consistent by every operation, so a panic elsewhere
        // does not invalidate it.
        self.visited.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Marks `url` as the most recent visit.
    pub fn record(&self, url: &str) {
        let mut visited = self.lock();

        if let Some(pos) = visited.iter().position(|u| u == url) {
            if let Some(existing) = visited.remove(pos) {
                visited.push_back(existing);
            }
            return;
        }

        visited.push_back(url.to_string());
        while visited.len() > self.capacity {
            visited.pop_front();
        }
    }

    /// Newest first.
    pub fn snapshot(&self) -> Vec<String> {
        self.lock().iter().rev().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
