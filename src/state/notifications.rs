//! Transient toast notifications

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How many toasts stay on screen at once
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub level: ToastLevel,
    pub title: String,
    pub description: String,
    pub created_at: Instant,
}

/// Queue of toasts, newest last, each expiring after `ttl`
#[derive(Debug)]
pub struct Notifications {
    queue: VecDeque<Toast>,
    ttl: Duration,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(Duration::from_secs(4))
    }
}

impl Notifications {
    pub fn new(ttl: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            ttl,
        }
    }

    pub fn push(
        &mut self,
        level: ToastLevel,
        title: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.push_at(level, title, description, Instant::now());
    }

    fn push_at(
        &mut self,
        level: ToastLevel,
        title: impl Into<String>,
        description: impl Into<String>,
        now: Instant,
    ) {
        let toast = Toast {
            level,
            title: title.into(),
            description: description.into(),
            created_at: now,
        };
        tracing::debug!("Toast {:?}: {}", toast.level, toast.title);
        self.queue.push_back(toast);
        while self.queue.len() > MAX_VISIBLE {
            self.queue.pop_front();
        }
    }

    /// Drop every toast older than the ttl
    pub fn prune(&mut self) {
        self.prune_at(Instant::now());
    }

    fn prune_at(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.queue
            .retain(|t| now.saturating_duration_since(t.created_at) < ttl);
    }

    /// Dismiss the newest toast
    pub fn dismiss(&mut self) {
        self.queue.pop_back();
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.queue.back()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
