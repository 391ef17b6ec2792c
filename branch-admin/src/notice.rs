//! Transient operator notices (toasts)

use serde::Serialize;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Notices kept while nobody drains them; the oldest are dropped first
pub const MAX_PENDING_NOTICES: usize = 64;

/// FIFO of notices waiting to be shown
#[derive(Debug, Default)]
pub struct Notices {
    queue: VecDeque<Notice>,
}

impl Notices {
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Info, message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Warn, message.into());
    }

    fn push(&mut self, level: NoticeLevel, message: String) {
        if self.queue.len() == MAX_PENDING_NOTICES {
            self.queue.pop_front();
        }
        self.queue.push_back(Notice { level, message });
    }

    pub fn drain(&mut self) -> Vec<Notice> {
        self.queue.drain(..).collect()
    }
}
