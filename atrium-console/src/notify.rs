//! Toast notifications
//!
//! One shared queue per console session. Success and error toasts both
//! expire on their own; readers prune expired entries as they look.

use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::{Duration, Instant};
use uuid::Uuid;

/// How long a toast stays up
pub const DISMISS_AFTER: Duration = Duration::from_secs(3);

/// Cap on queued toasts; the oldest fall off first
const MAX_NOTICES: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// One toast
#[derive(Debug, Clone)]
pub struct Notice {
    pub id: Uuid,
    pub level: NoticeLevel,
    pub message: String,
    posted_at: Instant,
}

impl Notice {
    pub fn is_expired(&self) -> bool {
        self.posted_at.elapsed() >= DISMISS_AFTER
    }
}

/// Toast queue shared across pages
#[derive(Clone)]
pub struct Notifier {
    notices: Arc<RwLock<VecDeque<Notice>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            notices: Arc::new(RwLock::new(VecDeque::new())),
        }
    }

    /// Post a success toast
    pub async fn success(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Success, message.into()).await;
    }

    /// Post an error toast
    pub async fn error(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Error, message.into()).await;
    }

    async fn push(&self, level: NoticeLevel, message: String) {
        let mut notices = self.notices.write().await;
        notices.push_front(Notice {
            id: Uuid::new_v4(),
            level,
            message,
            posted_at: Instant::now(),
        });

        while notices.len() > MAX_NOTICES {
            notices.pop_back();
        }
    }

    /// Live toasts, newest first; expired entries are dropped on the way
    pub async fn active(&self) -> Vec<Notice> {
        let mut notices = self.notices.write().await;
        notices.retain(|n| !n.is_expired());
        notices.iter().cloned().collect()
    }

    /// Dismiss one toast before it expires
    pub async fn dismiss(&self, id: Uuid) {
        let mut notices = self.notices.write().await;
        notices.retain(|n| n.id != id);
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_toasts_are_newest_first() {
        let notifier = Notifier::new();
        notifier.success("saved").await;
        notifier.error("failed").await;

        let active = notifier.active().await;
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].message, "failed");
        assert_eq!(active[0].level, NoticeLevel::Error);
        assert_eq!(active[1].message, "saved");
    }

    #[tokio::test(start_paused = true)]
    async fn test_toasts_expire_after_three_seconds() {
        let notifier = Notifier::new();
        notifier.success("saved").await;
        assert_eq!(notifier.active().await.len(), 1);

        tokio::time::advance(Duration::from_secs(2)).await;
        assert_eq!(notifier.active().await.len(), 1);

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(notifier.active().await.is_empty());
    }

    #[tokio::test]
    async fn test_dismiss_removes_one_toast() {
        let notifier = Notifier::new();
        notifier.success("first").await;
        notifier.success("second").await;

        let target = notifier.active().await[0].id;
        notifier.dismiss(target).await;

        let active = notifier.active().await;
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, "first");
    }

    #[tokio::test]
    async fn test_queue_is_bounded() {
        let notifier = Notifier::new();
        for i in 0..60 {
            notifier.success(format!("toast {}", i)).await;
        }

        let active = notifier.active().await;
        assert_eq!(active.len(), MAX_NOTICES);
        assert_eq!(active[0].message, "toast 59");
    }
}
