//! Transient confirmation notices.
//!
//! The board shows at most one notice. Posting replaces the current notice and
//! schedules its removal after the display duration; a removal timer only
//! clears the notice it was scheduled for, so a newer notice stays visible for
//! its full duration.

use chrono::{DateTime, Utc};
use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Display duration used by the admin panel unless configured otherwise.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(3);

/// A confirmation message shown after a moderation action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Monotonic id, unique per board
    pub id: u64,
    /// Text shown to the moderator
    pub message: String,
    /// When the notice was posted
    pub posted_at: DateTime<Utc>,
}

/// Holder for the single visible notice.
///
/// Cloning shares the same underlying notice.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    current: Arc<RwLock<Option<Notice>>>,
    next_id: Arc<AtomicU64>,
    display_for: Duration,
}

impl NoticeBoard {
    /// Creates an empty board whose notices expire after `display_for`.
    #[must_use]
    pub fn new(display_for: Duration) -> Self {
        Self {
            current: Arc::new(RwLock::new(None)),
            next_id: Arc::new(AtomicU64::new(0)),
            display_for,
        }
    }

    /// How long each notice stays visible
    #[must_use]
    pub const fn display_for(&self) -> Duration {
        self.display_for
    }

    /// Shows `message`, replacing any current notice, and schedules its removal.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn post(&self, message: impl Into<String>) -> Notice {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let notice = Notice {
            id,
            message: message.into(),
            posted_at: Utc::now(),
        };

        *self.current.write().await = Some(notice.clone());
        info!("Notice {}: {}", id, notice.message);

        let current = Arc::clone(&self.current);
        let delay = self.display_for;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut slot = current.write().await;
            if slot.as_ref().is_some_and(|shown| shown.id == id) {
                *slot = None;
                debug!("Notice {} expired", id);
            }
        });

        notice
    }

    /// The notice currently visible, if any.
    pub async fn current(&self) -> Option<Notice> {
        self.current.read().await.clone()
    }

    /// Removes the current notice immediately.
    pub async fn dismiss(&self) {
        if let Some(notice) = self.current.write().await.take() {
            debug!("Notice {} dismissed", notice.id);
        }
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_DURATION)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn test_notice_clears_after_display_duration() {
        let board = NoticeBoard::default();
        board.post("User approved successfully!").await;

        sleep(Duration::from_millis(2_900)).await;
        let shown = board.current().await.unwrap();
        assert_eq!(shown.message, "User approved successfully!");

        sleep(Duration::from_millis(200)).await;
        assert!(board.current().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_notice_survives_older_timer() {
        let board = NoticeBoard::new(Duration::from_secs(3));
        let first = board.post("Item approved successfully!").await;

        sleep(Duration::from_secs(2)).await;
        let second = board.post("Item rejected successfully!").await;
        assert!(second.id > first.id);

        // first timer fires at 3s and must leave the second notice alone
        sleep(Duration::from_millis(1_500)).await;
        assert_eq!(board.current().await.unwrap().id, second.id);

        sleep(Duration::from_secs(2)).await;
        assert!(board.current().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_clears_immediately() {
        let board = NoticeBoard::default();
        board.post("User rejected successfully!").await;
        board.dismiss().await;
        assert!(board.current().await.is_none());

        // expired timer on an empty board is harmless
        sleep(Duration::from_secs(4)).await;
        assert!(board.current().await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let board = NoticeBoard::default();
        let view = board.clone();
        board.post("hello").await;
        assert_eq!(view.current().await.unwrap().message, "hello");
    }
}
