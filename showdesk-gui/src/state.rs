use std::time::{Duration, Instant};

use showdesk_core::{LogNotifier, Notice, NoticeLevel, Notifier, ShowId};

// -- Notices --

/// A notice and the moment it was posted.
#[derive(Debug, Clone)]
pub struct PostedNotice {
    pub notice: Notice,
    pub posted_at: Instant,
}

/// Recent notices shown in the status bar until they expire.
#[derive(Debug)]
pub struct NoticeBoard {
    notices: Vec<PostedNotice>,
    lifetime: Duration,
}

impl NoticeBoard {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            notices: Vec::new(),
            lifetime,
        }
    }

    pub fn post_at(&mut self, notice: Notice, now: Instant) {
        self.notices.push(PostedNotice {
            notice,
            posted_at: now,
        });
    }

    /// Drop notices older than the board's lifetime.
    pub fn prune(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.notices
            .retain(|n| now.saturating_duration_since(n.posted_at) < lifetime);
    }

    pub fn visible(&self) -> &[PostedNotice] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Time until the oldest notice expires, for scheduling a repaint.
    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.notices
            .iter()
            .map(|n| (n.posted_at + self.lifetime).saturating_duration_since(now))
            .min()
    }
}

impl Notifier for NoticeBoard {
    fn notify(&mut self, notice: Notice) {
        LogNotifier.notify(notice.clone());
        self.post_at(notice, Instant::now());
    }
}

/// Status bar colour for a notice level.
pub fn notice_color(level: NoticeLevel) -> egui::Color32 {
    match level {
        NoticeLevel::Success => egui::Color32::from_rgb(50, 180, 50),
        NoticeLevel::Error => egui::Color32::from_rgb(220, 50, 50),
    }
}

// -- Table actions --

/// Row button clicked in the programme table.
///
/// Collected while the table borrows the list, applied afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Edit(ShowId),
    Delete(ShowId),
}
