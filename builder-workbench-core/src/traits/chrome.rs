//! Page chrome collaborator Traits
//!
//! Busy indicator, side navigation badges, side file list and document
//! title. Each is a separate collaborator on the page; they are grouped
//! here because every contract is a single call or two.

use async_trait::async_trait;

/// Global busy indicator shown while a tab load is in flight.
///
/// `show`/`hide` are idempotent; no queuing semantics are required.
#[async_trait]
pub trait BusyIndicator: Send + Sync {
    async fn show(&self);
    async fn hide(&self);
}

/// Side navigation badge counters.
#[async_trait]
pub trait SideNav: Send + Sync {
    /// Publish `count` to the badge at `location_key`.
    async fn set_counter(&self, location_key: &str, count: usize);
}

/// Side file list with at most one "active" highlight.
#[async_trait]
pub trait FileList: Send + Sync {
    /// Highlight the entry for `tab_id`, or clear the highlight with `None`.
    async fn mark_active(&self, tab_id: Option<&str>);
}

/// Document title and viewport notifications.
#[async_trait]
pub trait PageChrome: Send + Sync {
    /// Set the document title. An empty string clears any suffix.
    async fn set_page_title(&self, title: &str);

    /// Tell viewport-dependent tab content to recalculate its layout.
    async fn broadcast_resize(&self);
}
