//! Change-detection widget abstraction Trait

use async_trait::async_trait;

/// The change-detection widget attached to forms inside tab panes.
///
/// The widget itself reports dirty/clean transitions as
/// `WorkspaceEvent::FormChanged` / `FormUnchanged`; this trait carries the
/// one signal that flows the other way.
#[async_trait]
pub trait ChangeMonitor: Send + Sync {
    /// Force the form inside `tab_id`'s pane back into the clean state,
    /// e.g. after a programmatic save or reset.
    async fn force_clean(&self, tab_id: &str);
}
