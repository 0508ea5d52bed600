//! Tab widget abstraction Trait

use async_trait::async_trait;

use crate::types::TabPane;

/// The master tab widget.
///
/// Frontends wrap whatever visual tab control the platform ships. The
/// controller needs activation, insertion, a pane snapshot for the
/// modified-counter scan, and a pane-local modified signal. The widget owns
/// which tab is active; the controller never caches that independently.
#[async_trait]
pub trait TabStrip: Send + Sync {
    /// Activate the tab with `tab_id` if present.
    ///
    /// # Returns
    /// Whether a tab with that identity was open.
    async fn go_to(&self, tab_id: &str) -> bool;

    /// Append a new tab and make it available for activation.
    async fn add_tab(&self, title: &str, content: &str, tab_id: &str, icon: &str);

    /// Snapshot of all currently open panes.
    async fn panes(&self) -> Vec<TabPane>;

    /// Re-broadcast a modified/unmodified signal scoped to the pane's
    /// non-tabbed field group so nested UI inside the pane can react.
    async fn notify_pane_modified(&self, tab_id: &str, modified: bool);
}
