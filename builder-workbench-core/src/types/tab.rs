//! Tab view types

use serde::{Deserialize, Serialize};

/// Remote response that materializes a new master tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabLoadResponse {
    /// Tab title
    pub tab_title: String,
    /// Rendered tab content markup. Wire name is `tab`, matching the
    /// server handler payload.
    #[serde(rename = "tab")]
    pub tab_content: String,
    /// Tab identity
    pub tab_id: String,
    /// Tab icon reference
    #[serde(default)]
    pub tab_icon: String,
}

/// Snapshot of one open tab pane as reported by the tab widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabPane {
    /// Tab identity
    pub tab_id: String,
    /// Whether the pane's form currently reports unsaved changes
    pub modified: bool,
    /// Owning entity type, read from the pane form's data attribute.
    /// `None` when the pane holds no form.
    pub entity: Option<String>,
}
