//! Workspace configuration

use serde::{Deserialize, Serialize};

/// Static configuration for the workspace controller.
///
/// Injected once at construction; frontends that keep the defaults get the
/// stock builder layout ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Identifier of the master tab set. Shown-events from any other tab
    /// set are ignored.
    pub master_tab_set: String,
    /// Product name appended to non-empty page titles as `" | <product>"`.
    pub product_name: String,
    /// Side navigation section that prefixes counter keys
    /// (`"<section>/<menu>"`).
    pub nav_section: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            master_tab_set: "builder-master-tabs".to_string(),
            product_name: "Builder".to_string(),
            nav_section: "builder".to_string(),
        }
    }
}
