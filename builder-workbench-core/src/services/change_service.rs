//! Change-state tracking service

use std::collections::HashMap;
use std::sync::Arc;

use crate::services::ServiceContext;

/// Tracks per-form dirty/clean transitions and keeps the side-nav modified
/// counters in sync with the open panes.
pub struct ChangeService {
    ctx: Arc<ServiceContext>,
}

impl ChangeService {
    /// Create a change service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// A form inside `tab_id`'s pane started reporting unsaved changes.
    pub async fn on_form_changed(&self, tab_id: &str) {
        self.ctx.tab_strip.notify_pane_modified(tab_id, true).await;
        self.update_modified_counters().await;
    }

    /// A form inside `tab_id`'s pane went back to clean.
    pub async fn on_form_unchanged(&self, tab_id: &str) {
        self.ctx.tab_strip.notify_pane_modified(tab_id, false).await;
        self.update_modified_counters().await;
    }

    /// Recompute every entity type's modified counter from scratch and
    /// publish all of them (zeros included) to the side navigation.
    ///
    /// Deliberately a full scan per change event rather than an incremental
    /// update: the cost is O(open tabs) and tab counts stay small.
    pub async fn update_modified_counters(&self) {
        let registry = &self.ctx.entity_registry;
        let mut counters: HashMap<&str, usize> =
            registry.iter().map(|(entity, _)| (entity, 0)).collect();

        for pane in self.ctx.tab_strip.panes().await {
            if !pane.modified {
                continue;
            }
            let Some(entity) = pane.entity.as_deref() else {
                continue;
            };
            match counters.get_mut(entity) {
                Some(count) => *count += 1,
                None => log::warn!(
                    "Modified pane {} declares unregistered entity type {entity}",
                    pane.tab_id
                ),
            }
        }

        for (entity, registration) in registry.iter() {
            let key = format!("{}/{}", self.ctx.config.nav_section, registration.menu);
            let count = counters.get(entity).copied().unwrap_or(0);
            self.ctx.side_nav.set_counter(&key, count).await;
        }
    }

    /// Force the form in `tab_id`'s pane back into the clean state, used
    /// when a tab is programmatically considered saved or reset.
    pub async fn force_clean(&self, tab_id: &str) {
        self.ctx.change_monitor.force_clean(tab_id).await;
    }
}
