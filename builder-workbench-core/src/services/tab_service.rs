//! Tab lifecycle service

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::CoreResult;
use crate::services::ServiceContext;

/// Manages master tab open/reuse/close and the page chrome tied to the
/// active tab.
pub struct TabService {
    ctx: Arc<ServiceContext>,
    /// Tab ids with a load currently in flight. Closes the race between the
    /// open-tab check and the response arriving: a second open for the same
    /// id while the first is still loading is treated as a reuse.
    pending_loads: RwLock<HashSet<String>>,
}

impl TabService {
    /// Create a tab service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            ctx,
            pending_loads: RwLock::new(HashSet::new()),
        }
    }

    /// Open the tab `tab_id`, loading it from the server on a cache miss.
    ///
    /// Returns `Ok(true)` when the tab already existed (or its load is
    /// already in flight) and was only activated; opening the same logical
    /// document twice never issues a second request. On the load path the
    /// busy indicator brackets the request and is hidden when it settles,
    /// success or failure.
    ///
    /// # Arguments
    /// * `form_id` - Form used as the request context
    /// * `server_handler` - Server handler that renders the tab
    /// * `tab_id` - Identity of the document tab
    /// * `data` - Request payload, defaults to an empty object
    pub async fn open_or_load(
        &self,
        form_id: &str,
        server_handler: &str,
        tab_id: &str,
        data: Option<Value>,
    ) -> CoreResult<bool> {
        if self.ctx.tab_strip.go_to(tab_id).await {
            return Ok(true);
        }

        {
            let mut pending = self.pending_loads.write().await;
            if !pending.insert(tab_id.to_string()) {
                log::debug!("Tab {tab_id} is already loading, skipping duplicate open");
                return Ok(true);
            }
        }

        let request_data = data.unwrap_or_else(|| Value::Object(serde_json::Map::new()));

        self.ctx.busy_indicator.show().await;
        let result = self
            .ctx
            .transport
            .request(form_id, server_handler, &request_data)
            .await;
        self.ctx.busy_indicator.hide().await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                // Clear the marker before returning so a retry can load again.
                self.pending_loads.write().await.remove(tab_id);
                if e.is_expected() {
                    log::warn!("Tab load for {tab_id} via {server_handler} failed: {e}");
                } else {
                    log::error!("Tab load for {tab_id} via {server_handler} failed: {e}");
                }
                return Err(e);
            }
        };

        self.ctx
            .tab_strip
            .add_tab(
                &response.tab_title,
                &response.tab_content,
                &response.tab_id,
                &response.tab_icon,
            )
            .await;
        // The marker must outlive add_tab: a concurrent open between marker
        // removal and tab insertion would see neither and load again.
        self.pending_loads.write().await.remove(tab_id);
        log::debug!("Opened master tab {}", response.tab_id);
        Ok(false)
    }

    /// React to a tab becoming active.
    ///
    /// Shown-events from nested tab widgets elsewhere on the page are
    /// ignored; only the master tab set drives the page chrome. A tab
    /// without a title leaves the current title untouched.
    pub async fn on_tab_shown(&self, tab_set: &str, tab_id: &str, title: Option<&str>) {
        if tab_set != self.ctx.config.master_tab_set {
            return;
        }

        if let Some(title) = title {
            if !title.is_empty() {
                let text = format!("{title} | {}", self.ctx.config.product_name);
                self.ctx.page_chrome.set_page_title(&text).await;
            }
        }

        self.ctx.file_list.mark_active(Some(tab_id)).await;
        self.ctx.page_chrome.broadcast_resize().await;
    }

    /// React to the last master tab closing: clear the page title and the
    /// file list highlight.
    pub async fn on_all_tabs_closed(&self) {
        self.ctx.page_chrome.set_page_title("").await;
        self.ctx.file_list.mark_active(None).await;
    }
}
