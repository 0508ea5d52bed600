//! Test helper module
//!
//! Provides mock collaborator implementations and convenient test factory
//! methods.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{Notify, RwLock};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::{
    BusyIndicator, ChangeMonitor, EntityController, EntityRegistry, FileList, FormTransport,
    PageChrome, SideNav, TabStrip,
};
use crate::types::{CommandEvent, TabLoadResponse, TabPane, WorkspaceConfig};

// ===== MockTabStrip =====

#[derive(Default)]
pub struct MockTabStrip {
    panes: RwLock<Vec<TabPane>>,
    active: RwLock<Option<String>>,
    pane_signals: RwLock<Vec<(String, bool)>>,
    add_tab_gate: RwLock<Option<Arc<Notify>>>,
    add_tab_entered: AtomicUsize,
}

impl MockTabStrip {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push_pane(&self, pane: TabPane) {
        self.panes.write().await.push(pane);
    }

    pub async fn set_pane_modified(&self, tab_id: &str, modified: bool) {
        let mut panes = self.panes.write().await;
        if let Some(pane) = panes.iter_mut().find(|p| p.tab_id == tab_id) {
            pane.modified = modified;
        }
    }

    pub async fn close_tab(&self, tab_id: &str) {
        self.panes.write().await.retain(|p| p.tab_id != tab_id);
    }

    pub async fn active(&self) -> Option<String> {
        self.active.read().await.clone()
    }

    /// Pane-local modified/unmodified signals, in emission order.
    pub async fn pane_signals(&self) -> Vec<(String, bool)> {
        self.pane_signals.read().await.clone()
    }

    /// Block `add_tab` until `notify_one` is called on the returned handle,
    /// for tests racing an open against tab insertion.
    pub async fn set_add_tab_gate(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.add_tab_gate.write().await = Some(Arc::clone(&gate));
        gate
    }

    pub fn add_tab_entered(&self) -> usize {
        self.add_tab_entered.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TabStrip for MockTabStrip {
    async fn go_to(&self, tab_id: &str) -> bool {
        let found = self.panes.read().await.iter().any(|p| p.tab_id == tab_id);
        if found {
            *self.active.write().await = Some(tab_id.to_string());
        }
        found
    }

    async fn add_tab(&self, _title: &str, _content: &str, tab_id: &str, _icon: &str) {
        self.add_tab_entered.fetch_add(1, Ordering::SeqCst);
        let gate = self.add_tab_gate.read().await.clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.panes.write().await.push(TabPane {
            tab_id: tab_id.to_string(),
            modified: false,
            entity: None,
        });
        *self.active.write().await = Some(tab_id.to_string());
    }

    async fn panes(&self) -> Vec<TabPane> {
        self.panes.read().await.clone()
    }

    async fn notify_pane_modified(&self, tab_id: &str, modified: bool) {
        self.pane_signals
            .write()
            .await
            .push((tab_id.to_string(), modified));
    }
}

// ===== MockTransport =====

#[derive(Default)]
pub struct MockTransport {
    response: RwLock<Option<TabLoadResponse>>,
    error: RwLock<Option<String>>,
    requests: RwLock<Vec<(String, String, Value)>>,
    request_count: AtomicUsize,
    gate: RwLock<Option<Arc<Notify>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_response(&self, response: TabLoadResponse) {
        *self.response.write().await = Some(response);
    }

    /// Make the next requests fail with `CoreError::TabLoad`.
    pub async fn set_error(&self, message: &str) {
        *self.error.write().await = Some(message.to_string());
    }

    pub async fn clear_error(&self) {
        *self.error.write().await = None;
    }

    /// Block requests until `notify_one` is called on the returned handle,
    /// for in-flight race tests.
    pub async fn set_gate(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.write().await = Some(Arc::clone(&gate));
        gate
    }

    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    pub async fn requests(&self) -> Vec<(String, String, Value)> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl FormTransport for MockTransport {
    async fn request(&self, form_id: &str, handler: &str, data: &Value) -> CoreResult<TabLoadResponse> {
        self.requests
            .write()
            .await
            .push((form_id.to_string(), handler.to_string(), data.clone()));
        self.request_count.fetch_add(1, Ordering::SeqCst);

        let gate = self.gate.read().await.clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if let Some(message) = self.error.read().await.clone() {
            return Err(CoreError::TabLoad(message));
        }
        self.response
            .read()
            .await
            .clone()
            .ok_or_else(|| CoreError::TabLoad("no response configured".to_string()))
    }
}

// ===== MockBusyIndicator =====

#[derive(Default)]
pub struct MockBusyIndicator {
    shows: AtomicUsize,
    hides: AtomicUsize,
}

impl MockBusyIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_count(&self) -> usize {
        self.shows.load(Ordering::SeqCst)
    }

    pub fn hide_count(&self) -> usize {
        self.hides.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BusyIndicator for MockBusyIndicator {
    async fn show(&self) {
        self.shows.fetch_add(1, Ordering::SeqCst);
    }

    async fn hide(&self) {
        self.hides.fetch_add(1, Ordering::SeqCst);
    }
}

// ===== MockSideNav =====

#[derive(Default)]
pub struct MockSideNav {
    counters: RwLock<HashMap<String, usize>>,
}

impl MockSideNav {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last published count for `location_key`, or `None` if never set.
    pub async fn counter(&self, location_key: &str) -> Option<usize> {
        self.counters.read().await.get(location_key).copied()
    }
}

#[async_trait]
impl SideNav for MockSideNav {
    async fn set_counter(&self, location_key: &str, count: usize) {
        self.counters
            .write()
            .await
            .insert(location_key.to_string(), count);
    }
}

// ===== MockFileList =====

#[derive(Default)]
pub struct MockFileList {
    calls: RwLock<Vec<Option<String>>>,
}

impl MockFileList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last `mark_active` argument, or `None` if never called.
    pub async fn last_active(&self) -> Option<Option<String>> {
        self.calls.read().await.last().cloned()
    }
}

#[async_trait]
impl FileList for MockFileList {
    async fn mark_active(&self, tab_id: Option<&str>) {
        self.calls.write().await.push(tab_id.map(str::to_string));
    }
}

// ===== MockPageChrome =====

#[derive(Default)]
pub struct MockPageChrome {
    titles: RwLock<Vec<String>>,
    resizes: AtomicUsize,
}

impl MockPageChrome {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn last_title(&self) -> Option<String> {
        self.titles.read().await.last().cloned()
    }

    pub fn resize_count(&self) -> usize {
        self.resizes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageChrome for MockPageChrome {
    async fn set_page_title(&self, title: &str) {
        self.titles.write().await.push(title.to_string());
    }

    async fn broadcast_resize(&self) {
        self.resizes.fetch_add(1, Ordering::SeqCst);
    }
}

// ===== MockChangeMonitor =====

#[derive(Default)]
pub struct MockChangeMonitor {
    cleaned: RwLock<Vec<String>>,
}

impl MockChangeMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn cleaned(&self) -> Vec<String> {
        self.cleaned.read().await.clone()
    }
}

#[async_trait]
impl ChangeMonitor for MockChangeMonitor {
    async fn force_clean(&self, tab_id: &str) {
        self.cleaned.write().await.push(tab_id.to_string());
    }
}

// ===== MockEntityController =====

#[derive(Default)]
pub struct MockEntityController {
    invocations: RwLock<Vec<(String, CommandEvent)>>,
    /// If `Some`, `invoke_command` fails with this message.
    error: RwLock<Option<String>>,
}

impl MockEntityController {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_error(&self, message: &str) {
        *self.error.write().await = Some(message.to_string());
    }

    pub async fn invocations(&self) -> Vec<(String, CommandEvent)> {
        self.invocations.read().await.clone()
    }
}

#[async_trait]
impl EntityController for MockEntityController {
    async fn invoke_command(&self, action: &str, ev: &CommandEvent) -> CoreResult<()> {
        self.invocations
            .write()
            .await
            .push((action.to_string(), ev.clone()));
        if let Some(message) = self.error.read().await.clone() {
            return Err(CoreError::CommandFailed {
                entity: "database".to_string(),
                action: action.to_string(),
                message,
            });
        }
        Ok(())
    }
}

// ===== Factory methods =====

/// All mock collaborators plus the assembled `ServiceContext`.
pub struct TestContext {
    pub ctx: Arc<ServiceContext>,
    pub tab_strip: Arc<MockTabStrip>,
    pub change_monitor: Arc<MockChangeMonitor>,
    pub transport: Arc<MockTransport>,
    pub busy_indicator: Arc<MockBusyIndicator>,
    pub side_nav: Arc<MockSideNav>,
    pub file_list: Arc<MockFileList>,
    pub page_chrome: Arc<MockPageChrome>,
}

/// Create a test `ServiceContext` around the given registry, with the
/// default `WorkspaceConfig`.
pub fn create_test_context(registry: EntityRegistry) -> TestContext {
    let tab_strip = Arc::new(MockTabStrip::new());
    let change_monitor = Arc::new(MockChangeMonitor::new());
    let transport = Arc::new(MockTransport::new());
    let busy_indicator = Arc::new(MockBusyIndicator::new());
    let side_nav = Arc::new(MockSideNav::new());
    let file_list = Arc::new(MockFileList::new());
    let page_chrome = Arc::new(MockPageChrome::new());

    let ctx = Arc::new(ServiceContext {
        tab_strip: Arc::clone(&tab_strip) as Arc<dyn TabStrip>,
        change_monitor: Arc::clone(&change_monitor) as Arc<dyn ChangeMonitor>,
        transport: Arc::clone(&transport) as Arc<dyn FormTransport>,
        busy_indicator: Arc::clone(&busy_indicator) as Arc<dyn BusyIndicator>,
        side_nav: Arc::clone(&side_nav) as Arc<dyn SideNav>,
        file_list: Arc::clone(&file_list) as Arc<dyn FileList>,
        page_chrome: Arc::clone(&page_chrome) as Arc<dyn PageChrome>,
        entity_registry: Arc::new(registry),
        config: WorkspaceConfig::default(),
    });

    TestContext {
        ctx,
        tab_strip,
        change_monitor,
        transport,
        busy_indicator,
        side_nav,
        file_list,
        page_chrome,
    }
}

/// A registry with one `database` entity, the smallest realistic setup.
pub fn database_registry() -> (EntityRegistry, Arc<MockEntityController>) {
    let controller = Arc::new(MockEntityController::new());
    let mut registry = EntityRegistry::new();
    registry.register(
        "database",
        "database",
        Arc::clone(&controller) as Arc<dyn EntityController>,
    );
    (registry, controller)
}

/// Create a `TabLoadResponse` for testing.
pub fn sample_response(tab_id: &str, title: &str) -> TabLoadResponse {
    TabLoadResponse {
        tab_title: title.to_string(),
        tab_content: format!("<div data-entity=\"database\">{title}</div>"),
        tab_id: tab_id.to_string(),
        tab_icon: "icon-database".to_string(),
    }
}

/// Create a `TabPane` snapshot for testing.
pub fn sample_pane(tab_id: &str, modified: bool, entity: Option<&str>) -> TabPane {
    TabPane {
        tab_id: tab_id.to_string(),
        modified,
        entity: entity.map(str::to_string),
    }
}
