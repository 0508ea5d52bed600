//! Platform-agnostic application bootstrap for Builder Workbench.
//!
//! Provides `AppState` (service container), `AppStateBuilder` (collaborator
//! injection) and the typed entry points a frontend drives: `handle_event`
//! for workspace events and `on_command` for command triggers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use builder_workbench_core::error::{CoreError, CoreResult};
use builder_workbench_core::services::{
    ChangeService, CommandService, ServiceContext, TabService,
};
use builder_workbench_core::traits::{
    BusyIndicator, ChangeMonitor, EntityController, EntityRegistry, FileList, FormTransport,
    PageChrome, SideNav, TabStrip,
};
use builder_workbench_core::types::{CommandTrigger, Dispatch, WorkspaceConfig, WorkspaceEvent};

/// Platform-agnostic application state.
///
/// Holds the `ServiceContext` and all controller services. Every frontend
/// constructs this once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Service context (holds all injected collaborators)
    pub ctx: Arc<ServiceContext>,
    /// Command routing service
    pub command_service: CommandService,
    /// Tab lifecycle service
    pub tab_service: TabService,
    /// Change-state tracking service
    pub change_service: ChangeService,
    /// Whether the one-shot startup sequence has run
    startup_completed: AtomicBool,
}

impl AppState {
    /// Run the startup sequence once: give every registered entity
    /// sub-controller the chance to bind its own surface handlers.
    /// Subsequent calls are ignored.
    pub async fn run_startup(&self) {
        if self.startup_completed.swap(true, Ordering::SeqCst) {
            log::warn!("Startup sequence already ran, ignoring");
            return;
        }

        for (entity_type, registration) in self.ctx.entity_registry.iter() {
            registration.controller.register_handlers().await;
            log::debug!("Registered handlers for entity type {entity_type}");
        }
        log::info!(
            "Workspace controller started with {} entity types",
            self.ctx.entity_registry.len()
        );
    }

    /// Dispatch one typed workspace event to the owning service.
    pub async fn handle_event(&self, event: WorkspaceEvent) {
        match event {
            WorkspaceEvent::TabShown {
                tab_set,
                tab_id,
                title,
            } => {
                self.tab_service
                    .on_tab_shown(&tab_set, &tab_id, title.as_deref())
                    .await;
            }
            WorkspaceEvent::AllTabsClosed => self.tab_service.on_all_tabs_closed().await,
            WorkspaceEvent::FormChanged { tab_id } => {
                self.change_service.on_form_changed(&tab_id).await;
            }
            WorkspaceEvent::FormUnchanged { tab_id } => {
                self.change_service.on_form_unchanged(&tab_id).await;
            }
        }
    }

    /// Surface handler for command triggers.
    ///
    /// Failures are the caller's to surface; the controller deliberately
    /// catches nothing here, so an unknown entity type halts the event.
    pub async fn on_command(&self, trigger: &CommandTrigger) -> CoreResult<Dispatch> {
        self.command_service.on_command(trigger).await
    }
}

/// Builder for constructing `AppState` with platform-specific collaborators.
///
/// # Required collaborators
/// - `tab_strip` — the master tab widget
/// - `change_monitor` — the form change-detection widget
/// - `transport` — the server request transport
/// - `busy_indicator`, `side_nav`, `file_list`, `page_chrome` — page chrome
///
/// # Optional
/// - `config` — defaults to `WorkspaceConfig::default()`
/// - entity registrations via `register_entity`
pub struct AppStateBuilder {
    tab_strip: Option<Arc<dyn TabStrip>>,
    change_monitor: Option<Arc<dyn ChangeMonitor>>,
    transport: Option<Arc<dyn FormTransport>>,
    busy_indicator: Option<Arc<dyn BusyIndicator>>,
    side_nav: Option<Arc<dyn SideNav>>,
    file_list: Option<Arc<dyn FileList>>,
    page_chrome: Option<Arc<dyn PageChrome>>,
    entity_registry: EntityRegistry,
    config: WorkspaceConfig,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tab_strip: None,
            change_monitor: None,
            transport: None,
            busy_indicator: None,
            side_nav: None,
            file_list: None,
            page_chrome: None,
            entity_registry: EntityRegistry::new(),
            config: WorkspaceConfig::default(),
        }
    }

    #[must_use]
    pub fn tab_strip(mut self, tab_strip: Arc<dyn TabStrip>) -> Self {
        self.tab_strip = Some(tab_strip);
        self
    }

    #[must_use]
    pub fn change_monitor(mut self, change_monitor: Arc<dyn ChangeMonitor>) -> Self {
        self.change_monitor = Some(change_monitor);
        self
    }

    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn FormTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    #[must_use]
    pub fn busy_indicator(mut self, busy_indicator: Arc<dyn BusyIndicator>) -> Self {
        self.busy_indicator = Some(busy_indicator);
        self
    }

    #[must_use]
    pub fn side_nav(mut self, side_nav: Arc<dyn SideNav>) -> Self {
        self.side_nav = Some(side_nav);
        self
    }

    #[must_use]
    pub fn file_list(mut self, file_list: Arc<dyn FileList>) -> Self {
        self.file_list = Some(file_list);
        self
    }

    #[must_use]
    pub fn page_chrome(mut self, page_chrome: Arc<dyn PageChrome>) -> Self {
        self.page_chrome = Some(page_chrome);
        self
    }

    /// Register an entity sub-controller under its type name and the
    /// side-nav menu key its modified counter publishes to.
    #[must_use]
    pub fn register_entity(
        mut self,
        entity_type: impl Into<String>,
        menu: impl Into<String>,
        controller: Arc<dyn EntityController>,
    ) -> Self {
        self.entity_registry.register(entity_type, menu, controller);
        self
    }

    #[must_use]
    pub fn config(mut self, config: WorkspaceConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::Validation` if required collaborators are missing.
    pub fn build(self) -> CoreResult<AppState> {
        let tab_strip = self
            .tab_strip
            .ok_or_else(|| CoreError::Validation("tab_strip is required".to_string()))?;
        let change_monitor = self
            .change_monitor
            .ok_or_else(|| CoreError::Validation("change_monitor is required".to_string()))?;
        let transport = self
            .transport
            .ok_or_else(|| CoreError::Validation("transport is required".to_string()))?;
        let busy_indicator = self
            .busy_indicator
            .ok_or_else(|| CoreError::Validation("busy_indicator is required".to_string()))?;
        let side_nav = self
            .side_nav
            .ok_or_else(|| CoreError::Validation("side_nav is required".to_string()))?;
        let file_list = self
            .file_list
            .ok_or_else(|| CoreError::Validation("file_list is required".to_string()))?;
        let page_chrome = self
            .page_chrome
            .ok_or_else(|| CoreError::Validation("page_chrome is required".to_string()))?;

        let ctx = Arc::new(ServiceContext {
            tab_strip,
            change_monitor,
            transport,
            busy_indicator,
            side_nav,
            file_list,
            page_chrome,
            entity_registry: Arc::new(self.entity_registry),
            config: self.config,
        });

        Ok(AppState {
            command_service: CommandService::new(Arc::clone(&ctx)),
            tab_service: TabService::new(Arc::clone(&ctx)),
            change_service: ChangeService::new(Arc::clone(&ctx)),
            ctx,
            startup_completed: AtomicBool::new(false),
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
