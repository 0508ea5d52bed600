//! Controller service layer

mod change_service;
mod command_service;
mod tab_service;

pub use change_service::ChangeService;
pub use command_service::CommandService;
pub use tab_service::TabService;

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::{
    BusyIndicator, ChangeMonitor, EntityRegistration, EntityRegistry, FileList, FormTransport,
    PageChrome, SideNav, TabStrip,
};
use crate::types::WorkspaceConfig;

/// Service context - holds all injected collaborators
///
/// The frontend creates this once at startup and injects its platform
/// widgets and transport.
pub struct ServiceContext {
    /// Master tab widget
    pub tab_strip: Arc<dyn TabStrip>,
    /// Form change-detection widget
    pub change_monitor: Arc<dyn ChangeMonitor>,
    /// Server transport
    pub transport: Arc<dyn FormTransport>,
    /// Global busy indicator
    pub busy_indicator: Arc<dyn BusyIndicator>,
    /// Side navigation badges
    pub side_nav: Arc<dyn SideNav>,
    /// Side file list
    pub file_list: Arc<dyn FileList>,
    /// Document title / viewport notifications
    pub page_chrome: Arc<dyn PageChrome>,
    /// Entity sub-controller registry
    pub entity_registry: Arc<EntityRegistry>,
    /// Static workspace configuration
    pub config: WorkspaceConfig,
}

impl ServiceContext {
    /// Look up an entity registration, failing with the configuration
    /// error the command router surfaces for misconfigured UI.
    pub fn entity(&self, entity_type: &str) -> CoreResult<&EntityRegistration> {
        self.entity_registry
            .get(entity_type)
            .ok_or_else(|| CoreError::UnknownEntity(entity_type.to_string()))
    }
}
