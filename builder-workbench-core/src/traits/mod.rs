//! External collaborator abstraction trait definitions

mod change_monitor;
mod chrome;
mod entity_controller;
mod tab_strip;
mod transport;

pub use change_monitor::ChangeMonitor;
pub use chrome::{BusyIndicator, FileList, PageChrome, SideNav};
pub use entity_controller::{EntityController, EntityRegistration, EntityRegistry};
pub use tab_strip::TabStrip;
pub use transport::FormTransport;
