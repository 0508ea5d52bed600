//! Builder Workbench Core Library
//!
//! Platform-independent controller for the tabbed builder workspace:
//! - Command routing to entity sub-controllers (Command Service)
//! - Master tab lifecycle and page chrome synchronization (Tab Service)
//! - Unsaved-change tracking and side-nav counters (Change Service)
//!
//! Visual widgets, the server transport and the per-entity command
//! implementations all live behind traits and are injected by the frontend.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use traits::{EntityController, EntityRegistration, EntityRegistry};
