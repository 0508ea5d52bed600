//! Entity sub-controller capability and registry

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::CommandEvent;

/// Capability implemented by each entity-type sub-controller.
///
/// Sub-controllers own the create/save/delete semantics of their entity
/// type; the router only hands them the action name and the triggering
/// event. Errors propagate to the command surface uncaught.
#[async_trait]
pub trait EntityController: Send + Sync {
    /// Handle one named command.
    ///
    /// # Arguments
    /// * `action` - Command name within the entity's namespace
    /// * `ev` - The triggering surface event
    async fn invoke_command(&self, action: &str, ev: &CommandEvent) -> CoreResult<()>;

    /// One-shot startup hook for controllers that bind their own surface
    /// handlers.
    async fn register_handlers(&self) {}
}

/// One registry entry: the sub-controller plus its side-nav counter target.
#[derive(Clone)]
pub struct EntityRegistration {
    /// The sub-controller instance
    pub controller: Arc<dyn EntityController>,
    /// Menu key the entity's modified counter is published under
    pub menu: String,
}

/// Entity controller registry
///
/// Maps entity-type names to sub-controller registrations. Built once
/// before the controller is constructed and passed by reference; keys are
/// fixed for the process lifetime, so no lock is needed.
#[derive(Default)]
pub struct EntityRegistry {
    entries: HashMap<String, EntityRegistration>,
}

impl EntityRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a sub-controller under its entity type name.
    ///
    /// # Arguments
    /// * `entity_type` - Entity type name (command token's first segment)
    /// * `menu` - Side-nav menu key for the entity's modified counter
    /// * `controller` - Sub-controller instance
    pub fn register(
        &mut self,
        entity_type: impl Into<String>,
        menu: impl Into<String>,
        controller: Arc<dyn EntityController>,
    ) {
        self.entries.insert(
            entity_type.into(),
            EntityRegistration {
                controller,
                menu: menu.into(),
            },
        );
    }

    /// Get a registration by entity type name
    #[must_use]
    pub fn get(&self, entity_type: &str) -> Option<&EntityRegistration> {
        self.entries.get(entity_type)
    }

    /// Iterate over all registrations
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntityRegistration)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
