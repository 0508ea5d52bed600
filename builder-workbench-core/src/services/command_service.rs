//! Command routing service

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::{CommandEvent, CommandToken, CommandTrigger, Dispatch, TriggerKind, TriggerSource};

/// Routes `entity:action` command tokens to entity sub-controllers.
pub struct CommandService {
    ctx: Arc<ServiceContext>,
}

impl CommandService {
    /// Create a command service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Route one raw command token.
    ///
    /// Tokens that do not match `entity:action` are ignored on purpose: the
    /// command attribute doubles for non-command uses. An unregistered
    /// entity is a configuration error and fails fatally; sub-controller
    /// failures propagate unmodified.
    pub async fn trigger_command(&self, command: &str, ev: &CommandEvent) -> CoreResult<Dispatch> {
        let Some(token) = CommandToken::parse(command) else {
            log::debug!("Ignoring non-command token: {command}");
            return Ok(Dispatch::Ignored);
        };

        let registration = self.ctx.entity(&token.entity)?;
        log::debug!("Dispatching command {token}");
        registration.controller.invoke_command(&token.action, ev).await?;
        Ok(Dispatch::Handled)
    }

    /// Surface handler for command attributes, bound once at startup for
    /// both click and submit interactions.
    ///
    /// Forms are submit-only: a click on a form carrying a command
    /// attribute is skipped so the command cannot fire twice. For every
    /// other trigger the caller suppresses the default action per
    /// `Dispatch::suppress_default`, whether or not dispatch succeeds.
    pub async fn on_command(&self, trigger: &CommandTrigger) -> CoreResult<Dispatch> {
        if trigger.source == TriggerSource::Form && trigger.kind == TriggerKind::Click {
            return Ok(Dispatch::FormClickSkipped);
        }

        self.trigger_command(&trigger.command, &trigger.event).await
    }
}
