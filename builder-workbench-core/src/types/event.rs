//! Typed workspace events
//!
//! The original markup-driven event delegation is replaced with explicit
//! event types: the frontend translates its widget events into
//! `WorkspaceEvent` / `CommandTrigger` values and feeds them to the
//! controller.

use serde_json::Value;

/// Events emitted by the master tab set and the forms nested inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceEvent {
    /// A tab became active. `tab_set` identifies the emitting tab container
    /// so nested tab widgets elsewhere on the page can be told apart from
    /// the master set.
    TabShown {
        tab_set: String,
        tab_id: String,
        title: Option<String>,
    },
    /// The last master tab was closed.
    AllTabsClosed,
    /// A form inside a pane started reporting unsaved changes.
    FormChanged { tab_id: String },
    /// A form inside a pane went back to clean.
    FormUnchanged { tab_id: String },
}

/// What kind of element carried the command attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerSource {
    /// A form element; commands on forms fire on submit only
    Form,
    /// Any other element
    Element,
}

/// The interaction that fired the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    Click,
    Submit,
}

/// Opaque event payload handed through to entity sub-controllers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandEvent {
    /// Identifier of the element the command attribute sits on, if any
    pub source_id: Option<String>,
    /// Arbitrary payload captured from the triggering surface
    pub payload: Value,
}

/// A command attribute firing from the UI surface.
#[derive(Debug, Clone)]
pub struct CommandTrigger {
    /// Raw command attribute value
    pub command: String,
    pub source: TriggerSource,
    pub kind: TriggerKind,
    pub event: CommandEvent,
}

/// Outcome of routing one trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Token parsed and a sub-controller handled it
    Handled,
    /// Token did not match `entity:action`; deliberately ignored
    Ignored,
    /// Click on a form element; forms are submit-only
    FormClickSkipped,
}

impl Dispatch {
    /// Whether the frontend should suppress the default action of the
    /// triggering event. Holds whenever a command attribute was present,
    /// regardless of dispatch outcome; only a skipped form click falls
    /// through to the default action.
    #[must_use]
    pub fn suppress_default(self) -> bool {
        !matches!(self, Self::FormClickSkipped)
    }
}
