//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Command token referenced an entity type absent from the registry.
    /// A misconfigured UI, never expected in production.
    #[error("Unknown entity type: {0}")]
    UnknownEntity(String),

    /// An entity sub-controller failed a command
    #[error("Command failed: {entity}:{action} - {message}")]
    CommandFailed {
        entity: String,
        action: String,
        message: String,
    },

    /// Remote tab load failed (network or server side)
    #[error("Tab load error: {0}")]
    TabLoad(String),

    /// Validation error (builder misuse, missing collaborators)
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// Whether it is expected behavior (remote hiccups, user input) used for
    /// log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::TabLoad(_))
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
