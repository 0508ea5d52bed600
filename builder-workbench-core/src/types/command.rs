//! Command token parsing

use std::fmt;

use serde::{Deserialize, Serialize};

/// A routed UI command of the form `entity:action`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandToken {
    /// Entity type that owns the command namespace
    pub entity: String,
    /// Command name within that namespace
    pub action: String,
}

impl CommandToken {
    /// Parse a raw command attribute value.
    ///
    /// Only the exact two-segment `entity:action` shape parses. Anything
    /// else returns `None` so the attribute stays reusable for non-command
    /// purposes.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(entity), Some(action), None) => Some(Self {
                entity: entity.to_string(),
                action: action.to_string(),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for CommandToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.entity, self.action)
    }
}
