//! Type definitions module

mod command;
mod config;
mod event;
mod tab;

pub use command::CommandToken;
pub use config::WorkspaceConfig;
pub use event::{
    CommandEvent, CommandTrigger, Dispatch, TriggerKind, TriggerSource, WorkspaceEvent,
};
pub use tab::{TabLoadResponse, TabPane};
