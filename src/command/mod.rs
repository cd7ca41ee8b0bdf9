mod commands;
mod context;

pub use commands::Command;
pub use context::CommandContext;

use crate::error::WorkspaceError;

/// Result type for command operations
pub type CommandResult = Result<(), WorkspaceError>;
