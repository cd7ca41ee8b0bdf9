use crate::file_handler::FileHandler;
use crate::workspace::Workspace;

/// What a command may touch while it executes
#[derive(Debug)]
pub struct CommandContext<'a> {
    /// The elements, selection, zoom and menu
    pub workspace: &'a mut Workspace,
    /// Where image uploads are queued
    pub file_handler: &'a mut FileHandler,
}

impl<'a> CommandContext<'a> {
    pub fn new(workspace: &'a mut Workspace, file_handler: &'a mut FileHandler) -> Self {
        Self {
            workspace,
            file_handler,
        }
    }
}
