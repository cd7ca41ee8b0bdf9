use egui::Pos2;

use super::{CommandContext, CommandResult};
use crate::element::{ElementId, ImageSource, TextStyle};
use crate::menu::MenuAction;

/// Everything the panels can ask the workspace to do.
///
/// Panels only emit commands; the app executes them in order once the frame's
/// UI has been laid out.
#[derive(Debug, Clone)]
pub enum Command {
    /// Open or close a sidebar category
    ToggleMenu(usize),
    /// Add a text element from the preset for this style
    AddText(TextStyle),
    /// Ask the user for image files
    RequestImageUpload,
    /// Add decoded images as new elements
    AddImages(Vec<ImageSource>),
    SelectElement(ElementId),
    BeginEdit(ElementId),
    UpdateText {
        element_id: ElementId,
        text: String,
    },
    CommitEdit,
    /// Drop a dragged element at its final position
    MoveElement {
        element_id: ElementId,
        position: Pos2,
    },
    PointerDownOutside,
    DeleteSelected,
    ZoomIn,
    ZoomOut,
}

impl Command {
    /// The command behind a sidebar option, if it does anything
    pub fn from_menu_action(action: MenuAction) -> Option<Self> {
        match action {
            MenuAction::AddText(style) => Some(Command::AddText(style)),
            MenuAction::UploadImage => Some(Command::RequestImageUpload),
            MenuAction::Unimplemented => None,
        }
    }

    pub fn execute(self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let workspace = &mut *ctx.workspace;
        match self {
            Command::ToggleMenu(index) => workspace.toggle_menu(index),
            Command::AddText(style) => {
                workspace.add_text_style(style);
            }
            Command::RequestImageUpload => ctx.file_handler.pick_images(),
            Command::AddImages(sources) => {
                workspace.add_images(sources);
            }
            Command::SelectElement(element_id) => workspace.select(element_id)?,
            Command::BeginEdit(element_id) => workspace.begin_edit(element_id)?,
            Command::UpdateText { element_id, text } => workspace.update_text(element_id, text)?,
            Command::CommitEdit => workspace.commit_edit(),
            Command::MoveElement {
                element_id,
                position,
            } => workspace.move_element(element_id, position)?,
            Command::PointerDownOutside => workspace.pointer_down_outside(),
            Command::DeleteSelected => {
                workspace.delete_selected();
            }
            Command::ZoomIn => workspace.zoom_in(),
            Command::ZoomOut => workspace.zoom_out(),
        }
        Ok(())
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::ToggleMenu(_) => "Toggle Menu",
            Command::AddText(_) => "Add Text",
            Command::RequestImageUpload => "Request Image Upload",
            Command::AddImages(_) => "Add Images",
            Command::SelectElement(_) => "Select Element",
            Command::BeginEdit(_) => "Begin Edit",
            Command::UpdateText { .. } => "Update Text",
            Command::CommitEdit => "Commit Edit",
            Command::MoveElement { .. } => "Move Element",
            Command::PointerDownOutside => "Pointer Down Outside",
            Command::DeleteSelected => "Delete Selected",
            Command::ZoomIn => "Zoom In",
            Command::ZoomOut => "Zoom Out",
        }
    }
}
