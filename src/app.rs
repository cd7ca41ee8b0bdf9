use crate::command::{Command, CommandContext};
use crate::config::WorkspaceConfig;
use crate::file_handler::FileHandler;
use crate::input::InputHandler;
use crate::interaction::CanvasInteraction;
use crate::panels::{central_panel, header_panel, sidebar_panel};
use crate::renderer::Renderer;
use crate::workspace::Workspace;

/// The poster editor: a header, the sidebar menu and the zoomable canvas.
///
/// Nothing is persisted; closing the app discards the poster.
#[derive(Debug)]
pub struct PosterApp {
    pub(crate) workspace: Workspace,
    pub(crate) renderer: Renderer,
    pub(crate) file_handler: FileHandler,
    pub(crate) input_handler: InputHandler,
    pub(crate) canvas: CanvasInteraction,
    pub(crate) dark_mode: bool,
}

impl Default for PosterApp {
    fn default() -> Self {
        Self::with_config(WorkspaceConfig::default())
    }
}

impl PosterApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: WorkspaceConfig) -> Self {
        let app = Self::with_config(config);
        cc.egui_ctx.set_visuals(visuals(app.dark_mode));
        app
    }

    pub fn with_config(config: WorkspaceConfig) -> Self {
        let dark_mode = config.dark_mode;
        Self {
            workspace: Workspace::new(config),
            renderer: Renderer::new(),
            file_handler: FileHandler::new(),
            input_handler: InputHandler::default(),
            canvas: CanvasInteraction::new(),
            dark_mode,
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Run a command against the workspace, logging rather than surfacing failures
    pub fn execute_command(&mut self, command: Command) {
        log::debug!("Executing command: {}", command.name());
        let mut ctx = CommandContext::new(&mut self.workspace, &mut self.file_handler);
        if let Err(err) = command.execute(&mut ctx) {
            log::warn!("Command failed: {}", err);
        }
    }

    pub fn execute_commands(&mut self, commands: Vec<Command>) {
        for command in commands {
            self.execute_command(command);
        }
    }

    /// One frame of the editor, independent of the eframe window
    pub(crate) fn ui(&mut self, ctx: &egui::Context) {
        // Uploads picked last frame or dropped this frame become elements first
        self.file_handler.check_for_dropped_files(ctx);
        if self.file_handler.has_pending() {
            let images = self.file_handler.take_images();
            if !images.is_empty() {
                self.execute_command(Command::AddImages(images));
            }
        }
        self.file_handler.preview_files_being_dropped(ctx);

        self.renderer.begin_frame(self.workspace.document());

        header_panel(self, ctx);
        sidebar_panel(self, ctx);
        central_panel(self, ctx);
    }

    pub(crate) fn toggle_dark_mode(&mut self, ctx: &egui::Context) {
        self.dark_mode = !self.dark_mode;
        ctx.set_visuals(visuals(self.dark_mode));
        log::info!("Dark mode {}", if self.dark_mode { "on" } else { "off" });
    }
}

fn visuals(dark_mode: bool) -> egui::Visuals {
    if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    }
}

impl eframe::App for PosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
