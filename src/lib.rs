#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod file_handler;
pub mod id_generator;
pub mod input;
pub mod interaction;
pub mod menu;
pub mod panels;
pub mod preset;
pub mod renderer;
pub mod state;
pub mod texture_manager;
pub mod util;
pub mod workspace;
pub mod zoom;

pub use app::PosterApp;
pub use command::{Command, CommandContext};
pub use config::WorkspaceConfig;
pub use document::Document;
pub use element::{Element, ElementId, ElementType};
pub use error::{WorkspaceError, WorkspaceResult};
pub use menu::{MenuAction, SidebarMenu};
pub use renderer::Renderer;
pub use state::EditorState;
pub use workspace::Workspace;
pub use zoom::Zoom;
