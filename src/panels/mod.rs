mod central_panel;
mod header;
mod sidebar;

pub use central_panel::central_panel;
pub use header::header_panel;
pub use sidebar::sidebar_panel;
