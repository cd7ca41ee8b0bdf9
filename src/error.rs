use thiserror::Error;

use crate::element::ElementId;

/// Errors raised by workspace operations.
///
/// None of these are shown to the user; the app logs them and carries on.
#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("No text preset named {0:?}")]
    UnknownPreset(String),

    #[error("Element {0} does not exist")]
    ElementNotFound(ElementId),

    #[error("Element {0} is not a text element")]
    NotText(ElementId),

    #[error("Element {0} is being edited and cannot be moved")]
    ElementLocked(ElementId),

    #[error("Failed to decode image {name}: {source}")]
    ImageDecode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to read {name}: {source}")]
    FileRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for workspace operations
pub type WorkspaceResult<T> = Result<T, WorkspaceError>;
