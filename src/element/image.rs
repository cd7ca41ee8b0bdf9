use std::sync::Arc;

use egui::{ColorImage, Pos2, Vec2};
use uuid::Uuid;

use super::{Element, ElementId};

/// A user-supplied picture, decoded once and shared with the renderer.
///
/// This is what the canvas displays instead of copying the file anywhere.
#[derive(Clone)]
pub struct ImageSource {
    key: Uuid,
    name: String,
    pixels: Arc<ColorImage>,
}

// Custom Debug implementation so the pixel buffer is not dumped
impl std::fmt::Debug for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageSource")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("size", &self.pixels.size)
            .finish()
    }
}

impl ImageSource {
    pub fn new(name: impl Into<String>, pixels: ColorImage) -> Self {
        Self {
            key: Uuid::new_v4(),
            name: name.into(),
            pixels: Arc::new(pixels),
        }
    }

    /// Unique key used to name this image's texture
    pub fn key(&self) -> Uuid {
        self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pixels(&self) -> &Arc<ColorImage> {
        &self.pixels
    }

    /// Pixel dimensions of the decoded image
    pub fn dimensions(&self) -> [usize; 2] {
        self.pixels.size
    }
}

/// Image element with a fixed display size
#[derive(Debug, Clone)]
pub struct ImageElement {
    id: ElementId,
    source: ImageSource,
    size: Vec2,
    position: Pos2,
}

impl ImageElement {
    pub fn new(id: ElementId, source: ImageSource, size: Vec2, position: Pos2) -> Self {
        Self {
            id,
            source,
            size,
            position,
        }
    }

    pub fn source(&self) -> &ImageSource {
        &self.source
    }
}

impl Element for ImageElement {
    fn id(&self) -> ElementId {
        self.id
    }

    fn element_type(&self) -> &'static str {
        "image"
    }

    fn position(&self) -> Pos2 {
        self.position
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn set_position(&mut self, position: Pos2) {
        self.position = position;
    }
}
