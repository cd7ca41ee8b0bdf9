use egui::{Pos2, Rect, Vec2};

mod common;
pub(crate) mod image;
pub(crate) mod text;

pub use common::{DEFAULT_IMAGE_SIZE, SELECTION_PADDING};
pub use self::image::{ImageElement, ImageSource};
pub use self::text::{TextElement, TextStyle};

/// Identifier of a live element on the canvas
pub type ElementId = usize;

/// Common trait that all canvas elements implement
pub trait Element {
    /// Get the unique identifier for this element
    fn id(&self) -> ElementId;

    /// Get the element type as a string
    fn element_type(&self) -> &'static str;

    /// Top-left corner in unscaled canvas coordinates
    fn position(&self) -> Pos2;

    /// Size in unscaled canvas units
    fn size(&self) -> Vec2;

    /// Move the element so its top-left corner is at `position`
    fn set_position(&mut self, position: Pos2);

    /// Get the bounding rectangle for this element
    fn rect(&self) -> Rect {
        Rect::from_min_size(self.position(), self.size())
    }

    /// Test if the element contains the given canvas position
    fn hit_test(&self, pos: Pos2) -> bool {
        self.rect().contains(pos)
    }
}

/// Enumeration of all element kinds on the canvas
#[derive(Debug, Clone)]
pub enum ElementType {
    Text(TextElement),
    Image(ImageElement),
}

impl ElementType {
    pub fn as_text(&self) -> Option<&TextElement> {
        match self {
            ElementType::Text(t) => Some(t),
            ElementType::Image(_) => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextElement> {
        match self {
            ElementType::Text(t) => Some(t),
            ElementType::Image(_) => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageElement> {
        match self {
            ElementType::Image(i) => Some(i),
            ElementType::Text(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ElementType::Text(_))
    }
}

impl Element for ElementType {
    fn id(&self) -> ElementId {
        match self {
            ElementType::Text(t) => t.id(),
            ElementType::Image(i) => i.id(),
        }
    }

    fn element_type(&self) -> &'static str {
        match self {
            ElementType::Text(t) => t.element_type(),
            ElementType::Image(i) => i.element_type(),
        }
    }

    fn position(&self) -> Pos2 {
        match self {
            ElementType::Text(t) => t.position(),
            ElementType::Image(i) => i.position(),
        }
    }

    fn size(&self) -> Vec2 {
        match self {
            ElementType::Text(t) => t.size(),
            ElementType::Image(i) => i.size(),
        }
    }

    fn set_position(&mut self, position: Pos2) {
        match self {
            ElementType::Text(t) => t.set_position(position),
            ElementType::Image(i) => i.set_position(position),
        }
    }
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;

    /// Create a new text element
    pub fn create_text(
        id: ElementId,
        content: impl Into<String>,
        style: TextStyle,
        position: Pos2,
    ) -> ElementType {
        ElementType::Text(TextElement::new(id, content, style, position))
    }

    /// Create a new image element
    pub fn create_image(
        id: ElementId,
        source: ImageSource,
        size: Vec2,
        position: Pos2,
    ) -> ElementType {
        ElementType::Image(ImageElement::new(id, source, size, position))
    }
}
