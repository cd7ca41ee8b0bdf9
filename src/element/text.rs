use egui::{FontId, Pos2, Vec2};

use super::{Element, ElementId};
use crate::element::common;

/// Visual style of a text element, chosen by the preset that created it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    Title,
    Subtitle,
    Paragraph,
}

impl TextStyle {
    pub fn class_name(&self) -> &'static str {
        match self {
            TextStyle::Title => "title",
            TextStyle::Subtitle => "subtitle",
            TextStyle::Paragraph => "paragraph",
        }
    }

    pub fn font_size(&self) -> f32 {
        match self {
            TextStyle::Title => 36.0,
            TextStyle::Subtitle => 24.0,
            TextStyle::Paragraph => 16.0,
        }
    }

    /// Font at the given zoom scale
    pub fn font_id(&self, scale: f32) -> FontId {
        FontId::proportional(self.font_size() * scale)
    }
}

/// A block of editable text placed on the canvas
#[derive(Debug, Clone)]
pub struct TextElement {
    id: ElementId,
    content: String,
    style: TextStyle,
    position: Pos2,
    // Unscaled size of the laid-out text, refreshed by the renderer
    size: Vec2,
}

impl TextElement {
    pub fn new(id: ElementId, content: impl Into<String>, style: TextStyle, position: Pos2) -> Self {
        let content = content.into();
        let size = common::estimate_text_size(&content, style.font_size());
        Self {
            id,
            content,
            style,
            position,
            size,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn style(&self) -> TextStyle {
        self.style
    }

    /// Replace the text. No validation or length limit.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.size = common::estimate_text_size(&self.content, self.style.font_size());
    }

    /// Record the size the text actually occupies, in canvas units
    pub fn set_measured_size(&mut self, size: Vec2) {
        self.size = Vec2::new(
            size.x.max(common::MIN_TEXT_WIDTH),
            size.y.max(common::MIN_TEXT_HEIGHT),
        );
    }
}

impl Element for TextElement {
    fn id(&self) -> ElementId {
        self.id
    }

    fn element_type(&self) -> &'static str {
        "text"
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
