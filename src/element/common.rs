use egui::Vec2;

// Common constants for all element types
pub const DEFAULT_IMAGE_SIZE: Vec2 = Vec2::new(200.0, 200.0);
pub const MIN_TEXT_WIDTH: f32 = 100.0;
pub const MIN_TEXT_HEIGHT: f32 = 20.0;
pub const SELECTION_PADDING: f32 = 4.0;

/// Rough average glyph width relative to the font size, used before a text
/// element has been laid out once.
const GLYPH_WIDTH_RATIO: f32 = 0.55;
const LINE_HEIGHT_RATIO: f32 = 1.25;

/// Estimate the on-canvas size of a block of text.
///
/// The renderer replaces this with the measured galley size after the first
/// frame, but hit testing needs something sensible before that.
pub(crate) fn estimate_text_size(content: &str, font_size: f32) -> Vec2 {
    let lines = content.split('\n').count().max(1);
    let widest = content
        .split('\n')
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    Vec2::new(
        (widest as f32 * font_size * GLYPH_WIDTH_RATIO).max(MIN_TEXT_WIDTH),
        (lines as f32 * font_size * LINE_HEIGHT_RATIO).max(MIN_TEXT_HEIGHT),
    )
}
