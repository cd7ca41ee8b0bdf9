use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke};

use crate::document::Document;
use crate::element::{Element, ElementType, ImageElement, TextElement, SELECTION_PADDING};
use crate::texture_manager::TextureManager;
use crate::zoom::CanvasView;

pub const CANVAS_HEADING: &str = "Design Your Poster Here";
const HEADING_SIZE: f32 = 22.0;
const SELECTION_COLOR: Color32 = Color32::from_rgb(33, 150, 243);

/// Draws the poster page and its elements
#[derive(Debug, Default)]
pub struct Renderer {
    texture_manager: TextureManager,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once per frame before drawing: frees textures of deleted images
    pub fn begin_frame(&mut self, document: &Document) {
        self.texture_manager.release_missing(document);
    }

    /// Lay out every text element and store its unscaled size, so hit
    /// testing matches what is on screen.
    pub fn measure_text(&self, painter: &Painter, document: &mut Document) {
        let ids: Vec<_> = document
            .elements()
            .iter()
            .filter(|element| element.is_text())
            .map(|element| element.id())
            .collect();

        for id in ids {
            if let Some(text) = document.find_element_by_id_mut(id).and_then(ElementType::as_text_mut) {
                let galley = painter.layout_no_wrap(
                    text.content().to_owned(),
                    text.style().font_id(1.0),
                    Color32::PLACEHOLDER,
                );
                text.set_measured_size(galley.size());
            }
        }
    }

    /// Page background and heading
    pub fn draw_page(&self, painter: &Painter, view: CanvasView, page: Rect) {
        let dark = painter.ctx().style().visuals.dark_mode;
        let fill = if dark { Color32::from_gray(30) } else { Color32::WHITE };
        let border = if dark { Color32::from_gray(70) } else { Color32::from_gray(200) };

        let page = view.rect_to_screen(page);
        painter.rect_filled(page, 0.0, fill);
        painter.rect_stroke(page, 0.0, Stroke::new(1.0, border));
        painter.text(
            Pos2::new(page.center().x, page.min.y + 16.0 * view.scale),
            Align2::CENTER_TOP,
            CANVAS_HEADING,
            FontId::proportional(HEADING_SIZE * view.scale),
            text_color(painter),
        );
    }

    /// Draw one element into its screen rect
    pub fn draw_element(
        &mut self,
        painter: &Painter,
        element: &ElementType,
        screen_rect: Rect,
        scale: f32,
        selected: bool,
    ) {
        match element {
            ElementType::Text(text) => self.draw_text(painter, text, screen_rect, scale),
            ElementType::Image(image) => self.draw_image(painter, image, screen_rect),
        }

        if selected {
            Self::draw_selection(painter, screen_rect);
        }
    }

    fn draw_text(&self, painter: &Painter, text: &TextElement, screen_rect: Rect, scale: f32) {
        let galley = painter.layout_no_wrap(
            text.content().to_owned(),
            text.style().font_id(scale),
            text_color(painter),
        );
        painter.galley(screen_rect.min, galley, text_color(painter));
    }

    fn draw_image(&mut self, painter: &Painter, image: &ImageElement, screen_rect: Rect) {
        let texture = self
            .texture_manager
            .texture_for(painter.ctx(), image.id(), image.source());
        painter.image(
            texture,
            screen_rect,
            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );
    }

    /// Outline drawn around the selected element
    pub fn draw_selection(painter: &Painter, screen_rect: Rect) {
        painter.rect_stroke(
            screen_rect.expand(SELECTION_PADDING),
            2.0,
            Stroke::new(2.0, SELECTION_COLOR),
        );
    }
}

fn text_color(painter: &Painter) -> Color32 {
    painter.ctx().style().visuals.text_color()
}
