use egui::{Pos2, Rect, Vec2};

pub const MIN_ZOOM_PERCENT: u32 = 50;
pub const MAX_ZOOM_PERCENT: u32 = 200;
pub const ZOOM_STEP_PERCENT: u32 = 10;

/// Canvas zoom, bounded to [0.5, 2.0] in steps of 0.1.
///
/// Kept as whole percent so repeated stepping never drifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zoom {
    percent: u32,
}

impl Default for Zoom {
    fn default() -> Self {
        Self { percent: 100 }
    }
}

impl Zoom {
    pub fn zoom_in(&mut self) {
        self.percent = (self.percent + ZOOM_STEP_PERCENT).min(MAX_ZOOM_PERCENT);
    }

    pub fn zoom_out(&mut self) {
        self.percent = self
            .percent
            .saturating_sub(ZOOM_STEP_PERCENT)
            .max(MIN_ZOOM_PERCENT);
    }

    pub fn can_zoom_in(&self) -> bool {
        self.percent < MAX_ZOOM_PERCENT
    }

    pub fn can_zoom_out(&self) -> bool {
        self.percent > MIN_ZOOM_PERCENT
    }

    pub fn percent(&self) -> u32 {
        self.percent
    }

    /// Uniform scale factor applied to the canvas
    pub fn scale(&self) -> f32 {
        self.percent as f32 / 100.0
    }

    /// Label shown between the zoom buttons
    pub fn label(&self) -> String {
        format!("{}%", self.percent)
    }
}

/// Maps unscaled canvas coordinates to the screen and back
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasView {
    pub origin: Pos2,
    pub scale: f32,
}

impl CanvasView {
    pub fn new(origin: Pos2, zoom: Zoom) -> Self {
        Self {
            origin,
            scale: zoom.scale(),
        }
    }

    pub fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.origin + pos.to_vec2() * self.scale
    }

    pub fn to_canvas(&self, pos: Pos2) -> Pos2 {
        Pos2::ZERO + (pos - self.origin) / self.scale
    }

    pub fn rect_to_screen(&self, rect: Rect) -> Rect {
        Rect::from_min_size(self.to_screen(rect.min), rect.size() * self.scale)
    }

    /// Convert a screen-space drag delta into canvas units
    pub fn delta_to_canvas(&self, delta: Vec2) -> Vec2 {
        delta / self.scale
    }
}
