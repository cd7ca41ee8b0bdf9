use eframe::egui;

/// Large icon button heading one sidebar category
pub struct CategoryButton {
    pub icon: &'static str,
    pub label: &'static str,
    pub open: bool,
}

impl CategoryButton {
    pub fn new(icon: &'static str, label: &'static str, open: bool) -> Self {
        Self { icon, label, open }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(ui.available_width(), 40.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());
        let response = response.on_hover_text(self.label);

        if ui.is_rect_visible(rect) {
            let dark = ui.visuals().dark_mode;
            let bg_color = if self.open {
                egui::Color32::from_rgb(100, 181, 246) // Light blue when open
            } else if response.hovered() {
                if dark { egui::Color32::from_gray(50) } else { egui::Color32::from_gray(220) }
            } else {
                egui::Color32::TRANSPARENT
            };
            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_color = if self.open {
                egui::Color32::BLACK
            } else {
                ui.visuals().text_color()
            };
            ui.painter().text(
                rect.left_center() + egui::vec2(12.0, 0.0),
                egui::Align2::LEFT_CENTER,
                self.icon,
                egui::FontId::proportional(24.0),
                text_color,
            );
            ui.painter().text(
                rect.left_center() + egui::vec2(48.0, 0.0),
                egui::Align2::LEFT_CENTER,
                self.label,
                egui::FontId::proportional(15.0),
                text_color,
            );

            if self.open {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response
    }
}
