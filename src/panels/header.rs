use crate::PosterApp;

pub const APP_TITLE: &str = "Poster.io";

/// Title bar with the theme switch. New File, Undo, Redo and Download are
/// shown but have nothing behind them yet, so they stay disabled.
pub fn header_panel(app: &mut PosterApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.add_enabled(false, egui::Button::new("➕ New File"));
            ui.add_enabled(false, egui::Button::new("⟲"))
                .on_disabled_hover_text("Undo is not available");
            ui.add_enabled(false, egui::Button::new("⟳"))
                .on_disabled_hover_text("Redo is not available");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_enabled(false, egui::Button::new("⮋ Download"));

                let icon = if app.dark_mode { "☀" } else { "🌙" };
                if ui.selectable_label(app.dark_mode, icon).clicked() {
                    app.toggle_dark_mode(ctx);
                }

                ui.centered_and_justified(|ui| {
                    ui.heading(APP_TITLE);
                });
            });
        });
    });
}
