use crate::command::Command;
use crate::components::CategoryButton;
use crate::PosterApp;

/// Accordion of insertable content. Only one category is open at a time.
pub fn sidebar_panel(app: &mut PosterApp, ctx: &egui::Context) {
    let mut commands = Vec::new();

    egui::SidePanel::left("sidebar_panel")
        .resizable(false)
        .default_width(160.0)
        .show(ctx, |ui| {
            let menu = app.workspace.menu();

            for (index, category) in menu.categories().iter().enumerate() {
                let open = menu.is_open(index);
                let button = CategoryButton::new(category.icon, category.label, open);
                if button.show(ui).clicked() {
                    commands.push(Command::ToggleMenu(index));
                }

                if open {
                    ui.indent(("submenu", index), |ui| {
                        for option in category.options {
                            let enabled = option.action.is_enabled();
                            let response = ui
                                .add_enabled(enabled, egui::Button::new(option.label).frame(false))
                                .on_disabled_hover_text("Coming soon");
                            if response.clicked() {
                                log::info!("Sidebar option picked: {}", option.label);
                                commands.extend(Command::from_menu_action(option.action));
                            }
                        }
                    });
                }
                ui.add_space(4.0);
            }
        });

    app.execute_commands(commands);
}
