use egui::Slider;

use crate::command::Command;
use crate::tools::ToolChoice;
use crate::PaintApp;

/// Floating toolbox: tool buttons, drawing defaults, whole-document actions
/// and the close control.
pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::Window::new("Toolbox")
        .default_pos(egui::pos2(16.0, 16.0))
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                for choice in ToolChoice::ALL {
                    if ui
                        .selectable_label(app.tool_choice() == choice, choice.label())
                        .clicked()
                    {
                        app.set_tool(choice);
                    }
                }
            });

            ui.separator();

            let settings = app.settings_mut();
            ui.horizontal(|ui| {
                ui.label("Color:");
                egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut settings.color,
                    egui::color_picker::Alpha::Opaque,
                );
            });
            ui.horizontal(|ui| {
                ui.label("Thickness:");
                ui.add(Slider::new(&mut settings.thickness, 1.0..=20.0));
            });
            ui.horizontal(|ui| {
                ui.label("Opacity:");
                ui.add(Slider::new(&mut settings.opacity, 0.05..=1.0));
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    app.execute(Command::ClearAll);
                }
                if ui.button("Reverse order").clicked() {
                    app.execute(Command::ReverseOrder);
                }
                if ui.button("Close").clicked() {
                    app.request_close();
                }
            });

            ui.label(format!("{} shapes", app.document().len()));
        });
}
