use crate::PaintApp;

/// The canvas area: routes input to the active tool, then paints both render
/// layers. The text-edit overlay floats above in its own layer.
pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let canvas_rect = ui.available_rect_before_wrap();
            let canvas_layer = ui.layer_id();

            app.handle_input(ctx, canvas_rect, canvas_layer);

            let painter = ui.painter().clone();
            app.render(ctx, &painter, canvas_rect);
        });

    app.show_text_overlay(ctx);
}
