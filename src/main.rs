#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use paintboard::{BridgeHandle, HostHooks, LogBridge, PaintApp};

fn main() -> eframe::Result {
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("Paintboard"),
        ..Default::default()
    };

    eframe::run_native(
        "paintboard",
        native_options,
        Box::new(|cc| {
            let ctx = cc.egui_ctx.clone();
            let hooks = HostHooks {
                chrome: Box::new(|visible| {
                    log::info!("host chrome visibility request: {visible}");
                }),
                close: Box::new(move || {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }),
            };
            let bridge = BridgeHandle::spawn(Box::new(LogBridge));
            Ok(Box::new(PaintApp::new(cc, hooks, bridge)))
        }),
    )
}
