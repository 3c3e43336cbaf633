use egui::{Context, FontId, Key, LayerId, Painter, Rect};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::bridge::{BridgeHandle, HostHooks};
use crate::command::Command;
use crate::document::Document;
use crate::input::{self, InputEvent, InputHandler};
use crate::renderer::Renderer;
use crate::tools::{SelectState, Tool, ToolChoice, ToolSettings, ToolType};
use crate::widgets::handle_at;

const SETTINGS_KEY: &str = "paintboard-settings";
const MIN_EDIT_WIDTH: f32 = 60.0;

/// Tool defaults that survive restarts. The document never does.
#[derive(Default, Serialize, Deserialize)]
struct PersistedSettings {
    tool: ToolChoice,
    settings: ToolSettings,
}

/// The annotation board application.
///
/// Owns the document, the active tool, the renderer and the host/backend
/// integration. All mutations funnel through [`PaintApp::execute`].
pub struct PaintApp {
    document: Document,
    renderer: Renderer,
    input: InputHandler,
    tool: ToolType,
    tool_choice: ToolChoice,
    settings: ToolSettings,
    // Transient text-editing state; cleared on blur, escape, clear-all or
    // removal of the edited shape.
    active_text: Option<crate::element::ShapeId>,
    text_buffer: String,
    text_focus_pending: bool,
    gesture_active: bool,
    hooks: HostHooks,
    bridge: BridgeHandle,
    mounted: bool,
}

impl PaintApp {
    /// Called once before the first frame. Performs the mount handshake:
    /// asks the host to hide its chrome and tells the backend annotation
    /// mode is on. Neither result is awaited.
    pub fn new(cc: &eframe::CreationContext<'_>, mut hooks: HostHooks, bridge: BridgeHandle) -> Self {
        let persisted: PersistedSettings = cc
            .storage
            .and_then(|storage| storage.get_string(SETTINGS_KEY))
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        (hooks.chrome)(false);
        bridge.notify(true);
        info!("annotation board mounted");

        let mut tool = persisted.tool.build();
        tool.activate();

        Self {
            document: Document::new(),
            renderer: Renderer::new(),
            input: InputHandler::new(),
            tool,
            tool_choice: persisted.tool,
            settings: persisted.settings,
            active_text: None,
            text_buffer: String::new(),
            text_focus_pending: false,
            gesture_active: false,
            hooks,
            bridge,
            mounted: true,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn tool_choice(&self) -> ToolChoice {
        self.tool_choice
    }

    pub fn settings_mut(&mut self) -> &mut ToolSettings {
        &mut self.settings
    }

    pub fn active_text(&self) -> Option<crate::element::ShapeId> {
        self.active_text
    }

    /// Switch the active tool, discarding any in-progress gesture, preview
    /// or marquee without committing it.
    pub fn set_tool(&mut self, choice: ToolChoice) {
        if choice == self.tool_choice {
            return;
        }
        self.tool.deactivate();
        self.renderer.set_preview(None);
        self.renderer.set_marquee(None);
        self.gesture_active = false;
        if self.active_text.is_some() {
            self.execute(Command::EndTextEdit);
        }
        self.tool_choice = choice;
        self.tool = choice.build();
        self.tool.activate();
        debug!("tool -> {}", self.tool.name());
    }

    /// Apply one command. Text-edit commands update controller state here;
    /// everything else goes to the document.
    pub fn execute(&mut self, cmd: Command) {
        match cmd {
            Command::BeginTextEdit(id) => {
                self.text_buffer = self
                    .document
                    .shape(id)
                    .and_then(|shape| shape.as_text())
                    .map(|text| text.content().to_owned())
                    .unwrap_or_default();
                self.active_text = Some(id);
                self.text_focus_pending = true;
            }
            Command::EndTextEdit => {
                self.active_text = None;
            }
            cmd => {
                match &cmd {
                    Command::ClearAll => self.active_text = None,
                    Command::RemoveShapes(ids) => {
                        if self.active_text.is_some_and(|id| ids.contains(&id)) {
                            self.active_text = None;
                        }
                    }
                    _ => {}
                }
                cmd.apply(&mut self.document);
            }
        }
    }

    fn execute_all(&mut self, cmds: Vec<Command>) {
        for cmd in cmds {
            self.execute(cmd);
        }
    }

    /// Translate this frame's input into tool commands. Pointer-downs only
    /// start a gesture when the canvas itself is the topmost layer under the
    /// pointer, so the floating toolbox and the text-edit overlay keep their
    /// own clicks.
    pub fn handle_input(&mut self, ctx: &Context, canvas_rect: Rect, canvas_layer: LayerId) {
        let events = self.input.process_input(ctx);
        for event in events {
            match event {
                InputEvent::PointerDown { pos, modifiers } => {
                    let topmost = ctx
                        .layer_id_at(pos)
                        .is_none_or(|layer| layer == canvas_layer);
                    if canvas_rect.contains(pos) && topmost {
                        self.gesture_active = true;
                        let cmds = self.tool.on_pointer_down(pos, modifiers, &self.document, &self.settings);
                        self.execute_all(cmds);
                    }
                }
                InputEvent::PointerMove { pos } => {
                    if self.gesture_active {
                        let cmds = self.tool.on_pointer_move(pos, &self.document, &self.settings);
                        self.execute_all(cmds);
                    }
                }
                InputEvent::PointerUp { pos } => {
                    if self.gesture_active {
                        self.gesture_active = false;
                        let cmds = self.tool.on_pointer_up(pos, &self.document, &self.settings);
                        self.execute_all(cmds);
                    }
                }
                InputEvent::KeyDown { key, .. } => self.handle_key(key),
            }
        }

        self.tool.update_preview(&mut self.renderer, &self.settings);
        self.update_hover_cursor(ctx);
    }

    fn handle_key(&mut self, key: Key) {
        match key {
            Key::Delete | Key::Backspace => {
                if let Some(cmd) = input::delete_command(&self.document, self.active_text) {
                    self.execute(cmd);
                }
            }
            Key::Escape => {
                if self.active_text.is_some() {
                    self.execute(Command::EndTextEdit);
                }
            }
            _ => {}
        }
    }

    fn update_hover_cursor(&self, ctx: &Context) {
        let Some(select) = self.tool.as_select_tool() else {
            return;
        };
        match select.state() {
            SelectState::Resizing { handle, .. } => ctx.set_cursor_icon(handle.cursor_icon()),
            SelectState::Idle => {
                let Some(id) = self.document.single_selection() else {
                    return;
                };
                if let (Some(shape), Some(pos)) = (self.document.shape(id), ctx.pointer_latest_pos()) {
                    if let Some(handle) = handle_at(pos, shape) {
                        ctx.set_cursor_icon(handle.cursor_icon());
                    }
                }
            }
            _ => {}
        }
    }

    /// Paint the board into the canvas area.
    pub fn render(&mut self, ctx: &Context, painter: &Painter, canvas_rect: Rect) {
        self.renderer
            .render(ctx, painter, canvas_rect, &self.document, self.active_text);
    }

    /// Editable text field floated over the text shape currently receiving
    /// keystrokes. Losing focus ends the edit but keeps the shape, empty or
    /// not.
    pub fn show_text_overlay(&mut self, ctx: &Context) {
        let Some(id) = self.active_text else {
            return;
        };
        let Some((origin, font_size, width, color)) = self
            .document
            .shape(id)
            .and_then(|shape| shape.as_text())
            .map(|text| (text.origin(), text.font_size(), text.width(), text.style().tinted()))
        else {
            self.active_text = None;
            return;
        };

        let mut changed: Option<String> = None;
        let mut blurred = false;
        let focus_pending = std::mem::take(&mut self.text_focus_pending);

        egui::Area::new(egui::Id::new(("text-edit", id)))
            .fixed_pos(origin)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.text_buffer)
                        .font(FontId::proportional(font_size))
                        .text_color(color)
                        .desired_width(width.max(MIN_EDIT_WIDTH))
                        .frame(false),
                );
                if focus_pending {
                    response.request_focus();
                }
                if response.changed() {
                    changed = Some(self.text_buffer.clone());
                }
                if !focus_pending && response.lost_focus() {
                    blurred = true;
                }
            });

        if let Some(content) = changed {
            self.execute(Command::SetText { id, content });
        }
        if blurred {
            self.execute(Command::EndTextEdit);
        }
    }

    /// Toolbar close action: unmount and hand control back to the host.
    pub fn request_close(&mut self) {
        self.unmount();
        (self.hooks.close)();
    }

    /// The unmount handshake, mirror of the one in `new`. Idempotent; runs
    /// at most once however the board goes away.
    fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        (self.hooks.chrome)(true);
        self.bridge.notify(false);
        info!("annotation board unmounted");
    }
}

impl eframe::App for PaintApp {
    /// Persist tool defaults. Drawings are deliberately not saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let persisted = PersistedSettings {
            tool: self.tool_choice,
            settings: self.settings,
        };
        if let Ok(raw) = serde_json::to_string(&persisted) {
            storage.set_string(SETTINGS_KEY, raw);
        }
    }

    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        crate::panels::tools_panel(self, ctx);
        crate::panels::central_panel(self, ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.unmount();
    }
}
