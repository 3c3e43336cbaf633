use egui::{Modifiers, Pos2};

use crate::command::Command;
use crate::document::Document;
use crate::element::factory;
use crate::id_generator::generate_id;
use crate::renderer::Renderer;
use crate::tools::{Tool, ToolSettings};

/// Text placement. Unlike the drawing tools there is no preview phase: the
/// shape is committed with a fresh id on pointer-down, empty, and the edit
/// overlay takes over from there.
pub struct TextTool;

impl TextTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for TextTool {
    fn name(&self) -> &'static str {
        "text"
    }

    fn deactivate(&mut self) {}

    fn on_pointer_down(
        &mut self,
        pos: Pos2,
        _modifiers: Modifiers,
        _doc: &Document,
        settings: &ToolSettings,
    ) -> Vec<Command> {
        let id = generate_id();
        vec![
            Command::AddShape(factory::text(id, pos, settings.font_size(), settings.style())),
            Command::BeginTextEdit(id),
        ]
    }

    fn on_pointer_move(&mut self, _pos: Pos2, _doc: &Document, _settings: &ToolSettings) -> Vec<Command> {
        Vec::new()
    }

    fn on_pointer_up(&mut self, _pos: Pos2, _doc: &Document, _settings: &ToolSettings) -> Vec<Command> {
        Vec::new()
    }

    fn update_preview(&self, renderer: &mut Renderer, _settings: &ToolSettings) {
        renderer.set_preview(None);
    }
}

impl Default for TextTool {
    fn default() -> Self {
        Self::new()
    }
}
