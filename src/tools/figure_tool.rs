use egui::{Modifiers, Pos2, Vec2};

use crate::command::Command;
use crate::document::Document;
use crate::element::{factory, FigureKind, ShapeId, ShapeStyle};
use crate::id_generator::generate_id;
use crate::renderer::Renderer;
use crate::tools::{Tool, ToolSettings};

/// Rectangle/ellipse drawing: anchor at pointer-down, live signed extent
/// while dragging. The sign is kept; normalization happens at render and
/// hit-test time.
pub struct FigureTool {
    kind: FigureKind,
    anchor: Option<Pos2>,
    size: Vec2,
    style: Option<ShapeStyle>,
}

impl FigureTool {
    pub fn new(kind: FigureKind) -> Self {
        Self {
            kind,
            anchor: None,
            size: Vec2::ZERO,
            style: None,
        }
    }

    pub fn kind(&self) -> FigureKind {
        self.kind
    }

    fn reset(&mut self) {
        self.anchor = None;
        self.size = Vec2::ZERO;
        self.style = None;
    }
}

impl Tool for FigureTool {
    fn name(&self) -> &'static str {
        self.kind.label()
    }

    fn deactivate(&mut self) {
        self.reset();
    }

    fn on_pointer_down(
        &mut self,
        pos: Pos2,
        _modifiers: Modifiers,
        _doc: &Document,
        settings: &ToolSettings,
    ) -> Vec<Command> {
        self.anchor = Some(pos);
        self.size = Vec2::ZERO;
        self.style = Some(settings.style());
        Vec::new()
    }

    fn on_pointer_move(&mut self, pos: Pos2, _doc: &Document, _settings: &ToolSettings) -> Vec<Command> {
        if let Some(anchor) = self.anchor {
            self.size = pos - anchor;
        }
        Vec::new()
    }

    fn on_pointer_up(&mut self, _pos: Pos2, _doc: &Document, _settings: &ToolSettings) -> Vec<Command> {
        let (Some(anchor), Some(style)) = (self.anchor.take(), self.style.take()) else {
            self.reset();
            return Vec::new();
        };
        let size = std::mem::replace(&mut self.size, Vec2::ZERO);

        // Zero-extent figures are tolerated; they render as nothing.
        vec![Command::AddShape(factory::figure(
            generate_id(),
            self.kind,
            anchor,
            size,
            style,
        ))]
    }

    fn update_preview(&self, renderer: &mut Renderer, _settings: &ToolSettings) {
        let preview = match (self.anchor, self.style) {
            (Some(anchor), Some(style)) => Some(factory::figure(
                ShapeId::PREVIEW,
                self.kind,
                anchor,
                self.size,
                style,
            )),
            _ => None,
        };
        renderer.set_preview(preview);
    }
}
