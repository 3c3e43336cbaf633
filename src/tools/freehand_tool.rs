use egui::{Modifiers, Pos2};
use log::debug;

use crate::command::Command;
use crate::document::Document;
use crate::element::{factory, FreehandKind, ShapeId, ShapeStyle};
use crate::id_generator::generate_id;
use crate::renderer::Renderer;
use crate::tools::{Tool, ToolSettings};

/// Freehand drawing: pencil, pen, marker, brush and eraser all run the same
/// gesture and differ only in the kind stamped onto the committed shape.
pub struct FreehandTool {
    kind: FreehandKind,
    // Transient state: the raw point stream of the stroke being drawn.
    points: Vec<Pos2>,
    // Style snapshot taken at pointer-down.
    style: Option<ShapeStyle>,
}

impl FreehandTool {
    pub fn new(kind: FreehandKind) -> Self {
        Self {
            kind,
            points: Vec::new(),
            style: None,
        }
    }

    pub fn kind(&self) -> FreehandKind {
        self.kind
    }

    fn reset(&mut self) {
        self.points.clear();
        self.style = None;
    }
}

impl Tool for FreehandTool {
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
        self.points = vec![pos];
        self.style = Some(settings.style());
        Vec::new()
    }

    fn on_pointer_move(&mut self, pos: Pos2, _doc: &Document, _settings: &ToolSettings) -> Vec<Command> {
        // Raw point stream; no resampling or simplification.
        if self.style.is_some() {
            self.points.push(pos);
        }
        Vec::new()
    }

    fn on_pointer_up(&mut self, _pos: Pos2, _doc: &Document, _settings: &ToolSettings) -> Vec<Command> {
        let Some(style) = self.style.take() else {
            return Vec::new();
        };
        let points = std::mem::take(&mut self.points);

        // A stroke needs at least two samples to have any extent.
        if points.len() < 2 {
            debug!("dropping degenerate {} stroke ({} point)", self.kind.label(), points.len());
            return Vec::new();
        }

        vec![Command::AddShape(factory::freehand(
            generate_id(),
            self.kind,
            points,
            style,
        ))]
    }

    fn update_preview(&self, renderer: &mut Renderer, _settings: &ToolSettings) {
        let preview = self.style.map(|style| {
            factory::freehand(ShapeId::PREVIEW, self.kind, self.points.clone(), style)
        });
        renderer.set_preview(preview);
    }
}
