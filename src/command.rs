use egui::Vec2;

use crate::document::Document;
use crate::element::{Shape, ShapeId};
use crate::widgets::Handle;

/// Mutations produced by the tools and panels. Every change to the document
/// flows through exactly one of these; the app applies them in order.
///
/// `BeginTextEdit`/`EndTextEdit` target controller state, not the document —
/// [`Command::apply`] treats them as no-ops and the app intercepts them.
#[derive(Clone, Debug)]
pub enum Command {
    AddShape(Shape),
    RemoveShapes(Vec<ShapeId>),
    Translate { ids: Vec<ShapeId>, delta: Vec2 },
    ResizeBy { id: ShapeId, handle: Handle, delta: Vec2 },
    SetText { id: ShapeId, content: String },
    ReplaceSelection(Vec<ShapeId>),
    ToggleSelection(ShapeId),
    ClearAll,
    ReverseOrder,
    BeginTextEdit(ShapeId),
    EndTextEdit,
}

impl Command {
    /// Apply this command to the document. Total: unknown ids and degenerate
    /// geometry are tolerated as no-ops rather than errors.
    pub fn apply(self, doc: &mut Document) {
        match self {
            Command::AddShape(shape) => doc.add_shape(shape),
            Command::RemoveShapes(ids) => doc.remove_shapes(&ids),
            Command::Translate { ids, delta } => doc.translate_shapes(&ids, delta),
            Command::ResizeBy { id, handle, delta } => doc.resize_shape(id, handle, delta),
            Command::SetText { id, content } => doc.set_text(id, content),
            Command::ReplaceSelection(ids) => doc.replace_selection(ids),
            Command::ToggleSelection(id) => doc.toggle_selection(id),
            Command::ClearAll => doc.clear_all(),
            Command::ReverseOrder => doc.reverse_order(),
            Command::BeginTextEdit(_) | Command::EndTextEdit => {}
        }
    }
}
