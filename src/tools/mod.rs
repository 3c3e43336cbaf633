use egui::{Color32, Modifiers, Pos2};
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::document::Document;
use crate::element::{FigureKind, FreehandKind, ShapeStyle};
use crate::renderer::Renderer;

mod figure_tool;
mod freehand_tool;
mod select_tool;
mod text_tool;

pub use figure_tool::FigureTool;
pub use freehand_tool::FreehandTool;
pub use select_tool::{SelectState, SelectTool};
pub use text_tool::TextTool;

/// Current drawing defaults. Applied to shapes at creation time only;
/// existing shapes never change when these do. Persisted across runs.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ToolSettings {
    pub color: Color32,
    pub thickness: f32,
    pub opacity: f32,
}

impl ToolSettings {
    pub fn style(&self) -> ShapeStyle {
        ShapeStyle::new(self.color, self.thickness, self.opacity)
    }

    /// Font size for new text shapes derives from the thickness setting.
    pub fn font_size(&self) -> f32 {
        self.thickness * 5.0
    }
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            color: Color32::from_rgb(220, 50, 47),
            thickness: 3.0,
            opacity: 1.0,
        }
    }
}

/// Tool trait defines the pointer-gesture interface shared by all tools.
///
/// Tools never mutate the document directly; they return [`Command`]s for the
/// app to apply. Transient gesture state (previews, marquee, drag anchors)
/// lives inside the tool and is discarded by `deactivate`.
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Called when the tool becomes active.
    fn activate(&mut self) {}

    /// Called when the tool is switched away from. Must drop any in-progress
    /// gesture without committing it.
    fn deactivate(&mut self);

    /// Handle pointer press on the canvas.
    fn on_pointer_down(
        &mut self,
        pos: Pos2,
        modifiers: Modifiers,
        doc: &Document,
        settings: &ToolSettings,
    ) -> Vec<Command>;

    /// Handle pointer movement while the pointer is held down.
    fn on_pointer_move(&mut self, pos: Pos2, doc: &Document, settings: &ToolSettings) -> Vec<Command>;

    /// Handle pointer release; finalizes the gesture if applicable.
    fn on_pointer_up(&mut self, pos: Pos2, doc: &Document, settings: &ToolSettings) -> Vec<Command>;

    /// Push the tool's live overlay (preview shape, marquee) into the
    /// renderer for this frame.
    fn update_preview(&self, renderer: &mut Renderer, settings: &ToolSettings);
}

/// Which toolbar entry is active. Serializable so the choice survives runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolChoice {
    Pencil,
    Pen,
    Marker,
    Brush,
    Eraser,
    Rect,
    Ellipse,
    Text,
    Select,
}

impl ToolChoice {
    pub const ALL: [ToolChoice; 9] = [
        ToolChoice::Pencil,
        ToolChoice::Pen,
        ToolChoice::Marker,
        ToolChoice::Brush,
        ToolChoice::Eraser,
        ToolChoice::Rect,
        ToolChoice::Ellipse,
        ToolChoice::Text,
        ToolChoice::Select,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ToolChoice::Pencil => "Pencil",
            ToolChoice::Pen => "Pen",
            ToolChoice::Marker => "Marker",
            ToolChoice::Brush => "Brush",
            ToolChoice::Eraser => "Eraser",
            ToolChoice::Rect => "Rectangle",
            ToolChoice::Ellipse => "Ellipse",
            ToolChoice::Text => "Text",
            ToolChoice::Select => "Select",
        }
    }

    /// Build a fresh tool for this choice.
    pub fn build(&self) -> ToolType {
        match self {
            ToolChoice::Pencil => ToolType::Freehand(FreehandTool::new(FreehandKind::Pencil)),
            ToolChoice::Pen => ToolType::Freehand(FreehandTool::new(FreehandKind::Pen)),
            ToolChoice::Marker => ToolType::Freehand(FreehandTool::new(FreehandKind::Marker)),
            ToolChoice::Brush => ToolType::Freehand(FreehandTool::new(FreehandKind::Brush)),
            ToolChoice::Eraser => ToolType::Freehand(FreehandTool::new(FreehandKind::Eraser)),
            ToolChoice::Rect => ToolType::Figure(FigureTool::new(FigureKind::Rect)),
            ToolChoice::Ellipse => ToolType::Figure(FigureTool::new(FigureKind::Ellipse)),
            ToolChoice::Text => ToolType::Text(TextTool::new()),
            ToolChoice::Select => ToolType::Select(SelectTool::new()),
        }
    }
}

impl Default for ToolChoice {
    fn default() -> Self {
        ToolChoice::Pencil
    }
}

/// Enum of all tool implementations, so the app avoids `Box<dyn Tool>`.
pub enum ToolType {
    Freehand(FreehandTool),
    Figure(FigureTool),
    Text(TextTool),
    Select(SelectTool),
}

impl ToolType {
    pub fn as_select_tool(&self) -> Option<&SelectTool> {
        match self {
            Self::Select(tool) => Some(tool),
            _ => None,
        }
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Freehand(tool) => tool.name(),
            Self::Figure(tool) => tool.name(),
            Self::Text(tool) => tool.name(),
            Self::Select(tool) => tool.name(),
        }
    }

    fn activate(&mut self) {
        match self {
            Self::Freehand(tool) => tool.activate(),
            Self::Figure(tool) => tool.activate(),
            Self::Text(tool) => tool.activate(),
            Self::Select(tool) => tool.activate(),
        }
    }

    fn deactivate(&mut self) {
        match self {
            Self::Freehand(tool) => tool.deactivate(),
            Self::Figure(tool) => tool.deactivate(),
            Self::Text(tool) => tool.deactivate(),
            Self::Select(tool) => tool.deactivate(),
        }
    }

    fn on_pointer_down(
        &mut self,
        pos: Pos2,
        modifiers: Modifiers,
        doc: &Document,
        settings: &ToolSettings,
    ) -> Vec<Command> {
        match self {
            Self::Freehand(tool) => tool.on_pointer_down(pos, modifiers, doc, settings),
            Self::Figure(tool) => tool.on_pointer_down(pos, modifiers, doc, settings),
            Self::Text(tool) => tool.on_pointer_down(pos, modifiers, doc, settings),
            Self::Select(tool) => tool.on_pointer_down(pos, modifiers, doc, settings),
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2, doc: &Document, settings: &ToolSettings) -> Vec<Command> {
        match self {
            Self::Freehand(tool) => tool.on_pointer_move(pos, doc, settings),
            Self::Figure(tool) => tool.on_pointer_move(pos, doc, settings),
            Self::Text(tool) => tool.on_pointer_move(pos, doc, settings),
            Self::Select(tool) => tool.on_pointer_move(pos, doc, settings),
        }
    }

    fn on_pointer_up(&mut self, pos: Pos2, doc: &Document, settings: &ToolSettings) -> Vec<Command> {
        match self {
            Self::Freehand(tool) => tool.on_pointer_up(pos, doc, settings),
            Self::Figure(tool) => tool.on_pointer_up(pos, doc, settings),
            Self::Text(tool) => tool.on_pointer_up(pos, doc, settings),
            Self::Select(tool) => tool.on_pointer_up(pos, doc, settings),
        }
    }

    fn update_preview(&self, renderer: &mut Renderer, settings: &ToolSettings) {
        match self {
            Self::Freehand(tool) => tool.update_preview(renderer, settings),
            Self::Figure(tool) => tool.update_preview(renderer, settings),
            Self::Text(tool) => tool.update_preview(renderer, settings),
            Self::Select(tool) => tool.update_preview(renderer, settings),
        }
    }
}
