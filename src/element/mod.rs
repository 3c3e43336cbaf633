use egui::{Pos2, Rect, Vec2};

use crate::widgets::Handle;

pub(crate) mod common;
mod figure;
mod freehand;
mod text;

pub use common::{ShapeStyle, DEFAULT_TEXT_WIDTH, HIT_TOLERANCE, MIN_FIGURE_SIZE, MIN_FONT_SIZE};
pub use figure::{Figure, FigureKind};
pub use freehand::{Freehand, FreehandKind};
pub use text::Text;

/// Stable identifier of a shape. Assigned once when the shape is committed to
/// the document and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(pub(crate) usize);

impl ShapeId {
    /// Placeholder id carried by in-progress previews. Never appears in the
    /// document.
    pub const PREVIEW: ShapeId = ShapeId(0);
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One drawn object. A tagged union over the drawable variants; geometry
/// helpers dispatch on the tag exhaustively.
#[derive(Clone, Debug)]
pub enum Shape {
    Freehand(Freehand),
    Figure(Figure),
    Text(Text),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Freehand(s) => s.id(),
            Shape::Figure(s) => s.id(),
            Shape::Text(s) => s.id(),
        }
    }

    /// Short variant name for logs.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Shape::Freehand(s) => s.kind().label(),
            Shape::Figure(s) => s.kind().label(),
            Shape::Text(_) => "text",
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Freehand(s) => s.style(),
            Shape::Figure(s) => s.style(),
            Shape::Text(s) => s.style(),
        }
    }

    /// Normalized bounding box. [`Rect::NOTHING`] for a degenerate freehand
    /// stroke with no samples.
    pub fn bounding_rect(&self) -> Rect {
        match self {
            Shape::Freehand(s) => s.bounds(),
            Shape::Figure(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
        }
    }

    /// The region a pointer hit-test checks: freehand strokes get their
    /// bounding box expanded by the fixed tolerance, figures and text use
    /// their own box.
    pub fn hit_region(&self) -> Rect {
        match self {
            Shape::Freehand(s) => s.hit_region(),
            Shape::Figure(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
        }
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        self.hit_region().contains(pos)
    }

    /// Anchor point used for marquee membership.
    pub fn anchor(&self) -> Pos2 {
        match self {
            Shape::Freehand(s) => s.anchor(),
            Shape::Figure(s) => s.anchor(),
            Shape::Text(s) => s.anchor(),
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Freehand(s) => s.translate(delta),
            Shape::Figure(s) => s.translate(delta),
            Shape::Text(s) => s.translate(delta),
        }
    }

    /// Whether the shape supports handle-based resizing. Freehand strokes do
    /// not; their handles are decorative.
    pub fn resizable(&self) -> bool {
        !matches!(self, Shape::Freehand(_))
    }

    /// Apply one resize-drag sample. No-op for freehand strokes.
    pub fn resize_by(&mut self, handle: Handle, delta: Vec2) {
        match self {
            Shape::Freehand(_) => {}
            Shape::Figure(s) => s.resize_by(handle, delta),
            Shape::Text(s) => s.resize_by(handle, delta),
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Shape::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut Text> {
        match self {
            Shape::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Factory functions for creating shapes
pub mod factory {
    use super::*;

    pub fn freehand(id: ShapeId, kind: FreehandKind, points: Vec<Pos2>, style: ShapeStyle) -> Shape {
        Shape::Freehand(Freehand::new(id, kind, points, style))
    }

    pub fn figure(id: ShapeId, kind: FigureKind, origin: Pos2, size: Vec2, style: ShapeStyle) -> Shape {
        Shape::Figure(Figure::new(id, kind, origin, size, style))
    }

    pub fn text(id: ShapeId, origin: Pos2, font_size: f32, style: ShapeStyle) -> Shape {
        Shape::Text(Text::new(id, origin, font_size, style))
    }
}
