use egui::{Pos2, Rect, Vec2};

use super::ShapeId;
use crate::element::common::{ShapeStyle, MIN_FIGURE_SIZE};
use crate::widgets::Handle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FigureKind {
    Rect,
    Ellipse,
}

impl FigureKind {
    pub fn label(&self) -> &'static str {
        match self {
            FigureKind::Rect => "rect",
            FigureKind::Ellipse => "ellipse",
        }
    }
}

/// A rectangle or ellipse anchored at the drag origin.
///
/// `size` keeps the sign of the drag direction; everything that needs a real
/// box goes through [`Figure::bounds`], which normalizes via min/max.
#[derive(Clone, Debug)]
pub struct Figure {
    id: ShapeId,
    kind: FigureKind,
    origin: Pos2,
    size: Vec2,
    style: ShapeStyle,
}

impl Figure {
    pub(crate) fn new(id: ShapeId, kind: FigureKind, origin: Pos2, size: Vec2, style: ShapeStyle) -> Self {
        Self {
            id,
            kind,
            origin,
            size,
            style,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> FigureKind {
        self.kind
    }

    pub fn origin(&self) -> Pos2 {
        self.origin
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    /// Normalized bounding box; valid for any sign of `size`.
    pub fn bounds(&self) -> Rect {
        Rect::from_two_pos(self.origin, self.origin + self.size)
    }

    /// Anchor used for marquee membership: the stored drag origin, not the
    /// normalized corner.
    pub fn anchor(&self) -> Pos2 {
        self.origin
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.origin += delta;
    }

    /// Apply one resize-drag sample. The edge under `handle` follows the
    /// delta while the opposite edge stays fixed; width and height are
    /// clamped to the minimum figure size. The figure comes out normalized.
    pub fn resize_by(&mut self, handle: Handle, delta: Vec2) {
        let rect = self.bounds();
        let mut min = rect.min;
        let mut max = rect.max;

        if handle.moves_west() {
            min.x = (min.x + delta.x).min(max.x - MIN_FIGURE_SIZE);
        }
        if handle.moves_east() {
            max.x = (max.x + delta.x).max(min.x + MIN_FIGURE_SIZE);
        }
        if handle.moves_north() {
            min.y = (min.y + delta.y).min(max.y - MIN_FIGURE_SIZE);
        }
        if handle.moves_south() {
            max.y = (max.y + delta.y).max(min.y + MIN_FIGURE_SIZE);
        }

        self.origin = min;
        self.size = max - min;
    }
}
