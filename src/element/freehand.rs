use egui::{Pos2, Rect, Vec2};

use super::ShapeId;
use crate::element::common::{self, ShapeStyle, HIT_TOLERANCE};

/// The five freehand pen variants. They share one point-stream model and
/// differ only in how the renderer composites them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FreehandKind {
    Pencil,
    Pen,
    Marker,
    Brush,
    Eraser,
}

impl FreehandKind {
    pub fn label(&self) -> &'static str {
        match self {
            FreehandKind::Pencil => "pencil",
            FreehandKind::Pen => "pen",
            FreehandKind::Marker => "marker",
            FreehandKind::Brush => "brush",
            FreehandKind::Eraser => "eraser",
        }
    }
}

/// A freehand polyline sampled from the raw pointer stream.
///
/// Points are append-only while the stroke is being drawn and immutable once
/// committed, except for uniform translation by the move gesture.
#[derive(Clone, Debug)]
pub struct Freehand {
    id: ShapeId,
    kind: FreehandKind,
    points: Vec<Pos2>,
    style: ShapeStyle,
}

impl Freehand {
    pub(crate) fn new(id: ShapeId, kind: FreehandKind, points: Vec<Pos2>, style: ShapeStyle) -> Self {
        Self {
            id,
            kind,
            points,
            style,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> FreehandKind {
        self.kind
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    /// Strokes with fewer than two samples have no extent and are never drawn.
    pub fn is_renderable(&self) -> bool {
        self.points.len() >= 2
    }

    /// Tight bounding box of the sampled points.
    pub fn bounds(&self) -> Rect {
        common::point_bounds(&self.points)
    }

    /// Hit region: the bounding box expanded by the fixed tolerance.
    pub fn hit_region(&self) -> Rect {
        self.bounds().expand(HIT_TOLERANCE)
    }

    /// Anchor used for marquee membership: the bounding-box minimum corner.
    pub fn anchor(&self) -> Pos2 {
        self.bounds().min
    }

    pub fn translate(&mut self, delta: Vec2) {
        for point in &mut self.points {
            *point += delta;
        }
    }
}
