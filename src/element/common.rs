use egui::{Color32, Pos2, Rect};

// Common constants for all shape types
pub const HIT_TOLERANCE: f32 = 10.0;
pub const MIN_FIGURE_SIZE: f32 = 5.0;
pub const MIN_FONT_SIZE: f32 = 10.0;
pub const DEFAULT_TEXT_WIDTH: f32 = 120.0;

/// Stroke color, thickness and opacity shared by every shape variant.
///
/// These are snapshots of the tool settings at creation time; changing the
/// tool settings later never touches committed shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeStyle {
    pub color: Color32,
    pub thickness: f32,
    pub opacity: f32,
}

impl ShapeStyle {
    pub fn new(color: Color32, thickness: f32, opacity: f32) -> Self {
        Self {
            color,
            thickness,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    /// The color with the shape's opacity folded into its alpha channel.
    pub fn tinted(&self) -> Color32 {
        self.color.gamma_multiply(self.opacity)
    }
}

/// Calculate the axis-aligned bounding box for a set of points.
///
/// Returns [`Rect::NOTHING`] for an empty set, which contains no point and
/// intersects nothing.
pub(crate) fn point_bounds(points: &[Pos2]) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Rect::from_min_max(Pos2::new(min_x, min_y), Pos2::new(max_x, max_y))
}
