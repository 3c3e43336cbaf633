use egui::{Pos2, Rect, Vec2};

use super::ShapeId;
use crate::element::common::{ShapeStyle, DEFAULT_TEXT_WIDTH, MIN_FIGURE_SIZE, MIN_FONT_SIZE};
use crate::widgets::Handle;

/// A text label anchored at its top-left corner.
///
/// The box height equals the font size, so vertical resizes translate
/// directly into font-size changes and the bottom edge stays put when the
/// north handles are dragged.
#[derive(Clone, Debug)]
pub struct Text {
    id: ShapeId,
    origin: Pos2,
    content: String,
    font_size: f32,
    width: f32,
    style: ShapeStyle,
}

impl Text {
    pub(crate) fn new(id: ShapeId, origin: Pos2, font_size: f32, style: ShapeStyle) -> Self {
        Self {
            id,
            origin,
            content: String::new(),
            font_size: font_size.max(MIN_FONT_SIZE),
            width: DEFAULT_TEXT_WIDTH,
            style,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn origin(&self) -> Pos2 {
        self.origin
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_min_size(self.origin, Vec2::new(self.width, self.font_size))
    }

    pub fn anchor(&self) -> Pos2 {
        self.origin
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.origin += delta;
    }

    /// Same edge semantics as [`crate::element::Figure::resize_by`], with the
    /// vertical extent backed by the font size (minimum 10) and the
    /// horizontal extent by the stored width (minimum 5).
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
            min.y = (min.y + delta.y).min(max.y - MIN_FONT_SIZE);
        }
        if handle.moves_south() {
            max.y = (max.y + delta.y).max(min.y + MIN_FONT_SIZE);
        }

        self.origin = min;
        self.width = max.x - min.x;
        self.font_size = max.y - min.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2, Color32};

    fn text() -> Text {
        Text::new(
            ShapeId(1),
            pos2(50.0, 50.0),
            20.0,
            ShapeStyle::new(Color32::BLACK, 4.0, 1.0),
        )
    }

    #[test]
    fn north_resize_changes_font_size_and_keeps_bottom() {
        let mut t = text();
        let bottom = t.bounds().max.y;
        t.resize_by(Handle::North, vec2(0.0, -5.0));
        assert_eq!(t.font_size(), 25.0);
        assert_eq!(t.bounds().max.y, bottom);
    }

    #[test]
    fn font_size_clamps_at_minimum() {
        let mut t = text();
        t.resize_by(Handle::South, vec2(0.0, -100.0));
        assert_eq!(t.font_size(), MIN_FONT_SIZE);
    }
}
