use egui::{Color32, CursorIcon, Pos2, Rect, Stroke};

use crate::element::{Shape, HIT_TOLERANCE};

pub const HANDLE_MARKER_RADIUS: f32 = 4.0;
const HANDLE_FILL: Color32 = Color32::from_rgb(30, 120, 255);

/// One of the 8 compass positions on a selected shape's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    NorthWest,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
}

impl Handle {
    /// Fixed clockwise test order starting at the top-left corner. Hit-tests
    /// walk this array, so overlapping handles on tiny shapes resolve
    /// deterministically.
    pub const ALL: [Handle; 8] = [
        Handle::NorthWest,
        Handle::North,
        Handle::NorthEast,
        Handle::East,
        Handle::SouthEast,
        Handle::South,
        Handle::SouthWest,
        Handle::West,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Handle::NorthWest => "nw",
            Handle::North => "n",
            Handle::NorthEast => "ne",
            Handle::East => "e",
            Handle::SouthEast => "se",
            Handle::South => "s",
            Handle::SouthWest => "sw",
            Handle::West => "w",
        }
    }

    /// Screen position of this handle on `rect` (corners and edge midpoints).
    pub fn position(&self, rect: Rect) -> Pos2 {
        match self {
            Handle::NorthWest => rect.left_top(),
            Handle::North => rect.center_top(),
            Handle::NorthEast => rect.right_top(),
            Handle::East => rect.right_center(),
            Handle::SouthEast => rect.right_bottom(),
            Handle::South => rect.center_bottom(),
            Handle::SouthWest => rect.left_bottom(),
            Handle::West => rect.left_center(),
        }
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        match self {
            Handle::NorthWest | Handle::SouthEast => CursorIcon::ResizeNwSe,
            Handle::NorthEast | Handle::SouthWest => CursorIcon::ResizeNeSw,
            Handle::North | Handle::South => CursorIcon::ResizeVertical,
            Handle::East | Handle::West => CursorIcon::ResizeHorizontal,
        }
    }

    pub fn moves_west(&self) -> bool {
        matches!(self, Handle::NorthWest | Handle::West | Handle::SouthWest)
    }

    pub fn moves_east(&self) -> bool {
        matches!(self, Handle::NorthEast | Handle::East | Handle::SouthEast)
    }

    pub fn moves_north(&self) -> bool {
        matches!(self, Handle::NorthWest | Handle::North | Handle::NorthEast)
    }

    pub fn moves_south(&self) -> bool {
        matches!(self, Handle::SouthWest | Handle::South | Handle::SouthEast)
    }

    /// Push the round handle marker used by the selection chrome.
    pub fn push_marker(out: &mut Vec<egui::Shape>, position: Pos2) {
        out.push(egui::Shape::circle_filled(position, HANDLE_MARKER_RADIUS, HANDLE_FILL));
        out.push(egui::Shape::circle_stroke(
            position,
            HANDLE_MARKER_RADIUS,
            Stroke::new(1.0, Color32::WHITE),
        ));
    }
}

/// Find the handle under `pos` on `shape`, if any.
///
/// Only figures and text can be resized; freehand strokes always return
/// `None`. Tolerance is the same 10-unit radius the hit-test uses.
pub fn handle_at(pos: Pos2, shape: &Shape) -> Option<Handle> {
    if !shape.resizable() {
        return None;
    }
    let rect = shape.bounding_rect();
    Handle::ALL
        .iter()
        .copied()
        .find(|handle| pos.distance(handle.position(rect)) <= HIT_TOLERANCE)
}
