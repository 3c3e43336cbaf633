use egui::{Pos2, Rect, Vec2};
use log::debug;

use crate::element::{Shape, ShapeId};
use crate::widgets::Handle;

/// The durable list of committed shapes plus the current selection.
///
/// Insertion order is paint order; later shapes draw on top. The `version`
/// counter increments on every durable or selection mutation and is the cache
/// key for the committed render layer. Exists only in memory for the board's
/// mounted lifetime; never serialized.
pub struct Document {
    shapes: Vec<Shape>,
    selection: Vec<ShapeId>,
    version: u64,
}

impl Document {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            selection: Vec::new(),
            version: 0,
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    /// Selection in insertion order. Every id references a live shape.
    pub fn selection(&self) -> &[ShapeId] {
        &self.selection
    }

    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selection.contains(&id)
    }

    /// The selected shape's id when exactly one shape is selected.
    pub fn single_selection(&self) -> Option<ShapeId> {
        match self.selection.as_slice() {
            [id] => Some(*id),
            _ => None,
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    fn touch(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    pub fn add_shape(&mut self, shape: Shape) {
        debug_assert_ne!(shape.id(), ShapeId::PREVIEW, "previews are never committed");
        debug_assert!(self.shape(shape.id()).is_none(), "shape ids are unique");
        debug!("committing {} {}", shape.kind_label(), shape.id());
        self.shapes.push(shape);
        self.touch();
    }

    /// Remove the given shapes and drop them from the selection in the same
    /// transaction. Unknown ids are ignored.
    pub fn remove_shapes(&mut self, ids: &[ShapeId]) {
        let before = self.shapes.len();
        self.shapes.retain(|s| !ids.contains(&s.id()));
        self.selection.retain(|id| !ids.contains(id));
        if self.shapes.len() != before {
            self.touch();
        }
    }

    pub fn clear_all(&mut self) {
        self.shapes.clear();
        self.selection.clear();
        self.touch();
    }

    /// Reverse paint order in place. Selection membership is untouched.
    pub fn reverse_order(&mut self) {
        self.shapes.reverse();
        self.touch();
    }

    pub fn translate_shapes(&mut self, ids: &[ShapeId], delta: Vec2) {
        let mut changed = false;
        for shape in &mut self.shapes {
            if ids.contains(&shape.id()) {
                shape.translate(delta);
                changed = true;
            }
        }
        if changed {
            self.touch();
        }
    }

    pub fn resize_shape(&mut self, id: ShapeId, handle: Handle, delta: Vec2) {
        if let Some(shape) = self.shape_mut(id) {
            shape.resize_by(handle, delta);
            self.touch();
        }
    }

    pub fn set_text(&mut self, id: ShapeId, content: String) {
        if let Some(text) = self.shape_mut(id).and_then(|s| s.as_text_mut()) {
            text.set_content(content);
            self.touch();
        }
    }

    /// Replace the selection. Ids that don't reference a live shape are
    /// dropped; duplicates keep their first occurrence.
    pub fn replace_selection(&mut self, ids: Vec<ShapeId>) {
        let mut next = Vec::with_capacity(ids.len());
        for id in ids {
            if self.shape(id).is_some() && !next.contains(&id) {
                next.push(id);
            }
        }
        if next != self.selection {
            self.selection = next;
            self.touch();
        }
    }

    pub fn toggle_selection(&mut self, id: ShapeId) {
        if self.shape(id).is_none() {
            return;
        }
        if let Some(index) = self.selection.iter().position(|s| *s == id) {
            self.selection.remove(index);
        } else {
            self.selection.push(id);
        }
        self.touch();
    }

    /// Topmost shape whose hit region contains `pos`, walking the paint
    /// order from last (top) to first (bottom).
    pub fn hit_test(&self, pos: Pos2) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|shape| shape.contains(pos))
            .map(|shape| shape.id())
    }

    /// Ids of every shape whose anchor point lies within `rect`, in paint
    /// order.
    pub fn box_select(&self, rect: Rect) -> Vec<ShapeId> {
        self.shapes
            .iter()
            .filter(|shape| rect.contains(shape.anchor()))
            .map(|shape| shape.id())
            .collect()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
