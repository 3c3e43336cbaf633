use egui::{Modifiers, Pos2, Rect};

use crate::command::Command;
use crate::document::Document;
use crate::element::ShapeId;
use crate::renderer::Renderer;
use crate::tools::{Tool, ToolSettings};
use crate::widgets::{handle_at, Handle};

/// Gesture state of the select/move tool.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SelectState {
    Idle,
    /// Moving the current selection. `last` is the previous move sample, so
    /// each move applies a relative delta.
    Dragging { last: Pos2 },
    /// Resizing the single selected shape from one handle.
    Resizing {
        id: ShapeId,
        handle: Handle,
        last: Pos2,
    },
    /// Rubber-band box selection.
    Marquee { start: Pos2, current: Pos2 },
}

/// Click/shift-toggle/marquee selection plus drag-move and handle-resize.
///
/// Pointer-down decides the gesture in priority order: resize handle of the
/// single selected shape, then topmost hit shape, then marquee on empty
/// space. A click with no movement is a pure selection change.
pub struct SelectTool {
    state: SelectState,
}

impl SelectTool {
    pub fn new() -> Self {
        Self {
            state: SelectState::Idle,
        }
    }

    pub fn state(&self) -> SelectState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, SelectState::Idle)
    }
}

impl Tool for SelectTool {
    fn name(&self) -> &'static str {
        "select"
    }

    fn deactivate(&mut self) {
        self.state = SelectState::Idle;
    }

    fn on_pointer_down(
        &mut self,
        pos: Pos2,
        modifiers: Modifiers,
        doc: &Document,
        _settings: &ToolSettings,
    ) -> Vec<Command> {
        // 1. Resize handles win, but only with exactly one shape selected.
        if let Some(id) = doc.single_selection() {
            if let Some(handle) = doc.shape(id).and_then(|shape| handle_at(pos, shape)) {
                self.state = SelectState::Resizing {
                    id,
                    handle,
                    last: pos,
                };
                return Vec::new();
            }
        }

        // 2. A hit shape starts a drag; selection updates immediately.
        if let Some(id) = doc.hit_test(pos) {
            self.state = SelectState::Dragging { last: pos };
            if modifiers.shift {
                return vec![Command::ToggleSelection(id)];
            }
            if !doc.is_selected(id) {
                return vec![Command::ReplaceSelection(vec![id])];
            }
            return Vec::new();
        }

        // 3. Empty space: drop the selection and open a marquee.
        self.state = SelectState::Marquee {
            start: pos,
            current: pos,
        };
        vec![Command::ReplaceSelection(Vec::new())]
    }

    fn on_pointer_move(&mut self, pos: Pos2, doc: &Document, _settings: &ToolSettings) -> Vec<Command> {
        match &mut self.state {
            SelectState::Idle => Vec::new(),
            SelectState::Dragging { last } => {
                let delta = pos - *last;
                *last = pos;
                if delta == egui::Vec2::ZERO || doc.selection().is_empty() {
                    return Vec::new();
                }
                vec![Command::Translate {
                    ids: doc.selection().to_vec(),
                    delta,
                }]
            }
            SelectState::Resizing { id, handle, last } => {
                let delta = pos - *last;
                *last = pos;
                if delta == egui::Vec2::ZERO {
                    return Vec::new();
                }
                vec![Command::ResizeBy {
                    id: *id,
                    handle: *handle,
                    delta,
                }]
            }
            SelectState::Marquee { current, .. } => {
                *current = pos;
                Vec::new()
            }
        }
    }

    fn on_pointer_up(&mut self, pos: Pos2, doc: &Document, _settings: &ToolSettings) -> Vec<Command> {
        let finished = std::mem::replace(&mut self.state, SelectState::Idle);
        match finished {
            SelectState::Marquee { start, .. } => {
                let rect = Rect::from_two_pos(start, pos);
                vec![Command::ReplaceSelection(doc.box_select(rect))]
            }
            // Drag/resize already applied their last sample; nothing to
            // finalize.
            _ => Vec::new(),
        }
    }

    fn update_preview(&self, renderer: &mut Renderer, _settings: &ToolSettings) {
        renderer.set_preview(None);
        renderer.set_marquee(match self.state {
            SelectState::Marquee { start, current } => Some(Rect::from_two_pos(start, current)),
            _ => None,
        });
    }
}

impl Default for SelectTool {
    fn default() -> Self {
        Self::new()
    }
}
