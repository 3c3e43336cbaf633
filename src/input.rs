use egui::{Context, Key, Modifiers, PointerButton, Pos2};

use crate::command::Command;
use crate::document::Document;
use crate::element::ShapeId;

/// Domain-level input events extracted from the raw egui input stream.
///
/// The host delivers pointer events strictly in down -> move* -> up order
/// within a gesture, so the controller keeps no queue of its own.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    PointerDown { pos: Pos2, modifiers: Modifiers },
    PointerMove { pos: Pos2 },
    PointerUp { pos: Pos2 },
    KeyDown { key: Key, modifiers: Modifiers },
}

/// Converts raw egui input into [`InputEvent`]s, deduplicating pointer moves.
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            last_pointer_pos: None,
        }
    }

    /// Drain this frame's input into our event stream. Only the primary
    /// button drives gestures; key presses are forwarded as-is.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let pos = input.pointer.latest_pos();

            if let Some(pos) = pos {
                if self.last_pointer_pos != Some(pos) {
                    events.push(InputEvent::PointerMove { pos });
                }
                self.last_pointer_pos = Some(pos);

                if input.pointer.button_pressed(PointerButton::Primary) {
                    events.push(InputEvent::PointerDown {
                        pos,
                        modifiers: input.modifiers,
                    });
                }
                if input.pointer.button_released(PointerButton::Primary) {
                    events.push(InputEvent::PointerUp { pos });
                }
            } else {
                self.last_pointer_pos = None;
            }

            for event in &input.raw.events {
                if let egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } = event
                {
                    events.push(InputEvent::KeyDown {
                        key: *key,
                        modifiers: *modifiers,
                    });
                }
            }
        });

        events
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the delete command for the current selection.
///
/// Returns `None` while a text edit is active: Delete/Backspace then belongs
/// to the edit field, even if the edited shape is also selected.
pub fn delete_command(doc: &Document, active_text: Option<ShapeId>) -> Option<Command> {
    if active_text.is_some() || doc.selection().is_empty() {
        return None;
    }
    Some(Command::RemoveShapes(doc.selection().to_vec()))
}
