use egui::{Context, Event, Key, Modifiers, Pos2, Rect, Ui};

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in screen coordinates
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Window-wide input the workspace reacts to regardless of which widget has
/// focus: a press anywhere, and the Delete key.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button went down
    PointerDown { location: InputLocation },
    /// Delete key was pressed
    DeletePressed,
}

/// Turns raw egui input into `InputEvent`s each frame
#[derive(Debug)]
pub struct InputHandler {
    pub(crate) canvas_rect: Rect,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self { canvas_rect }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: pos,
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Read this frame's input. State is consulted by the caller when the
    /// events are handled, never captured here.
    pub fn process_input(&self, ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|input| self.translate(&input.events))
    }

    pub fn translate(&self, events: &[Event]) -> Vec<InputEvent> {
        let mut translated = Vec::new();

        for event in events {
            match event {
                Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: true,
                    ..
                } => translated.push(InputEvent::PointerDown {
                    location: self.make_location(*pos),
                }),
                Event::Key {
                    key: Key::Delete,
                    pressed: true,
                    repeat: false,
                    ..
                } => translated.push(InputEvent::DeletePressed),
                _ => {}
            }
        }

        translated
    }
}

/// Enter without Shift finishes editing; Shift+Enter is a literal newline
pub fn is_commit_key(key: Key, modifiers: Modifiers) -> bool {
    key == Key::Enter && !modifiers.shift
}

fn is_commit_event(event: &Event) -> bool {
    matches!(
        event,
        Event::Key { key, pressed: true, modifiers, .. } if is_commit_key(*key, *modifiers)
    )
}

/// Remove commit presses from the input before a text box sees them, so they
/// do not insert a newline. Returns true if there was one.
pub fn take_commit_key(ui: &Ui) -> bool {
    ui.input_mut(|input| {
        let before = input.events.len();
        input.events.retain(|event| !is_commit_event(event));
        input.events.len() != before
    })
}
