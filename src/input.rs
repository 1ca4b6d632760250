//! Keyboard and mouse state tracked across window events.
//!
//! Demos that react to held keys (moving the arm, drawing screen points) poll
//! [`InputState`] during `on_update`; one-shot presses are read straight from
//! the event with [`pressed_key`].

use std::collections::HashSet;

use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, KeyEvent, MouseButton, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<KeyCode>,
    /// Last cursor position in physical pixels, origin top left.
    pub cursor: PhysicalPosition<f64>,
    pub left_button: bool,
}

impl InputState {
    pub fn handle(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => match state {
                ElementState::Pressed => self.press(*code),
                ElementState::Released => self.release(*code),
            },
            WindowEvent::CursorMoved { position, .. } => self.cursor = *position,
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => self.left_button = state.is_pressed(),
            // keys released while unfocused never report a release
            WindowEvent::Focused(false) => {
                self.held.clear();
                self.left_button = false;
            }
            _ => (),
        }
    }

    pub fn press(&mut self, code: KeyCode) {
        self.held.insert(code);
    }

    pub fn release(&mut self, code: KeyCode) {
        self.held.remove(&code);
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }

    /// -1, 0 or 1 depending on which of the two keys is held.
    pub fn axis(&self, negative: KeyCode, positive: KeyCode) -> f32 {
        let mut value = 0.0;
        if self.is_held(negative) {
            value -= 1.0;
        }
        if self.is_held(positive) {
            value += 1.0;
        }
        value
    }
}

/// Whether the event should close the demo. Escape only counts when the tweak
/// bar did not take the key press.
pub fn is_exit_request(event: &WindowEvent, consumed: bool) -> bool {
    matches!(event, WindowEvent::CloseRequested) || quits_on(pressed_key(event), consumed)
}

pub fn quits_on(key: Option<KeyCode>, consumed: bool) -> bool {
    !consumed && key == Some(KeyCode::Escape)
}

/// The key of a fresh press; repeats and releases yield `None`.
pub fn pressed_key(event: &WindowEvent) -> Option<KeyCode> {
    match event {
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(code),
                    state: ElementState::Pressed,
                    repeat: false,
                    ..
                },
            ..
        } => Some(*code),
        _ => None,
    }
}
