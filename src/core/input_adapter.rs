use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Adapter that bridges Winit keyboard events to the Controller trait.
/// Cursor and scroll events are routed straight to the view controller's
/// callbacks by the host; only key state lives here.
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    pressed_keys: HashSet<Button>,
}

impl WinitController {
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
        }
    }

    /// Process a Winit WindowEvent and update the pressed-key set
    pub fn process_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            if let PhysicalKey::Code(keycode) = event.physical_key {
                if let Some(button) = Self::keycode_to_button(keycode) {
                    match event.state {
                        ElementState::Pressed => {
                            let _ = self.pressed_keys.insert(button);
                        }
                        ElementState::Released => {
                            let _ = self.pressed_keys.remove(&button);
                        }
                    }
                }
            }
        }
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyQ => Some(Button::KeyQ),
            KeyCode::KeyE => Some(Button::KeyE),
            KeyCode::KeyO => Some(Button::KeyO),
            KeyCode::KeyP => Some(Button::KeyP),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }
}
