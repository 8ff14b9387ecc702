/// Input button identifier. Fixed key set consumed by the view controller:
/// WASD/QE drive the camera, O/P select the projection mode, Escape
/// requests shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    KeyO,
    KeyP,
    Escape,
}

impl Button {
    pub const ALL: [Button; 9] = [
        Button::KeyW,
        Button::KeyA,
        Button::KeyS,
        Button::KeyD,
        Button::KeyQ,
        Button::KeyE,
        Button::KeyO,
        Button::KeyP,
        Button::Escape,
    ];
}

/// Controller - answers "is this button currently held?"
pub trait Controller {
    fn is_down(&self, button: Button) -> bool;
}
