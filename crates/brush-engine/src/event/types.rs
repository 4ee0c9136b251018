use std::fmt;

/// Keyboard key identifier.
///
/// The platform layer maps physical key codes into these variants where
/// possible. Anything else arrives as `Key::Unknown(u32)` carrying the
/// platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Modifiers reported as keys
    Shift,
    Control,
    Alt,
    Meta,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    /// Platform key not represented above.
    Unknown(u32),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

/// Set of held mouse buttons, reported with every motion event.
///
/// `Other` buttons are not tracked.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct MouseButtons {
    pub left: bool,
    pub right: bool,
    pub middle: bool,
    pub back: bool,
    pub forward: bool,
}

impl MouseButtons {
    pub fn contains(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Right => self.right,
            MouseButton::Middle => self.middle,
            MouseButton::Back => self.back,
            MouseButton::Forward => self.forward,
            MouseButton::Other(_) => false,
        }
    }

    pub fn set(&mut self, button: MouseButton, held: bool) {
        match button {
            MouseButton::Left => self.left = held,
            MouseButton::Right => self.right = held,
            MouseButton::Middle => self.middle = held,
            MouseButton::Back => self.back = held,
            MouseButton::Forward => self.forward = held,
            MouseButton::Other(_) => {}
        }
    }

    pub fn any(&self) -> bool {
        self.left || self.right || self.middle || self.back || self.forward
    }
}

/// Events produced by an [`EventSource`](super::EventSource).
///
/// Pointer coordinates are back-buffer pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Event {
    /// The user asked to close the window, or the host event loop ended.
    Quit,

    KeyDown {
        key: Key,
        /// True for auto-repeat presses.
        repeat: bool,
    },

    KeyUp {
        key: Key,
    },

    MouseMotion {
        buttons: MouseButtons,
        x: i32,
        y: i32,
    },

    ClickDown {
        button: MouseButton,
        x: i32,
        y: i32,
    },

    ClickUp {
        button: MouseButton,
        x: i32,
        y: i32,
    },
}

/// Field-less discriminant of [`Event`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EventKind {
    Quit,
    KeyDown,
    KeyUp,
    MouseMotion,
    ClickDown,
    ClickUp,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Quit => EventKind::Quit,
            Event::KeyDown { .. } => EventKind::KeyDown,
            Event::KeyUp { .. } => EventKind::KeyUp,
            Event::MouseMotion { .. } => EventKind::MouseMotion,
            Event::ClickDown { .. } => EventKind::ClickDown,
            Event::ClickUp { .. } => EventKind::ClickUp,
        }
    }

    #[inline]
    pub fn is_quit(&self) -> bool {
        self.kind() == EventKind::Quit
    }

    /// Pointer position for mouse events.
    pub fn position(&self) -> Option<(i32, i32)> {
        match *self {
            Event::MouseMotion { x, y, .. }
            | Event::ClickDown { x, y, .. }
            | Event::ClickUp { x, y, .. } => Some((x, y)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Event::Quit.kind(), EventKind::Quit);
        assert_eq!(
            Event::KeyDown { key: Key::A, repeat: false }.kind(),
            EventKind::KeyDown
        );
        assert_eq!(Event::KeyUp { key: Key::Escape }.kind(), EventKind::KeyUp);
        assert_eq!(
            Event::ClickUp { button: MouseButton::Left, x: 0, y: 0 }.kind(),
            EventKind::ClickUp
        );
        assert!(Event::Quit.is_quit());
        assert!(!Event::KeyUp { key: Key::Q }.is_quit());
    }

    #[test]
    fn position_only_for_pointer_events() {
        let motion = Event::MouseMotion { buttons: MouseButtons::default(), x: 4, y: 9 };
        assert_eq!(motion.position(), Some((4, 9)));
        assert_eq!(Event::Quit.position(), None);
    }

    #[test]
    fn buttons_set_and_contains() {
        let mut b = MouseButtons::default();
        assert!(!b.any());

        b.set(MouseButton::Middle, true);
        b.set(MouseButton::Other(7), true);
        assert!(b.contains(MouseButton::Middle));
        assert!(!b.contains(MouseButton::Other(7)));
        assert!(b.any());

        b.set(MouseButton::Middle, false);
        assert!(!b.any());
    }
}
