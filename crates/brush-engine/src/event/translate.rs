use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::types::{Event, Key, MouseButton, MouseButtons};

/// Pointer state tracked across window events.
///
/// winit reports button presses without a position and motion without the
/// held buttons, so both are remembered here.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct PointerState {
    /// Last pointer position in back-buffer pixels.
    pub position: (i32, i32),
    pub buttons: MouseButtons,
}

/// Maps physical window pixels onto back-buffer pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CanvasMapping {
    pub physical: (u32, u32),
    pub canvas: (u32, u32),
}

impl CanvasMapping {
    /// Identity mapping for a window whose physical size equals the canvas.
    pub fn identity(width: u32, height: u32) -> Self {
        Self {
            physical: (width, height),
            canvas: (width, height),
        }
    }

    pub fn map(&self, position: PhysicalPosition<f64>) -> (i32, i32) {
        (
            map_axis(position.x, self.physical.0, self.canvas.0),
            map_axis(position.y, self.physical.1, self.canvas.1),
        )
    }
}

fn map_axis(v: f64, physical: u32, canvas: u32) -> i32 {
    if physical == 0 {
        return 0;
    }
    let scaled = (v * canvas as f64 / physical as f64).floor();
    // `as` saturates; NaN becomes 0.
    scaled as i32
}

/// Translates a winit `WindowEvent` into an engine [`Event`].
///
/// Updates `pointer` as a side effect. Returns `None` for events that have no
/// engine counterpart.
pub fn translate_window_event(
    pointer: &mut PointerState,
    mapping: CanvasMapping,
    event: &WindowEvent,
) -> Option<Event> {
    match event {
        WindowEvent::CloseRequested => Some(Event::Quit),

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = mapping.map(*position);
            pointer.position = (x, y);
            Some(Event::MouseMotion {
                buttons: pointer.buttons,
                x,
                y,
            })
        }

        WindowEvent::MouseInput { state, button, .. } => {
            let button = map_mouse_button(*button);
            let (x, y) = pointer.position;
            match state {
                ElementState::Pressed => {
                    pointer.buttons.set(button, true);
                    Some(Event::ClickDown { button, x, y })
                }
                ElementState::Released => {
                    pointer.buttons.set(button, false);
                    Some(Event::ClickUp { button, x, y })
                }
            }
        }

        WindowEvent::KeyboardInput { event, .. } => {
            let key = map_key(event.physical_key);
            match event.state {
                ElementState::Pressed => Some(Event::KeyDown {
                    key,
                    repeat: event.repeat,
                }),
                ElementState::Released => Some(Event::KeyUp { key }),
            }
        }

        // Releases outside the window are never reported.
        WindowEvent::Focused(false) => {
            pointer.buttons = MouseButtons::default();
            None
        }

        _ => None,
    }
}

pub fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

pub fn map_key(pk: PhysicalKey) -> Key {
    let code = match pk {
        PhysicalKey::Code(code) => code,
        // No stable numeric code for native keys.
        PhysicalKey::Unidentified(_) => return Key::Unknown(0),
    };

    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Space => Key::Space,

        KeyCode::Insert => Key::Insert,
        KeyCode::Delete => Key::Delete,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,

        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,

        KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
        KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
        KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
        KeyCode::SuperLeft | KeyCode::SuperRight => Key::Meta,

        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,

        KeyCode::Digit0 => Key::Digit0,
        KeyCode::Digit1 => Key::Digit1,
        KeyCode::Digit2 => Key::Digit2,
        KeyCode::Digit3 => Key::Digit3,
        KeyCode::Digit4 => Key::Digit4,
        KeyCode::Digit5 => Key::Digit5,
        KeyCode::Digit6 => Key::Digit6,
        KeyCode::Digit7 => Key::Digit7,
        KeyCode::Digit8 => Key::Digit8,
        KeyCode::Digit9 => Key::Digit9,

        KeyCode::F1 => Key::F1,
        KeyCode::F2 => Key::F2,
        KeyCode::F3 => Key::F3,
        KeyCode::F4 => Key::F4,
        KeyCode::F5 => Key::F5,
        KeyCode::F6 => Key::F6,
        KeyCode::F7 => Key::F7,
        KeyCode::F8 => Key::F8,
        KeyCode::F9 => Key::F9,
        KeyCode::F10 => Key::F10,
        KeyCode::F11 => Key::F11,
        KeyCode::F12 => Key::F12,

        other => Key::Unknown(other as u32),
    }
}

#[cfg(test)]
mod tests {
    use winit::event::DeviceId;

    use super::*;

    fn device() -> DeviceId {
        // SAFETY: only used as an opaque tag in synthesized events.
        unsafe { DeviceId::dummy() }
    }

    fn moved(x: f64, y: f64) -> WindowEvent {
        WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(x, y),
        }
    }

    fn click(state: ElementState, button: WinitMouseButton) -> WindowEvent {
        WindowEvent::MouseInput {
            device_id: device(),
            state,
            button,
        }
    }

    // ── key / button mapping ──────────────────────────────────────────────

    #[test]
    fn maps_common_keys() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Escape)), Key::Escape);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyQ)), Key::Q);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Digit7)), Key::Digit7);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ShiftRight)), Key::Shift);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::F12)), Key::F12);
    }

    #[test]
    fn unmapped_keys_carry_platform_code() {
        let key = map_key(PhysicalKey::Code(KeyCode::CapsLock));
        assert_eq!(key, Key::Unknown(KeyCode::CapsLock as u32));
    }

    #[test]
    fn maps_mouse_buttons() {
        assert_eq!(map_mouse_button(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(map_mouse_button(WinitMouseButton::Forward), MouseButton::Forward);
        assert_eq!(map_mouse_button(WinitMouseButton::Other(9)), MouseButton::Other(9));
    }

    // ── coordinate mapping ────────────────────────────────────────────────

    #[test]
    fn identity_mapping_floors() {
        let m = CanvasMapping::identity(1280, 720);
        assert_eq!(m.map(PhysicalPosition::new(10.7, 20.2)), (10, 20));
    }

    #[test]
    fn hidpi_window_maps_to_canvas_pixels() {
        let m = CanvasMapping {
            physical: (2560, 1440),
            canvas: (1280, 720),
        };
        assert_eq!(m.map(PhysicalPosition::new(2000.0, 1000.0)), (1000, 500));
    }

    #[test]
    fn positions_outside_window_are_kept() {
        let m = CanvasMapping::identity(100, 100);
        assert_eq!(m.map(PhysicalPosition::new(-5.5, 150.0)), (-6, 150));
    }

    #[test]
    fn zero_sized_window_maps_to_origin() {
        let m = CanvasMapping {
            physical: (0, 0),
            canvas: (100, 100),
        };
        assert_eq!(m.map(PhysicalPosition::new(50.0, 50.0)), (0, 0));
    }

    // ── translation ───────────────────────────────────────────────────────

    #[test]
    fn close_request_is_quit() {
        let mut p = PointerState::default();
        let m = CanvasMapping::identity(8, 8);
        let ev = translate_window_event(&mut p, m, &WindowEvent::CloseRequested);
        assert_eq!(ev, Some(Event::Quit));
    }

    #[test]
    fn clicks_use_last_pointer_position() {
        let mut p = PointerState::default();
        let m = CanvasMapping::identity(100, 100);

        translate_window_event(&mut p, m, &moved(30.0, 40.0));
        let press = click(ElementState::Pressed, WinitMouseButton::Left);
        let down = translate_window_event(&mut p, m, &press);
        assert_eq!(down, Some(Event::ClickDown { button: MouseButton::Left, x: 30, y: 40 }));

        let motion = translate_window_event(&mut p, m, &moved(31.0, 40.0));
        match motion {
            Some(Event::MouseMotion { buttons, x, y }) => {
                assert!(buttons.left);
                assert_eq!((x, y), (31, 40));
            }
            other => panic!("unexpected {other:?}"),
        }

        let release = click(ElementState::Released, WinitMouseButton::Left);
        let up = translate_window_event(&mut p, m, &release);
        assert_eq!(up, Some(Event::ClickUp { button: MouseButton::Left, x: 31, y: 40 }));
        assert!(!p.buttons.any());
    }

    #[test]
    fn focus_loss_releases_buttons() {
        let mut p = PointerState::default();
        let m = CanvasMapping::identity(10, 10);
        translate_window_event(&mut p, m, &click(ElementState::Pressed, WinitMouseButton::Right));
        assert!(p.buttons.right);

        assert_eq!(translate_window_event(&mut p, m, &WindowEvent::Focused(false)), None);
        assert!(!p.buttons.any());
    }

    #[test]
    fn unrelated_events_are_skipped() {
        let mut p = PointerState::default();
        let m = CanvasMapping::identity(10, 10);
        assert_eq!(translate_window_event(&mut p, m, &WindowEvent::Focused(true)), None);
        assert_eq!(translate_window_event(&mut p, m, &WindowEvent::RedrawRequested), None);
    }
}
