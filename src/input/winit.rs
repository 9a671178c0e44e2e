//! winit adapter.
//!
//! Maps winit window events onto the platform-agnostic [`InputSampler`].

use ::winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use ::winit::keyboard::{self, PhysicalKey};

use super::key::{KeyCode, PointerButton};
use super::sampler::InputSampler;

/// Pixel scroll distance treated as one wheel line
pub const PIXELS_PER_LINE: f32 = 40.0;

/// Convert a winit [`keyboard::KeyCode`] to a [`KeyCode`], if a mapping
/// exists.
pub fn map_winit_key(key: keyboard::KeyCode) -> Option<KeyCode> {
    Some(match key {
        // Arrows
        keyboard::KeyCode::ArrowUp => KeyCode::ArrowUp,
        keyboard::KeyCode::ArrowDown => KeyCode::ArrowDown,
        keyboard::KeyCode::ArrowLeft => KeyCode::ArrowLeft,
        keyboard::KeyCode::ArrowRight => KeyCode::ArrowRight,

        // Letters
        keyboard::KeyCode::KeyW => KeyCode::W,
        keyboard::KeyCode::KeyA => KeyCode::A,
        keyboard::KeyCode::KeyS => KeyCode::S,
        keyboard::KeyCode::KeyD => KeyCode::D,
        keyboard::KeyCode::KeyQ => KeyCode::Q,
        keyboard::KeyCode::KeyE => KeyCode::E,
        keyboard::KeyCode::KeyR => KeyCode::R,

        // Misc
        keyboard::KeyCode::Space => KeyCode::Space,
        keyboard::KeyCode::Escape => KeyCode::Escape,
        keyboard::KeyCode::Tab => KeyCode::Tab,
        keyboard::KeyCode::ShiftLeft => KeyCode::ShiftLeft,
        keyboard::KeyCode::ShiftRight => KeyCode::ShiftRight,

        _ => return None,
    })
}

/// Convert a winit [`MouseButton`] to a [`PointerButton`]
pub fn map_winit_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        MouseButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

impl InputSampler {
    /// Feed a winit window event. Returns `true` if the event was used.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.on_pointer_move(position.x, position.y);
                true
            }

            WindowEvent::MouseInput { state, button, .. } => match map_winit_button(*button) {
                Some(button) => {
                    self.on_button(button, *state == ElementState::Pressed);
                    true
                }
                None => false,
            },

            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
                self.on_scroll(lines);
                true
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return false;
                };
                let Some(key) = map_winit_key(code) else {
                    return false;
                };
                match event.state {
                    ElementState::Pressed => self.on_key_pressed(key),
                    ElementState::Released => self.on_key_released(key),
                }
                true
            }

            WindowEvent::Focused(false) => {
                self.release_all();
                true
            }

            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::winit::dpi::{PhysicalPosition, PhysicalSize};
    use ::winit::event::{DeviceId, TouchPhase};

    fn device() -> DeviceId {
        // SAFETY: only used as an opaque tag in synthetic events
        unsafe { DeviceId::dummy() }
    }

    #[test]
    fn arrows_and_wasd_are_mapped() {
        assert_eq!(
            map_winit_key(keyboard::KeyCode::ArrowUp),
            Some(KeyCode::ArrowUp)
        );
        assert_eq!(map_winit_key(keyboard::KeyCode::KeyD), Some(KeyCode::D));
        assert_eq!(map_winit_key(keyboard::KeyCode::F5), None);
    }

    #[test]
    fn left_and_right_buttons_are_primary_and_secondary() {
        assert_eq!(
            map_winit_button(MouseButton::Left),
            Some(PointerButton::Primary)
        );
        assert_eq!(
            map_winit_button(MouseButton::Right),
            Some(PointerButton::Secondary)
        );
        assert_eq!(map_winit_button(MouseButton::Other(7)), None);
    }

    #[test]
    fn pointer_button_and_wheel_events_reach_the_sampler() {
        let mut sampler = InputSampler::new();
        assert!(sampler.handle_window_event(&WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(12.0, 34.0),
        }));
        assert!(sampler.handle_window_event(&WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button: MouseButton::Left,
        }));
        assert!(sampler.handle_window_event(&WindowEvent::MouseWheel {
            device_id: device(),
            delta: MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 80.0)),
            phase: TouchPhase::Moved,
        }));

        let snapshot = sampler.snapshot();
        assert_eq!(snapshot.pointer, glam::Vec2::new(12.0, 34.0));
        assert!(snapshot.primary.pressed);
        assert_eq!(snapshot.scroll, 2.0);
    }

    #[test]
    fn unrelated_events_are_ignored() {
        let mut sampler = InputSampler::new();
        assert!(!sampler.handle_window_event(&WindowEvent::Resized(PhysicalSize::new(10, 10))));
    }
}
