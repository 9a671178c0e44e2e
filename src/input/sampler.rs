//! Raw input sampling.
//!
//! [`InputSampler`] accumulates platform events between frames and hands
//! out one [`InputSnapshot`] per frame. It has no dependency on any
//! windowing crate; see [`super::winit`] for the winit adapter.

use std::collections::HashSet;

use glam::Vec2;

use super::key::{KeyCode, PointerButton};

/// Per-frame state of one pointer button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonEdges {
    /// Went down during the frame
    pub pressed: bool,
    /// Went up during the frame
    pub released: bool,
    /// Down at any point during the frame
    pub held: bool,
}

/// A pointer position stamped with the frame it was sampled in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub position: Vec2,
    pub frame: u64,
}

/// Everything the gesture engine needs to know about one frame of input
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputSnapshot {
    pub frame: u64,
    /// Pointer position in physical pixels, top-left origin
    pub pointer: Vec2,
    pub primary: ButtonEdges,
    pub secondary: ButtonEdges,
    /// Vertical scroll accumulated over the frame; positive scrolls up
    pub scroll: f32,
    pub held_keys: HashSet<KeyCode>,
}

impl InputSnapshot {
    /// An idle frame with the pointer at `pointer`
    pub fn at(pointer: Vec2) -> Self {
        Self {
            pointer,
            ..Self::default()
        }
    }

    /// Builder method to stamp the frame number
    pub fn with_frame(mut self, frame: u64) -> Self {
        self.frame = frame;
        self
    }

    /// Builder method to hold a key
    pub fn with_key(mut self, key: KeyCode) -> Self {
        self.held_keys.insert(key);
        self
    }

    /// Builder method to add scroll
    pub fn with_scroll(mut self, delta: f32) -> Self {
        self.scroll += delta;
        self
    }

    /// Builder method for a press edge (the button is also held)
    pub fn with_press(mut self, button: PointerButton) -> Self {
        if let Some(edges) = self.edges_mut(button) {
            edges.pressed = true;
            edges.held = true;
        }
        self
    }

    /// Builder method for a release edge
    pub fn with_release(mut self, button: PointerButton) -> Self {
        if let Some(edges) = self.edges_mut(button) {
            edges.released = true;
            edges.held = edges.pressed;
        }
        self
    }

    /// Builder method for a button held without edges
    pub fn with_held(mut self, button: PointerButton) -> Self {
        if let Some(edges) = self.edges_mut(button) {
            edges.held = true;
        }
        self
    }

    /// Edges of a tracked button; untracked buttons report nothing
    pub fn button(&self, button: PointerButton) -> ButtonEdges {
        match button {
            PointerButton::Primary => self.primary,
            PointerButton::Secondary => self.secondary,
            PointerButton::Middle => ButtonEdges::default(),
        }
    }

    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.held_keys.contains(&key)
    }

    pub fn pointer_sample(&self) -> PointerSample {
        PointerSample {
            position: self.pointer,
            frame: self.frame,
        }
    }

    fn edges_mut(&mut self, button: PointerButton) -> Option<&mut ButtonEdges> {
        match button {
            PointerButton::Primary => Some(&mut self.primary),
            PointerButton::Secondary => Some(&mut self.secondary),
            PointerButton::Middle => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct ButtonState {
    down: bool,
    pressed: bool,
    released: bool,
}

impl ButtonState {
    fn set(&mut self, down: bool) {
        if down && !self.down {
            self.pressed = true;
        } else if !down && self.down {
            self.released = true;
        }
        self.down = down;
    }

    fn edges(&self) -> ButtonEdges {
        ButtonEdges {
            pressed: self.pressed,
            released: self.released,
            held: self.down || self.pressed,
        }
    }

    fn begin_frame(&mut self) {
        self.pressed = false;
        self.released = false;
    }
}

/// Accumulates raw platform input between frames.
///
/// The application layer forwards events via `on_*` and calls
/// [`snapshot`](Self::snapshot) once per frame, which also starts the next
/// frame.
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    pointer: Vec2,
    scroll: f32,
    held_keys: HashSet<KeyCode>,
    primary: ButtonState,
    secondary: ButtonState,
    frame: u64,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frame number the next snapshot will carry
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Update the pointer position
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer = Vec2::new(x as f32, y as f32);
    }

    /// Update a pointer button state
    pub fn on_button(&mut self, button: PointerButton, pressed: bool) {
        match button {
            PointerButton::Primary => self.primary.set(pressed),
            PointerButton::Secondary => self.secondary.set(pressed),
            PointerButton::Middle => {}
        }
    }

    /// Accumulate vertical scroll for this frame
    pub fn on_scroll(&mut self, delta: f32) {
        self.scroll += delta;
    }

    /// Record a key press
    pub fn on_key_pressed(&mut self, key: KeyCode) {
        self.held_keys.insert(key);
    }

    /// Record a key release
    pub fn on_key_released(&mut self, key: KeyCode) {
        self.held_keys.remove(&key);
    }

    /// Release everything, e.g. when the window loses focus and the
    /// platform will not report the matching releases
    pub fn release_all(&mut self) {
        self.primary.set(false);
        self.secondary.set(false);
        self.held_keys.clear();
    }

    /// Finish the current frame and return what happened during it
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            frame: self.frame,
            pointer: self.pointer,
            primary: self.primary.edges(),
            secondary: self.secondary.edges(),
            scroll: self.scroll,
            held_keys: self.held_keys.clone(),
        };

        self.scroll = 0.0;
        self.primary.begin_frame();
        self.secondary.begin_frame();
        self.frame += 1;

        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_clears_edges_and_scroll() {
        let mut sampler = InputSampler::new();
        sampler.on_button(PointerButton::Primary, true);
        sampler.on_scroll(1.0);
        sampler.on_scroll(0.5);

        let first = sampler.snapshot();
        assert!(first.primary.pressed && first.primary.held);
        assert_eq!(first.scroll, 1.5);
        assert_eq!(first.frame, 0);

        let second = sampler.snapshot();
        assert!(!second.primary.pressed);
        assert!(second.primary.held);
        assert_eq!(second.scroll, 0.0);
        assert_eq!(second.frame, 1);
    }

    #[test]
    fn press_and_release_in_one_frame_keeps_both_edges() {
        let mut sampler = InputSampler::new();
        sampler.on_button(PointerButton::Secondary, true);
        sampler.on_button(PointerButton::Secondary, false);

        let snapshot = sampler.snapshot();
        assert!(snapshot.secondary.pressed);
        assert!(snapshot.secondary.released);
        assert!(snapshot.secondary.held);

        let next = sampler.snapshot();
        assert_eq!(next.secondary, ButtonEdges::default());
    }

    #[test]
    fn repeated_press_is_not_a_new_edge() {
        let mut sampler = InputSampler::new();
        sampler.on_button(PointerButton::Primary, true);
        sampler.snapshot();
        sampler.on_button(PointerButton::Primary, true);
        assert!(!sampler.snapshot().primary.pressed);
    }

    #[test]
    fn keys_stay_held_until_released() {
        let mut sampler = InputSampler::new();
        sampler.on_key_pressed(KeyCode::ArrowUp);
        assert!(sampler.snapshot().is_key_held(KeyCode::ArrowUp));
        assert!(sampler.snapshot().is_key_held(KeyCode::ArrowUp));
        sampler.on_key_released(KeyCode::ArrowUp);
        assert!(!sampler.snapshot().is_key_held(KeyCode::ArrowUp));
    }

    #[test]
    fn release_all_produces_release_edges() {
        let mut sampler = InputSampler::new();
        sampler.on_button(PointerButton::Primary, true);
        sampler.on_key_pressed(KeyCode::W);
        sampler.snapshot();

        sampler.release_all();
        let snapshot = sampler.snapshot();
        assert!(snapshot.primary.released);
        assert!(!snapshot.primary.held);
        assert!(snapshot.held_keys.is_empty());
    }

    #[test]
    fn snapshot_builders_match_sampler_output() {
        let mut sampler = InputSampler::new();
        sampler.on_pointer_move(10.0, 20.0);
        sampler.on_button(PointerButton::Primary, true);
        let sampled = sampler.snapshot();

        let built = InputSnapshot::at(Vec2::new(10.0, 20.0)).with_press(PointerButton::Primary);
        assert_eq!(sampled, built);
    }
}
