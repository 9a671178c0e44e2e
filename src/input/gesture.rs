//! Gesture disambiguation: turns per-frame input snapshots into semantic
//! gesture events.
//!
//! [`GestureEngine`] is a small synchronous state machine fed one
//! [`InputSnapshot`] per frame. Each frame is processed in a fixed order:
//!
//! 1. movement for every held movement key, in binding order
//! 2. the pointer sample, if the pointer moved
//! 3. scroll
//! 4. primary press, then primary release
//! 5. secondary press, then secondary release
//!
//! # Click versus drag
//!
//! A primary press opens a drag session in the *pending* state and emits
//! `DragStart`. Pointer samples within `click_radius` of the press point
//! stay pending and emit nothing. The first sample beyond the radius
//! confirms the drag; it and every later sample emit `Drag`. On release
//! `DragEnd` is emitted and, only if the session never left the pending
//! state, a `Click`. Click and `Drag` therefore never both fire for one
//! press.
//!
//! # Occlusion
//!
//! Press edges and scroll are dropped while the pointer is over UI. The
//! check happens once at the press edge: a press over UI opens no session
//! even if the pointer later leaves the UI while the button is held.
//! Pointer-leave is not special-cased; samples are taken as reported.

use glam::Vec2;

use super::key::KeyCode;
use super::occlusion::UiOcclusion;
use super::sampler::InputSnapshot;
use crate::error::{ConfigError, ConfigResult};

/// Default click radius in pixels
pub const DEFAULT_CLICK_RADIUS: f32 = 20.0;

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// A semantic gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Unit pan direction for one held movement key (`+y` is away)
    Movement(Vec2),
    /// Non-zero scroll delta with the pointer position it happened at
    Zoom { delta: f32, cursor: Vec2 },
    DragStart(Vec2),
    Drag(Vec2),
    DragEnd(Vec2),
    Click(Vec2),
    RotateStart(Vec2),
    Rotate(Vec2),
    RotateEnd(Vec2),
}

/// The independent output channels events are published on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureChannel {
    Movement,
    Zoom,
    DragStart,
    Drag,
    DragEnd,
    Click,
    RotateStart,
    Rotate,
    RotateEnd,
}

impl GestureChannel {
    pub const ALL: [GestureChannel; 9] = [
        GestureChannel::Movement,
        GestureChannel::Zoom,
        GestureChannel::DragStart,
        GestureChannel::Drag,
        GestureChannel::DragEnd,
        GestureChannel::Click,
        GestureChannel::RotateStart,
        GestureChannel::Rotate,
        GestureChannel::RotateEnd,
    ];
}

impl GestureEvent {
    pub fn channel(&self) -> GestureChannel {
        match self {
            GestureEvent::Movement(_) => GestureChannel::Movement,
            GestureEvent::Zoom { .. } => GestureChannel::Zoom,
            GestureEvent::DragStart(_) => GestureChannel::DragStart,
            GestureEvent::Drag(_) => GestureChannel::Drag,
            GestureEvent::DragEnd(_) => GestureChannel::DragEnd,
            GestureEvent::Click(_) => GestureChannel::Click,
            GestureEvent::RotateStart(_) => GestureChannel::RotateStart,
            GestureEvent::Rotate(_) => GestureChannel::Rotate,
            GestureEvent::RotateEnd(_) => GestureChannel::RotateEnd,
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Thresholds and key bindings for gesture recognition
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// Pointer travel (pixels) from the press point that turns a pending
    /// press into a drag. A release within the radius is a click.
    pub click_radius: f32,
    /// Keys that pan, with their unit direction, in emission order
    pub movement_keys: Vec<(KeyCode, Vec2)>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            click_radius: DEFAULT_CLICK_RADIUS,
            movement_keys: vec![
                (KeyCode::ArrowUp, Vec2::Y),
                (KeyCode::ArrowDown, Vec2::NEG_Y),
                (KeyCode::ArrowLeft, Vec2::NEG_X),
                (KeyCode::ArrowRight, Vec2::X),
            ],
        }
    }
}

impl GestureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the click radius in pixels
    pub fn with_click_radius(mut self, radius: f32) -> Self {
        self.click_radius = radius;
        self
    }

    /// Replace all movement bindings
    pub fn with_movement_keys(mut self, keys: Vec<(KeyCode, Vec2)>) -> Self {
        self.movement_keys = keys;
        self
    }

    /// Add WASD bindings after the existing ones
    pub fn with_wasd(mut self) -> Self {
        self.movement_keys.extend([
            (KeyCode::W, Vec2::Y),
            (KeyCode::S, Vec2::NEG_Y),
            (KeyCode::A, Vec2::NEG_X),
            (KeyCode::D, Vec2::X),
        ]);
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.click_radius.is_finite() && self.click_radius >= 0.0) {
            return Err(ConfigError::InvalidClickRadius(self.click_radius));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragPhase {
    /// All samples so far stayed within the click radius
    Pending,
    /// A sample crossed the click radius
    Confirmed,
}

#[derive(Debug, Clone, Copy)]
struct DragSession {
    origin: Vec2,
    phase: DragPhase,
}

#[derive(Debug, Clone, Copy)]
struct RotateSession {
    origin: Vec2,
}

// ---------------------------------------------------------------------------
// GestureEngine
// ---------------------------------------------------------------------------

/// Stateful recogniser turning input snapshots into [`GestureEvent`]s
#[derive(Debug, Clone)]
pub struct GestureEngine {
    config: GestureConfig,
    last_pointer: Option<Vec2>,
    drag: Option<DragSession>,
    rotate: Option<RotateSession>,
}

impl Default for GestureEngine {
    fn default() -> Self {
        Self {
            config: GestureConfig::default(),
            last_pointer: None,
            drag: None,
            rotate: None,
        }
    }
}

impl GestureEngine {
    pub fn new(config: GestureConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Whether a drag session is open (pending or confirmed)
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether the open drag session has crossed the click radius
    pub fn is_drag_confirmed(&self) -> bool {
        self.drag
            .map_or(false, |session| session.phase == DragPhase::Confirmed)
    }

    pub fn is_rotating(&self) -> bool {
        self.rotate.is_some()
    }

    /// Press point of the open drag session
    pub fn drag_origin(&self) -> Option<Vec2> {
        self.drag.map(|session| session.origin)
    }

    /// Press point of the open rotate session
    pub fn rotate_origin(&self) -> Option<Vec2> {
        self.rotate.map(|session| session.origin)
    }

    /// Drop all sessions without emitting anything
    pub fn reset(&mut self) {
        if self.drag.take().is_some() {
            log::debug!("drag session dropped by reset");
        }
        if self.rotate.take().is_some() {
            log::debug!("rotate session dropped by reset");
        }
    }

    /// Process one frame of input, returning the gestures it produced in
    /// emission order.
    pub fn process<U: UiOcclusion + ?Sized>(
        &mut self,
        snapshot: &InputSnapshot,
        ui: &U,
    ) -> Vec<GestureEvent> {
        let mut out = Vec::new();

        for (key, direction) in &self.config.movement_keys {
            if snapshot.is_key_held(*key) {
                out.push(GestureEvent::Movement(*direction));
            }
        }

        let pointer = self.sanitize_pointer(snapshot);
        if self.last_pointer != Some(pointer) {
            self.last_pointer = Some(pointer);
            self.on_pointer_sample(pointer, &mut out);
        }

        if !snapshot.scroll.is_finite() {
            log::warn!(
                "dropping non-finite scroll delta {} in frame {}",
                snapshot.scroll,
                snapshot.frame
            );
        } else if snapshot.scroll != 0.0 && !ui.is_pointer_over_ui() {
            out.push(GestureEvent::Zoom {
                delta: snapshot.scroll,
                cursor: pointer,
            });
        }

        if snapshot.primary.pressed {
            self.on_primary_press(pointer, snapshot, ui, &mut out);
        }
        if snapshot.primary.released {
            self.on_primary_release(pointer, ui, &mut out);
        }
        if snapshot.secondary.pressed {
            self.on_secondary_press(pointer, snapshot, ui, &mut out);
        }
        if snapshot.secondary.released {
            self.on_secondary_release(pointer, &mut out);
        }

        out
    }
}

// ---------------------------------------------------------------------------
// Internal handlers
// ---------------------------------------------------------------------------

impl GestureEngine {
    fn sanitize_pointer(&self, snapshot: &InputSnapshot) -> Vec2 {
        if snapshot.pointer.is_finite() {
            return snapshot.pointer;
        }
        log::warn!(
            "dropping non-finite pointer {:?} in frame {}",
            snapshot.pointer,
            snapshot.frame
        );
        self.last_pointer.unwrap_or(Vec2::ZERO)
    }

    fn on_pointer_sample(&mut self, pointer: Vec2, out: &mut Vec<GestureEvent>) {
        if let Some(session) = &mut self.drag {
            if session.phase == DragPhase::Pending
                && session.origin.distance(pointer) > self.config.click_radius
            {
                session.phase = DragPhase::Confirmed;
                log::debug!("drag confirmed at {pointer:?}");
            }
            if session.phase == DragPhase::Confirmed {
                out.push(GestureEvent::Drag(pointer));
            }
        }

        if self.rotate.is_some() {
            out.push(GestureEvent::Rotate(pointer));
        }
    }

    fn on_primary_press<U: UiOcclusion + ?Sized>(
        &mut self,
        pointer: Vec2,
        snapshot: &InputSnapshot,
        ui: &U,
        out: &mut Vec<GestureEvent>,
    ) {
        if ui.is_pointer_over_ui() {
            log::trace!("primary press over UI at {pointer:?}");
            return;
        }
        if snapshot.secondary.held {
            log::debug!("primary press ignored while secondary is held");
            return;
        }
        if self.drag.is_some() {
            log::debug!("drag session superseded by a new press");
        }
        self.drag = Some(DragSession {
            origin: pointer,
            phase: DragPhase::Pending,
        });
        log::debug!("drag session opened at {pointer:?}");
        out.push(GestureEvent::DragStart(pointer));
    }

    fn on_primary_release<U: UiOcclusion + ?Sized>(
        &mut self,
        pointer: Vec2,
        ui: &U,
        out: &mut Vec<GestureEvent>,
    ) {
        let Some(session) = self.drag.take() else {
            return;
        };
        log::debug!("drag session closed at {pointer:?}");
        out.push(GestureEvent::DragEnd(pointer));

        if session.phase == DragPhase::Pending && !ui.is_pointer_over_ui() {
            out.push(GestureEvent::Click(pointer));
        }
    }

    fn on_secondary_press<U: UiOcclusion + ?Sized>(
        &mut self,
        pointer: Vec2,
        snapshot: &InputSnapshot,
        ui: &U,
        out: &mut Vec<GestureEvent>,
    ) {
        if ui.is_pointer_over_ui() {
            log::trace!("secondary press over UI at {pointer:?}");
            return;
        }
        if snapshot.primary.held {
            log::debug!("secondary press ignored while primary is held");
            return;
        }
        if self.rotate.is_some() {
            log::debug!("rotate session superseded by a new press");
        }
        self.rotate = Some(RotateSession { origin: pointer });
        log::debug!("rotate session opened at {pointer:?}");
        out.push(GestureEvent::RotateStart(pointer));
    }

    fn on_secondary_release(&mut self, pointer: Vec2, out: &mut Vec<GestureEvent>) {
        if self.rotate.take().is_some() {
            log::debug!("rotate session closed at {pointer:?}");
            out.push(GestureEvent::RotateEnd(pointer));
        }
    }
}
