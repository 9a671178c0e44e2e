//! Frame driver wiring input, gestures and the camera rig together

use crate::error::ConfigResult;
use crate::input::{
    GestureBus, GestureChannel, GestureEngine, GestureEvent, InputSnapshot, ListenerId,
    UiOcclusion,
};
use crate::rig::{CameraRig, GroundProbe, RigTransform, Viewport};
use crate::RigConfig;

/// Owns the gesture engine and camera rig and steps them once per frame.
///
/// Each [`tick`](Self::tick) turns a snapshot into gestures, applies them
/// to the rig in emission order, hands them to bus listeners and then
/// advances the rig's tweens.
pub struct RigDriver<P, U> {
    engine: GestureEngine,
    rig: CameraRig,
    bus: GestureBus,
    probe: P,
    ui: U,
    active: bool,
}

impl<P: GroundProbe, U: UiOcclusion> RigDriver<P, U> {
    /// Create an active driver
    pub fn new(config: RigConfig, probe: P, ui: U) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            engine: GestureEngine::new(config.gesture)?,
            rig: CameraRig::new(config.camera)?,
            bus: GestureBus::new(),
            probe,
            ui,
            active: true,
        })
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn rig_mut(&mut self) -> &mut CameraRig {
        &mut self.rig
    }

    pub fn engine(&self) -> &GestureEngine {
        &self.engine
    }

    pub fn bus(&self) -> &GestureBus {
        &self.bus
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.rig.set_viewport(viewport);
    }

    pub fn set_2d_mode(&mut self, enabled: bool) {
        self.rig.set_2d_mode(enabled);
    }

    /// Register a listener for one gesture channel
    pub fn subscribe<F>(&mut self, channel: GestureChannel, listener: F) -> ListenerId
    where
        F: FnMut(&GestureEvent) + 'static,
    {
        self.bus.subscribe(channel, listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.bus.unsubscribe(id)
    }

    /// Run one frame. While inactive the snapshot is ignored and the rig
    /// holds still.
    pub fn tick(&mut self, dt: f32, snapshot: &InputSnapshot) -> RigTransform {
        if !self.active {
            return self.rig.transform();
        }

        let events = self.engine.process(snapshot, &self.ui);
        for event in &events {
            self.apply(event);
        }
        self.bus.dispatch(&events);

        self.rig.tick(dt)
    }

    fn apply(&mut self, event: &GestureEvent) {
        match *event {
            GestureEvent::Movement(direction) => self.rig.apply_movement(direction),
            GestureEvent::Zoom { delta, cursor } => self.rig.apply_zoom(delta, cursor, &self.probe),
            GestureEvent::DragStart(screen) => self.rig.begin_drag(screen, &self.probe),
            GestureEvent::Drag(screen) => self.rig.update_drag(screen, &self.probe),
            GestureEvent::DragEnd(_) => self.rig.end_drag(),
            GestureEvent::Click(_) => {}
            GestureEvent::RotateStart(screen) => self.rig.begin_rotate(screen, &self.probe),
            GestureEvent::Rotate(screen) => self.rig.update_rotate(screen),
            GestureEvent::RotateEnd(_) => self.rig.end_rotate(),
        }
    }

    /// Return the rig to its initial pose and drop every open gesture
    /// session, so a held button starts nothing until it is pressed again.
    /// Listeners stay registered.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.rig.reset();
        log::debug!("rig driver reset");
    }

    /// Resume processing. The rig restarts from its current pose with no
    /// interpolation pending.
    pub fn activate(&mut self) {
        if self.active {
            return;
        }
        self.rig.reanchor();
        self.active = true;
        log::debug!("rig driver activated");
    }

    /// Stop processing, drop every gesture session and release all
    /// listeners.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        self.engine.reset();
        self.rig.end_drag();
        self.rig.end_rotate();
        self.bus.clear();
        self.active = false;
        log::debug!("rig driver deactivated");
    }
}

impl<P, U> std::fmt::Debug for RigDriver<P, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RigDriver")
            .field("engine", &self.engine)
            .field("rig", &self.rig)
            .field("bus", &self.bus)
            .field("active", &self.active)
            .finish()
    }
}
