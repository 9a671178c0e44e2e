use std::cell::Cell;

use camera_rig::input::{
    GestureChannel, GestureConfig, GestureEngine, GestureEvent, InputSampler, NoUi,
    PointerButton, UiOcclusion,
};
use glam::Vec2;
use proptest::prelude::*;

/// Drives an engine through a sampler, one frame per call
struct Player {
    engine: GestureEngine,
    sampler: InputSampler,
    events: Vec<GestureEvent>,
}

impl Player {
    fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    fn with_config(config: GestureConfig) -> Self {
        Self {
            engine: GestureEngine::new(config).unwrap(),
            sampler: InputSampler::new(),
            events: Vec::new(),
        }
    }

    fn frame_with<U: UiOcclusion>(
        &mut self,
        ui: &U,
        input: impl FnOnce(&mut InputSampler),
    ) -> Vec<GestureEvent> {
        input(&mut self.sampler);
        let snapshot = self.sampler.snapshot();
        let events = self.engine.process(&snapshot, ui);
        self.events.extend(events.iter().copied());
        events
    }

    fn frame(&mut self, input: impl FnOnce(&mut InputSampler)) -> Vec<GestureEvent> {
        self.frame_with(&NoUi, input)
    }

    fn move_to(&mut self, x: f32, y: f32) -> Vec<GestureEvent> {
        self.frame(|s| s.on_pointer_move(x as f64, y as f64))
    }

    fn press(&mut self, button: PointerButton) -> Vec<GestureEvent> {
        self.frame(|s| s.on_button(button, true))
    }

    fn release(&mut self, button: PointerButton) -> Vec<GestureEvent> {
        self.frame(|s| s.on_button(button, false))
    }

    fn count(&self, channel: GestureChannel) -> usize {
        self.events
            .iter()
            .filter(|event| event.channel() == channel)
            .count()
    }

    fn on(&self, channel: GestureChannel) -> Vec<GestureEvent> {
        self.events
            .iter()
            .copied()
            .filter(|event| event.channel() == channel)
            .collect()
    }
}

/// Pointer offsets from the press position: either a wiggle that mostly
/// stays inside the default click radius or a sweep that mostly leaves it
fn wander() -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop_oneof![
        prop::collection::vec((-14i32..=14, -14i32..=14), 1..=8),
        prop::collection::vec((-60i32..=60, -60i32..=60), 1..=8),
    ]
}

// ---------------------------------------------------------------------------
// Click versus drag
// ---------------------------------------------------------------------------

#[test]
fn small_wiggle_is_a_click() {
    let mut player = Player::new();
    player.move_to(100.0, 100.0);
    player.press(PointerButton::Primary);
    player.move_to(105.0, 102.0);
    player.release(PointerButton::Primary);

    assert_eq!(
        player.on(GestureChannel::Click),
        vec![GestureEvent::Click(Vec2::new(105.0, 102.0))]
    );
    assert_eq!(player.count(GestureChannel::Drag), 0);
}

#[test]
fn travel_past_radius_is_a_drag() {
    let mut player = Player::new();
    player.move_to(100.0, 100.0);
    player.press(PointerButton::Primary);
    player.move_to(150.0, 100.0);
    player.move_to(200.0, 100.0);
    player.release(PointerButton::Primary);

    assert_eq!(
        player.on(GestureChannel::Drag),
        vec![
            GestureEvent::Drag(Vec2::new(150.0, 100.0)),
            GestureEvent::Drag(Vec2::new(200.0, 100.0))
        ]
    );
    assert_eq!(player.count(GestureChannel::Click), 0);
    assert_eq!(player.count(GestureChannel::DragStart), 1);
    assert_eq!(player.count(GestureChannel::DragEnd), 1);
}

#[test]
fn returning_inside_radius_does_not_restore_click() {
    let mut player = Player::new();
    player.move_to(100.0, 100.0);
    player.press(PointerButton::Primary);
    player.move_to(140.0, 100.0);
    player.move_to(101.0, 100.0);
    player.release(PointerButton::Primary);

    assert_eq!(player.count(GestureChannel::Click), 0);
    assert_eq!(player.count(GestureChannel::Drag), 2);
}

#[test]
fn drag_start_reports_press_position() {
    let mut player = Player::new();
    player.move_to(30.0, 40.0);
    let events = player.press(PointerButton::Primary);
    assert_eq!(events, vec![GestureEvent::DragStart(Vec2::new(30.0, 40.0))]);
}

#[test]
fn click_radius_is_configurable() {
    let mut player = Player::with_config(GestureConfig::default().with_click_radius(2.0));
    player.move_to(0.0, 0.0);
    player.press(PointerButton::Primary);
    player.move_to(5.0, 0.0);
    player.release(PointerButton::Primary);
    assert_eq!(player.count(GestureChannel::Click), 0);
    assert_eq!(player.count(GestureChannel::Drag), 1);
}

proptest! {
    #[test]
    fn press_release_cycle_fires_click_xor_drag(
        ox in 100i32..=500,
        oy in 100i32..=500,
        offsets in wander(),
    ) {
        let radius = GestureConfig::default().click_radius;
        let mut player = Player::new();
        let origin = Vec2::new(ox as f32, oy as f32);

        player.move_to(origin.x, origin.y);
        player.press(PointerButton::Primary);

        let mut previous = origin;
        let mut crossed = false;
        let mut expected_drags = 0;
        for (dx, dy) in offsets {
            let position = origin + Vec2::new(dx as f32, dy as f32);
            player.move_to(position.x, position.y);
            if position != previous {
                crossed |= origin.distance(position) > radius;
                if crossed {
                    expected_drags += 1;
                }
            }
            previous = position;
        }
        player.release(PointerButton::Primary);

        let clicks = player.count(GestureChannel::Click);
        let drags = player.count(GestureChannel::Drag);
        if crossed {
            prop_assert_eq!(clicks, 0);
            prop_assert_eq!(drags, expected_drags);
        } else {
            prop_assert_eq!(clicks, 1);
            prop_assert_eq!(drags, 0);
        }
        prop_assert_eq!(player.count(GestureChannel::DragEnd), 1);
    }
}

// ---------------------------------------------------------------------------
// Button gating
// ---------------------------------------------------------------------------

#[test]
fn rotate_does_not_start_while_primary_held() {
    let mut player = Player::new();
    player.move_to(10.0, 10.0);
    player.press(PointerButton::Primary);
    let events = player.press(PointerButton::Secondary);
    assert!(events.is_empty());
    player.move_to(90.0, 10.0);
    assert_eq!(player.count(GestureChannel::RotateStart), 0);
    assert_eq!(player.count(GestureChannel::Rotate), 0);

    // Releasing secondary without a session emits nothing
    let events = player.release(PointerButton::Secondary);
    assert!(events.is_empty());
}

#[test]
fn drag_does_not_start_while_secondary_held() {
    let mut player = Player::new();
    player.move_to(10.0, 10.0);
    player.press(PointerButton::Secondary);
    let events = player.press(PointerButton::Primary);
    assert!(events.is_empty());
    player.move_to(90.0, 10.0);
    player.release(PointerButton::Primary);
    assert_eq!(player.count(GestureChannel::DragStart), 0);
    assert_eq!(player.count(GestureChannel::Click), 0);
}

#[test]
fn simultaneous_presses_start_neither_gesture() {
    let mut player = Player::new();
    player.move_to(10.0, 10.0);
    let events = player.frame(|s| {
        s.on_button(PointerButton::Primary, true);
        s.on_button(PointerButton::Secondary, true);
    });
    assert!(events.is_empty());
}

#[test]
fn drag_release_and_rotate_press_in_one_frame() {
    let mut player = Player::new();
    player.move_to(10.0, 10.0);
    player.press(PointerButton::Primary);
    player.move_to(60.0, 10.0);

    let events = player.frame(|s| {
        s.on_button(PointerButton::Primary, false);
        s.on_button(PointerButton::Secondary, true);
    });
    assert_eq!(
        events,
        vec![
            GestureEvent::DragEnd(Vec2::new(60.0, 10.0)),
            GestureEvent::RotateStart(Vec2::new(60.0, 10.0))
        ]
    );
}

#[test]
fn press_and_release_in_one_frame_is_a_click() {
    let mut player = Player::new();
    player.move_to(7.0, 8.0);
    let events = player.frame(|s| {
        s.on_button(PointerButton::Primary, true);
        s.on_button(PointerButton::Primary, false);
    });
    let p = Vec2::new(7.0, 8.0);
    assert_eq!(
        events,
        vec![
            GestureEvent::DragStart(p),
            GestureEvent::DragEnd(p),
            GestureEvent::Click(p)
        ]
    );
}

// ---------------------------------------------------------------------------
// Rotate
// ---------------------------------------------------------------------------

#[test]
fn rotate_streams_every_changed_sample() {
    let mut player = Player::new();
    player.move_to(0.0, 0.0);
    player.press(PointerButton::Secondary);
    player.move_to(1.0, 0.0);
    player.move_to(1.0, 0.0);
    player.move_to(2.0, 5.0);
    player.release(PointerButton::Secondary);

    assert_eq!(
        player.on(GestureChannel::Rotate),
        vec![
            GestureEvent::Rotate(Vec2::new(1.0, 0.0)),
            GestureEvent::Rotate(Vec2::new(2.0, 5.0))
        ]
    );
    assert_eq!(
        player.on(GestureChannel::RotateEnd),
        vec![GestureEvent::RotateEnd(Vec2::new(2.0, 5.0))]
    );
}

// ---------------------------------------------------------------------------
// Frame ordering and occlusion
// ---------------------------------------------------------------------------

#[test]
fn frame_events_follow_fixed_order() {
    let mut player = Player::new();
    player.move_to(0.0, 0.0);
    player.press(PointerButton::Primary);

    let events = player.frame(|s| {
        s.on_key_pressed(camera_rig::input::KeyCode::ArrowLeft);
        s.on_pointer_move(50.0, 0.0);
        s.on_scroll(1.0);
        s.on_button(PointerButton::Primary, false);
    });
    let channels: Vec<_> = events.iter().map(GestureEvent::channel).collect();
    assert_eq!(
        channels,
        vec![
            GestureChannel::Movement,
            GestureChannel::Drag,
            GestureChannel::Zoom,
            GestureChannel::DragEnd
        ]
    );
}

#[test]
fn occlusion_is_checked_at_the_press_edge_only() {
    let over_ui = Cell::new(true);
    let ui = || over_ui.get();
    let mut player = Player::new();

    player.frame_with(&ui, |s| s.on_pointer_move(10.0, 10.0));
    let events = player.frame_with(&ui, |s| s.on_button(PointerButton::Primary, true));
    assert!(events.is_empty());

    over_ui.set(false);
    player.frame_with(&ui, |s| s.on_pointer_move(200.0, 10.0));
    player.frame_with(&ui, |s| s.on_button(PointerButton::Primary, false));
    assert!(player.events.is_empty());
}

#[test]
fn scroll_over_ui_is_dropped() {
    let ui = || true;
    let mut player = Player::new();
    let events = player.frame_with(&ui, |s| s.on_scroll(3.0));
    assert!(events.is_empty());
}

// Pointer leaving and re-entering the window mid-drag is not covered here:
// the engine takes samples as reported and no intent is assumed for the gap.
