//! Eased interpolation of a single camera axis

use glam::Vec3;

use super::curve::Curve;

/// Values a [`Tween`] can blend between
pub trait Lerp: Copy {
    fn lerp(self, other: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Vec3 {
    fn lerp(self, other: Self, t: f32) -> Self {
        Vec3::lerp(self, other, t)
    }
}

/// One interpolation axis (position or zoom) of the rig.
///
/// The clock runs from 0 to 1 over the tween duration and the current
/// value is `lerp(start, target, curve(clock))`. The axis is idle once the
/// clock reaches 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T: Lerp> {
    start: T,
    target: T,
    current: T,
    clock: f32,
}

impl<T: Lerp> Tween<T> {
    /// An idle tween resting at `value`
    pub fn new(value: T) -> Self {
        Self {
            start: value,
            target: value,
            current: value,
            clock: 1.0,
        }
    }

    pub fn current(&self) -> T {
        self.current
    }

    pub fn target(&self) -> T {
        self.target
    }

    pub fn start(&self) -> T {
        self.start
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    /// Whether the clock has finished
    pub fn is_idle(&self) -> bool {
        self.clock >= 1.0
    }

    /// Glide to a new target, restarting the clock from the current value
    pub fn retarget(&mut self, target: T) {
        self.start = self.current;
        self.target = target;
        self.clock = 0.0;
    }

    /// Replace the target without touching the clock.
    ///
    /// When the clock has already finished the next [`advance`](Self::advance)
    /// lands on the new target directly.
    pub fn set_target(&mut self, target: T) {
        self.target = target;
    }

    /// Jump to `value` and stop interpolating
    pub fn snap(&mut self, value: T) {
        self.start = value;
        self.target = value;
        self.current = value;
        self.clock = 1.0;
    }

    /// Move the clock forward by `step` (a fraction of the full duration)
    /// and recompute the current value.
    pub fn advance(&mut self, step: f32, curve: &Curve) -> T {
        self.clock = (self.clock + step.max(0.0)).min(1.0);
        self.current = self.value_at(curve.evaluate(self.clock));
        self.current
    }

    fn value_at(&self, s: f32) -> T {
        if s <= 0.0 {
            self.start
        } else if s >= 1.0 {
            self.target
        } else {
            self.start.lerp(self.target, s)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tween_is_idle_at_value() {
        let tween = Tween::new(3.0f32);
        assert!(tween.is_idle());
        assert_eq!(tween.current(), 3.0);
        assert_eq!(tween.target(), 3.0);
    }

    #[test]
    fn retarget_glides_from_current_value() {
        let mut tween = Tween::new(0.0f32);
        tween.retarget(10.0);
        assert_eq!(tween.advance(0.0, &Curve::Linear), 0.0);
        assert_eq!(tween.advance(0.5, &Curve::Linear), 5.0);

        // Re-targeting mid-flight anchors at the current value, not the old start
        tween.retarget(20.0);
        assert_eq!(tween.start(), 5.0);
        assert_eq!(tween.advance(0.5, &Curve::Linear), 12.5);
        assert_eq!(tween.advance(0.5, &Curve::Linear), 20.0);
        assert!(tween.is_idle());
    }

    #[test]
    fn set_target_on_idle_tween_lands_on_next_advance() {
        let mut tween = Tween::new(Vec3::ZERO);
        tween.set_target(Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(tween.current(), Vec3::ZERO);
        assert_eq!(
            tween.advance(0.0, &Curve::EaseInOut),
            Vec3::new(1.0, 0.0, 2.0)
        );
    }

    #[test]
    fn zero_step_is_idempotent() {
        let mut tween = Tween::new(0.0f32);
        tween.retarget(4.0);
        let first = tween.advance(0.3, &Curve::EaseInOut);
        for _ in 0..10 {
            assert_eq!(tween.advance(0.0, &Curve::EaseInOut), first);
        }
    }

    #[test]
    fn clock_never_exceeds_one() {
        let mut tween = Tween::new(0.0f32);
        tween.retarget(1.0);
        tween.advance(5.0, &Curve::Linear);
        assert_eq!(tween.clock(), 1.0);
        assert_eq!(tween.current(), 1.0);
    }

    #[test]
    fn snap_stops_interpolation() {
        let mut tween = Tween::new(Vec3::ZERO);
        tween.retarget(Vec3::X);
        tween.advance(0.25, &Curve::Linear);
        tween.snap(Vec3::Z);
        assert!(tween.is_idle());
        assert_eq!(tween.advance(0.25, &Curve::Linear), Vec3::Z);
    }
}
