//! Easing curves for tweens and zoom sensitivity

use crate::error::{ConfigError, ConfigResult};

/// A single control point of a [`Curve::Keyframes`] curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
}

impl Keyframe {
    pub const fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

/// A scalar curve `f(t)`.
///
/// Inputs outside the curve's domain are clamped to it, so a tween clock
/// that has run past 1.0 keeps evaluating to the final value.
#[derive(Debug, Clone, PartialEq)]
pub enum Curve {
    /// `f(t) = t` on `[0, 1]`
    Linear,
    /// Smoothstep on `[0, 1]`: zero slope at both ends
    EaseInOut,
    /// Same value everywhere
    Constant(f32),
    /// Piecewise-linear through keyframes sorted by time
    Keyframes(Vec<Keyframe>),
}

impl Default for Curve {
    fn default() -> Self {
        Curve::EaseInOut
    }
}

impl Curve {
    /// Build a keyframe curve from `(time, value)` pairs
    pub fn from_points(points: &[(f32, f32)]) -> Self {
        Curve::Keyframes(
            points
                .iter()
                .map(|&(time, value)| Keyframe::new(time, value))
                .collect(),
        )
    }

    /// Evaluate the curve at `t`
    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            Curve::Linear => t.clamp(0.0, 1.0),
            Curve::EaseInOut => {
                let t = t.clamp(0.0, 1.0);
                t * t * (3.0 - 2.0 * t)
            }
            Curve::Constant(value) => *value,
            Curve::Keyframes(keys) => evaluate_keys(keys, t),
        }
    }

    /// Check that the curve can be evaluated everywhere
    pub fn validate(&self) -> ConfigResult<()> {
        match self {
            Curve::Linear | Curve::EaseInOut => Ok(()),
            Curve::Constant(value) => {
                if value.is_finite() {
                    Ok(())
                } else {
                    Err(ConfigError::InvalidCurve(format!(
                        "constant value {value} is not finite"
                    )))
                }
            }
            Curve::Keyframes(keys) => {
                if keys.is_empty() {
                    return Err(ConfigError::InvalidCurve("no keyframes".into()));
                }
                if keys
                    .iter()
                    .any(|k| !k.time.is_finite() || !k.value.is_finite())
                {
                    return Err(ConfigError::InvalidCurve(
                        "keyframe with non-finite time or value".into(),
                    ));
                }
                if keys.windows(2).any(|pair| pair[1].time <= pair[0].time) {
                    return Err(ConfigError::InvalidCurve(
                        "keyframe times must be strictly ascending".into(),
                    ));
                }
                Ok(())
            }
        }
    }
}

fn evaluate_keys(keys: &[Keyframe], t: f32) -> f32 {
    let (first, last) = match (keys.first(), keys.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return 0.0,
    };
    if t <= first.time {
        return first.value;
    }
    if t >= last.time {
        return last.value;
    }

    // First key strictly after t; guaranteed to exist and to have a predecessor
    let upper = keys.partition_point(|k| k.time <= t);
    let a = keys[upper - 1];
    let b = keys[upper];
    let s = (t - a.time) / (b.time - a.time);
    a.value + (b.value - a.value) * s
}
