//! Camera motion model
//!
//! A ground-anchored rig whose pivot is panned, orbited and zoomed by
//! gestures, smoothed over time and kept inside a bound disk.

mod camera_rig;
mod curve;
pub mod geometry;
mod probe;
mod settings;
mod transform;
mod tween;
mod view;

pub use camera_rig::*;
pub use curve::*;
pub use probe::*;
pub use settings::*;
pub use transform::*;
pub use tween::*;
pub use view::*;
