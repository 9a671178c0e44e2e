//! Input sampling and gesture disambiguation

mod bus;
mod gesture;
mod key;
mod occlusion;
mod sampler;
#[cfg(feature = "winit")]
mod winit;

pub use bus::*;
pub use gesture::*;
pub use key::*;
pub use occlusion::*;
pub use sampler::*;
#[cfg(feature = "winit")]
pub use self::winit::{map_winit_button, map_winit_key, PIXELS_PER_LINE};
