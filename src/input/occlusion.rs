//! UI occlusion test.
//!
//! Gestures are suppressed while the pointer is over a UI surface. The
//! check is made synchronously every time an event could be emitted and is
//! never cached.

/// Answers whether the pointer currently sits over UI
pub trait UiOcclusion {
    fn is_pointer_over_ui(&self) -> bool;
}

/// No UI layer; nothing is ever occluded
#[derive(Debug, Clone, Copy, Default)]
pub struct NoUi;

impl UiOcclusion for NoUi {
    fn is_pointer_over_ui(&self) -> bool {
        false
    }
}

impl<F> UiOcclusion for F
where
    F: Fn() -> bool,
{
    fn is_pointer_over_ui(&self) -> bool {
        self()
    }
}

#[cfg(feature = "egui")]
impl UiOcclusion for egui::Context {
    fn is_pointer_over_ui(&self) -> bool {
        self.is_pointer_over_area()
    }
}
