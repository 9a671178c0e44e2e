//! Platform-agnostic input identifiers.
//!
//! Platform layers (e.g. winit) map their native codes to these enums.

/// Physical keyboard key identifier.
///
/// Only the keys the rig can bind are listed; unmapped platform keys are
/// dropped by the adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum KeyCode {
    // Arrows
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // WASD cluster
    W,
    A,
    S,
    D,
    Q,
    E,

    // Misc
    R,
    Space,
    Escape,
    Tab,
    ShiftLeft,
    ShiftRight,
}

/// Pointer button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Drag / click button (left mouse)
    Primary,
    /// Rotate button (right mouse)
    Secondary,
    Middle,
}
