//! Handler für die 3D-Kamera.

use crate::app::use_cases;
use crate::app::AppState;

/// Dreht die Orbit-Kamera.
pub fn orbit(state: &mut AppState, delta: glam::Vec2) {
    use_cases::view::orbit(state, delta);
}
