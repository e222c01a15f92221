//! Use-Case-Funktionen für Achsen und 3D-Kamera.

use crate::app::AppState;
use crate::core::{AxesConfig, CurveKind, OrbitCamera};

/// Richtet die Achsen (Grenzen, Titel, Beschriftung) für `kind` ein.
///
/// Für die 3D-Ansicht wird zusätzlich die Orbit-Kamera auf die
/// konfigurierten Startwinkel zurückgesetzt.
pub fn configure_axes(state: &mut AppState, kind: CurveKind) {
    let axes = match kind {
        CurveKind::Planar => AxesConfig::planar(&state.curves.planar),
        CurveKind::Helix => {
            reset_camera(state);
            AxesConfig::helix()
        }
    };
    state.view.axes = axes;
}

/// Setzt die Orbit-Kamera auf die Startwinkel aus den Optionen.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = OrbitCamera::new(
        state.options.camera_azimuth_deg,
        state.options.camera_elevation_deg,
    );
}

/// Dreht die Orbit-Kamera um ein Maus-Delta in Pixeln.
pub fn orbit(state: &mut AppState, delta: glam::Vec2) {
    let degrees_per_px = state.options.orbit_degrees_per_px;
    state.view.camera.orbit(delta, degrees_per_px);
}
