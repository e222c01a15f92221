use crate::core::{AxesConfig, OrbitCamera};

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Achsen der aktiven Ansicht (Grenzen, Titel, Beschriftung)
    pub axes: AxesConfig,
    /// Orbit-Kamera der 3D-Ansicht; bleibt erhalten, solange 2D aktiv ist
    pub camera: OrbitCamera,
}

impl ViewState {
    /// Erstellt den View-Zustand mit den gegebenen Achsen.
    pub fn new(axes: AxesConfig, camera: OrbitCamera) -> Self {
        Self { axes, camera }
    }
}
