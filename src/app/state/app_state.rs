use crate::core::{AxesConfig, CurveKind, CurveSet, OrbitCamera};
use crate::shared::ViewerOptions;

use super::{PlaybackState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Beide Kurven, einmalig beim Start berechnet
    pub curves: CurveSet,
    /// Wiedergabe-State
    pub playback: PlaybackState,
    /// View-State
    pub view: ViewState,
    /// Laufzeit-Optionen (Farben, Start-Intervall, Kamera)
    pub options: ViewerOptions,
}

impl AppState {
    /// Erstellt den Start-Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(ViewerOptions::default())
    }

    /// Erstellt den Start-Zustand: 2D-Ansicht, Animation läuft ab Punkt 0.
    pub fn with_options(options: ViewerOptions) -> Self {
        let curves = CurveSet::generate();
        let axes = AxesConfig::planar(&curves.planar);
        let camera = OrbitCamera::new(options.camera_azimuth_deg, options.camera_elevation_deg);

        Self {
            playback: PlaybackState::new(options.interval_ms()),
            view: ViewState::new(axes, camera),
            curves,
            options,
        }
    }

    /// Punktanzahl der aktiven Kurve.
    pub fn active_len(&self) -> usize {
        self.curves.len(self.playback.active_curve)
    }

    /// Gibt zurück, ob die aktive Kurve vollständig gezeichnet ist.
    pub fn is_finished(&self) -> bool {
        self.playback.is_finished(self.active_len())
    }

    /// Gibt zurück, ob der Timer noch Ticks erzeugen soll.
    pub fn is_animating(&self) -> bool {
        self.playback.running && !self.is_finished()
    }

    /// Aktive Ansicht.
    pub fn active_view(&self) -> CurveKind {
        self.playback.active_curve
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
