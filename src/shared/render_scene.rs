//! Render-Szene als expliziter Übergabevertrag zwischen App und UI.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::ViewerOptions;
use crate::core::{AxesConfig, CurveKind, HelixCurve, OrbitCamera, PlanarCurve};
use glam::{DVec2, DVec3};

/// Kurve der aktiven Ansicht (Arc-basiert, O(1)-Clone pro Frame).
#[derive(Debug, Clone)]
pub enum SceneCurve {
    /// 2D-Ansicht aktiv
    Planar(PlanarCurve),
    /// 3D-Ansicht aktiv
    Helix(HelixCurve),
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Aktive Ansicht; die andere wird nicht gezeichnet
    pub view: CurveKind,
    /// Achsen-Konfiguration der aktiven Ansicht
    pub axes: AxesConfig,
    /// Kurve der aktiven Ansicht
    pub curve: SceneCurve,
    /// Anzahl der sichtbaren Punkte (Frame-Cursor)
    pub visible_points: usize,
    /// Gesamtzahl der Punkte der aktiven Kurve
    pub total_points: usize,
    /// Orbit-Kamera der 3D-Ansicht
    pub camera: OrbitCamera,
    /// Wiedergabe läuft (bestimmt die Button-Beschriftung)
    pub running: bool,
    /// Letzter Frame erreicht, der Timer steht
    pub finished: bool,
    /// Tick-Intervall in Millisekunden
    pub interval_ms: u32,
    /// Laufzeit-Optionen für Farben und Linienstärken
    pub options: ViewerOptions,
}

impl RenderScene {
    /// Sichtbarer Anfang der 2D-Kurve (leer, wenn 3D aktiv ist).
    pub fn planar_points(&self) -> &[DVec2] {
        match &self.curve {
            SceneCurve::Planar(curve) => curve.prefix(self.visible_points),
            SceneCurve::Helix(_) => &[],
        }
    }

    /// Sichtbarer Anfang der Helix (leer, wenn 2D aktiv ist).
    pub fn helix_points(&self) -> &[DVec3] {
        match &self.curve {
            SceneCurve::Helix(curve) => curve.prefix(self.visible_points),
            SceneCurve::Planar(_) => &[],
        }
    }

    /// Gibt zurück, ob der Timer noch Ticks erwartet.
    pub fn is_animating(&self) -> bool {
        self.running && !self.finished
    }
}
