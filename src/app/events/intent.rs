use crate::core::CurveKind;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Ansicht-Button geklickt ("Mostrar Curva 2D" / "Mostrar Hélice 3D")
    SelectViewRequested { kind: CurveKind },
    /// Pause-/Weiter-Button geklickt
    TogglePlaybackRequested,
    /// Geschwindigkeits-Slider verändert
    SpeedChanged { interval_ms: u32 },
    /// Frame-Zeit seit dem letzten Frame (Timer-Quelle)
    FrameTimeElapsed { dt_ms: f64 },
    /// Maus-Drag in der 3D-Ansicht (Pixel-Delta)
    OrbitDragged { delta: glam::Vec2 },
}
