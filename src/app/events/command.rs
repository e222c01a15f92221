use crate::core::CurveKind;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Ansicht wechseln und Animation von vorne starten
    SelectView { kind: CurveKind },
    /// Wiedergabe pausieren bzw. fortsetzen
    TogglePlayback,
    /// Tick-Intervall setzen (wird auf 1..=50 ms geklemmt)
    SetInterval { interval_ms: u32 },
    /// Frame-Zeit an den Timer melden; erzeugt fällige Ticks
    AdvanceTimer { dt_ms: f64 },
    /// Orbit-Kamera der 3D-Ansicht drehen
    OrbitCamera { delta: glam::Vec2 },
}
