//! Handler für Ansichtswechsel, Pause und Geschwindigkeit.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::CurveKind;

/// Wechselt die Ansicht und startet die Animation neu.
pub fn select_view(state: &mut AppState, kind: CurveKind) {
    use_cases::playback::select_view(state, kind);
}

/// Schaltet zwischen Pause und Wiedergabe um.
pub fn toggle(state: &mut AppState) {
    use_cases::playback::toggle(state);
}

/// Setzt das Tick-Intervall.
pub fn set_interval(state: &mut AppState, interval_ms: u32) {
    use_cases::playback::set_interval(state, interval_ms);
}

/// Meldet Frame-Zeit an den Timer.
pub fn advance_timer(state: &mut AppState, dt_ms: f64) {
    use_cases::playback::advance_timer(state, dt_ms);
}
