//! Use-Case-Funktionen für die Zeichen-Animation.
//!
//! Zustandsautomat über `active_curve` × `running`. Der Frame-Cursor
//! zählt die bereits gezeichneten Punkte der aktiven Kurve.

use super::view;
use crate::app::AppState;
use crate::core::CurveKind;
use crate::shared::clamp_interval;

/// Wechselt die Ansicht und startet die Animation von vorne.
///
/// Auch wenn `kind` bereits aktiv ist, beginnt die Zeichnung neu.
pub fn select_view(state: &mut AppState, kind: CurveKind) {
    state.playback.active_curve = kind;
    state.playback.frame_cursor = 0;
    state.playback.running = true;
    state.playback.timer.reset();
    view::configure_axes(state, kind);

    log::info!(
        "Ansicht {} gestartet ({} Punkte, {} ms/Tick)",
        kind.label(),
        state.active_len(),
        state.playback.interval_ms
    );
}

/// Pausiert bzw. setzt die Animation am eingefrorenen Cursor fort.
pub fn toggle(state: &mut AppState) {
    state.playback.running = !state.playback.running;
    // Pause stoppt den Timer, Fortsetzen startet ihn neu
    state.playback.timer.reset();

    log::debug!(
        "Wiedergabe {} bei Punkt {}",
        if state.playback.running {
            "fortgesetzt"
        } else {
            "pausiert"
        },
        state.playback.frame_cursor
    );
}

/// Ein Animations-Tick: zeichnet genau einen Punkt mehr.
///
/// Gibt `true` zurück, wenn der Cursor vorgerückt ist. Am Kurvenende
/// bleibt der Timer stehen, `running` bleibt aber gesetzt.
pub fn tick(state: &mut AppState) -> bool {
    if !state.playback.running {
        return false;
    }

    let total = state.active_len();
    if state.playback.frame_cursor >= total {
        return false;
    }

    state.playback.frame_cursor += 1;
    if state.playback.frame_cursor == total {
        state.playback.timer.reset();
        log::info!("Animation {} abgeschlossen", state.active_view().label());
    }
    true
}

/// Meldet Frame-Zeit an den Timer und führt alle fälligen Ticks aus.
///
/// Gibt die Anzahl tatsächlich ausgeführter Ticks zurück.
pub fn advance_timer(state: &mut AppState, dt_ms: f64) -> usize {
    if !state.is_animating() {
        return 0;
    }

    let due = state
        .playback
        .timer
        .accumulate(dt_ms, state.playback.interval_ms);

    let mut advanced = 0;
    for _ in 0..due {
        if !tick(state) {
            break;
        }
        advanced += 1;
    }
    advanced
}

/// Setzt das Tick-Intervall, ohne den Fortschritt zu verändern.
pub fn set_interval(state: &mut AppState, interval_ms: u32) {
    let clamped = clamp_interval(interval_ms);
    if clamped != interval_ms {
        log::warn!(
            "Intervall {} ms außerhalb des Bereichs, verwende {} ms",
            interval_ms,
            clamped
        );
    }
    state.playback.interval_ms = clamped;
    log::debug!("Tick-Intervall: {} ms", clamped);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SAMPLE_COUNT;

    #[test]
    fn test_initial_state_runs_planar_from_zero() {
        let state = AppState::new();
        assert_eq!(state.playback.active_curve, CurveKind::Planar);
        assert_eq!(state.playback.frame_cursor, 0);
        assert!(state.playback.running);
        assert_eq!(state.playback.interval_ms, 5);
    }

    #[test]
    fn test_tick_advances_by_one() {
        let mut state = AppState::new();
        assert!(tick(&mut state));
        assert!(tick(&mut state));
        assert_eq!(state.playback.frame_cursor, 2);
    }

    #[test]
    fn test_tick_is_noop_while_paused() {
        let mut state = AppState::new();
        toggle(&mut state);
        assert!(!tick(&mut state));
        assert_eq!(state.playback.frame_cursor, 0);
    }

    #[test]
    fn test_tick_stops_at_end_without_clearing_running() {
        let mut state = AppState::new();
        state.playback.frame_cursor = SAMPLE_COUNT - 1;

        assert!(tick(&mut state));
        assert_eq!(state.playback.frame_cursor, SAMPLE_COUNT);
        assert!(!tick(&mut state));
        assert_eq!(state.playback.frame_cursor, SAMPLE_COUNT);
        assert!(state.playback.running);
        assert!(state.is_finished());
    }

    #[test]
    fn test_select_view_resets_even_if_already_active() {
        let mut state = AppState::new();
        state.playback.frame_cursor = 300;
        state.playback.running = false;

        select_view(&mut state, CurveKind::Planar);

        assert_eq!(state.playback.frame_cursor, 0);
        assert!(state.playback.running);
    }

    #[test]
    fn test_toggle_twice_resumes_at_same_cursor() {
        let mut state = AppState::new();
        for _ in 0..17 {
            tick(&mut state);
        }

        toggle(&mut state);
        assert!(!state.playback.running);
        assert_eq!(advance_timer(&mut state, 100.0), 0);
        toggle(&mut state);

        assert!(state.playback.running);
        assert_eq!(state.playback.frame_cursor, 17);
    }

    #[test]
    fn test_advance_timer_emits_ticks_per_interval() {
        let mut state = AppState::new();
        set_interval(&mut state, 10);

        // Erster Frame schaltet den Timer nur scharf
        assert_eq!(advance_timer(&mut state, 16.0), 0);
        assert_eq!(advance_timer(&mut state, 30.0), 3);
        assert_eq!(state.playback.frame_cursor, 3);
    }

    #[test]
    fn test_advance_timer_never_overshoots() {
        let mut state = AppState::new();
        set_interval(&mut state, 1);
        state.playback.frame_cursor = SAMPLE_COUNT - 2;

        advance_timer(&mut state, 16.0);
        let advanced = advance_timer(&mut state, 200.0);

        assert_eq!(advanced, 2);
        assert_eq!(state.playback.frame_cursor, SAMPLE_COUNT);
    }

    #[test]
    fn test_set_interval_clamps_and_keeps_progress() {
        let mut state = AppState::new();
        state.playback.frame_cursor = 40;

        set_interval(&mut state, 0);
        assert_eq!(state.playback.interval_ms, 1);
        set_interval(&mut state, 99);
        assert_eq!(state.playback.interval_ms, 50);

        assert_eq!(state.playback.frame_cursor, 40);
        assert_eq!(state.playback.active_curve, CurveKind::Planar);
    }
}
