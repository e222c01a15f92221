//! Frame-Timer: setzt vergangene Frame-Zeit in Animations-Ticks um.
//!
//! egui kennt keine Timer-Callbacks. Stattdessen meldet jeder Frame seine
//! Dauer, und der Timer gibt zurück, wie viele Intervalle inzwischen
//! abgelaufen sind. Der Host fordert währenddessen per
//! `request_repaint_after` den nächsten Frame an.

use crate::shared::options::MAX_FRAME_DT_MS;

/// Akkumulator für Frame-Zeit.
///
/// Nach `reset()` ist der Timer "unscharf": der erste gemeldete Frame
/// schaltet ihn nur scharf. So zählt die Zeit vor einem (Neu-)Start nicht.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameTimer {
    pending_ms: f64,
    armed: bool,
}

impl FrameTimer {
    /// Erstellt einen gestoppten Timer.
    pub fn new() -> Self {
        Self {
            pending_ms: 0.0,
            armed: false,
        }
    }

    /// Stoppt den Timer und verwirft angesammelte Zeit.
    pub fn reset(&mut self) {
        self.pending_ms = 0.0;
        self.armed = false;
    }

    /// Meldet `dt_ms` vergangene Zeit und liefert die Anzahl fälliger Ticks.
    ///
    /// `dt_ms` wird auf [`MAX_FRAME_DT_MS`] begrenzt, damit ein langer
    /// Hänger (Fenster minimiert, Debugger) keinen Sprung verursacht.
    pub fn accumulate(&mut self, dt_ms: f64, interval_ms: u32) -> usize {
        if !self.armed {
            self.armed = true;
            return 0;
        }
        if !dt_ms.is_finite() || dt_ms <= 0.0 {
            return 0;
        }

        let interval = f64::from(interval_ms.max(1));
        self.pending_ms += dt_ms.min(MAX_FRAME_DT_MS);
        let ticks = (self.pending_ms / interval).floor();
        self.pending_ms -= ticks * interval;
        ticks as usize
    }

    /// Bereits angesammelte, noch nicht verbrauchte Zeit.
    pub fn pending_ms(&self) -> f64 {
        self.pending_ms
    }

    /// Gibt zurück, ob der Timer nach einem Reset schon scharf ist.
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn armed_timer() -> FrameTimer {
        let mut timer = FrameTimer::new();
        assert_eq!(timer.accumulate(1000.0, 5), 0);
        timer
    }

    #[test]
    fn test_first_frame_after_reset_only_arms() {
        let mut timer = FrameTimer::new();
        assert!(!timer.is_armed());
        assert_eq!(timer.accumulate(100.0, 5), 0);
        assert!(timer.is_armed());
        assert_relative_eq!(timer.pending_ms(), 0.0);
    }

    #[test]
    fn test_whole_intervals_become_ticks() {
        let mut timer = armed_timer();
        assert_eq!(timer.accumulate(16.0, 5), 3);
        assert_relative_eq!(timer.pending_ms(), 1.0);
        assert_eq!(timer.accumulate(4.0, 5), 1);
        assert_relative_eq!(timer.pending_ms(), 0.0);
    }

    #[test]
    fn test_slow_interval_needs_several_frames() {
        let mut timer = armed_timer();
        assert_eq!(timer.accumulate(16.0, 50), 0);
        assert_eq!(timer.accumulate(16.0, 50), 0);
        assert_eq!(timer.accumulate(16.0, 50), 0);
        assert_eq!(timer.accumulate(16.0, 50), 1);
    }

    #[test]
    fn test_long_frames_are_capped() {
        let mut timer = armed_timer();
        assert_eq!(timer.accumulate(10_000.0, 1), 250);
    }

    #[test]
    fn test_invalid_dt_is_ignored() {
        let mut timer = armed_timer();
        assert_eq!(timer.accumulate(f64::NAN, 5), 0);
        assert_eq!(timer.accumulate(-3.0, 5), 0);
        assert_relative_eq!(timer.pending_ms(), 0.0);
    }

    #[test]
    fn test_reset_discards_pending_time() {
        let mut timer = armed_timer();
        timer.accumulate(4.0, 5);
        timer.reset();
        assert_relative_eq!(timer.pending_ms(), 0.0);
        assert!(!timer.is_armed());
    }
}
