use crate::app::timer::FrameTimer;
use crate::core::CurveKind;
use crate::shared::options::clamp_interval;

/// Wiedergabe-Zustand der Zeichen-Animation
#[derive(Debug, Clone)]
pub struct PlaybackState {
    /// Aktuell animierte Kurve
    pub active_curve: CurveKind,
    /// Anzahl der bereits gezeichneten Punkte (0..=N)
    pub frame_cursor: usize,
    /// Wiedergabe läuft; steuert die Beschriftung des Pause-Buttons
    pub running: bool,
    /// Tick-Intervall in Millisekunden (1..=50)
    pub interval_ms: u32,
    /// Frame-Timer, der vergangene Zeit in Ticks umsetzt
    pub timer: FrameTimer,
}

impl PlaybackState {
    /// Erstellt den Start-Zustand: 2D-Kurve, Cursor 0, läuft.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            active_curve: CurveKind::Planar,
            frame_cursor: 0,
            running: true,
            interval_ms: clamp_interval(interval_ms),
            timer: FrameTimer::new(),
        }
    }

    /// Gibt zurück, ob der Cursor das Kurvenende `total` erreicht hat.
    pub fn is_finished(&self, total: usize) -> bool {
        self.frame_cursor >= total
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(crate::shared::INTERVAL_DEFAULT_MS)
    }
}
