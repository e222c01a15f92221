//! Status-Bar am oberen Bildschirmrand.

use crate::app::AppState;
use crate::core::CurveKind;

/// Kurzer Wiedergabe-Status für die Status-Bar.
pub fn playback_status(running: bool, finished: bool) -> &'static str {
    if finished {
        "Fertig"
    } else if running {
        "Läuft"
    } else {
        "Pausiert"
    }
}

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::top("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Ansicht: {}", state.active_view().label()));

            ui.separator();

            ui.label(format!(
                "Punkte: {} / {}",
                state.playback.frame_cursor,
                state.active_len()
            ));

            ui.separator();

            ui.label(format!("Intervall: {} ms", state.playback.interval_ms));

            ui.separator();

            ui.label(format!(
                "Status: {}",
                playback_status(state.playback.running, state.is_finished())
            ));

            if state.active_view() == CurveKind::Helix {
                ui.separator();
                ui.label(format!(
                    "Azimut: {:.0}° | Elevation: {:.0}°",
                    state.view.camera.azimuth_deg, state.view.camera.elevation_deg
                ));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}

#[cfg(test)]
mod tests {
    use super::playback_status;

    #[test]
    fn finished_wins_over_running_flag() {
        assert_eq!(playback_status(true, true), "Fertig");
        assert_eq!(playback_status(false, true), "Fertig");
        assert_eq!(playback_status(true, false), "Läuft");
        assert_eq!(playback_status(false, false), "Pausiert");
    }
}
