//! Steuer-Panel: Ansicht-Buttons, Pause-Button und Geschwindigkeits-Slider.

use super::theme::rgba;
use crate::app::{AppIntent, AppState};
use crate::core::CurveKind;
use crate::shared::{INTERVAL_MAX_MS, INTERVAL_MIN_MS};

/// Beschriftung des 2D-Buttons.
pub const LABEL_SHOW_PLANAR: &str = "Mostrar Curva 2D";
/// Beschriftung des 3D-Buttons.
pub const LABEL_SHOW_HELIX: &str = "Mostrar Hélice 3D";
/// Beschriftung des Pause-Buttons während die Wiedergabe läuft.
pub const LABEL_PAUSE: &str = "⏸ Pausar";
/// Beschriftung des Pause-Buttons im pausierten Zustand.
pub const LABEL_RESUME: &str = "▶ Continuar";
/// Beschriftung des Geschwindigkeits-Sliders.
pub const LABEL_SPEED: &str = "Velocidade (ms)";

const BUTTON_SIZE: egui::Vec2 = egui::Vec2::new(200.0, 32.0);

/// Beschriftung des Pause-Buttons.
///
/// Hängt nur an `running`: am Kurvenende bleibt "Pausar" stehen.
pub fn toggle_label(running: bool) -> &'static str {
    if running {
        LABEL_PAUSE
    } else {
        LABEL_RESUME
    }
}

/// Rendert das Steuer-Panel und gibt erzeugte Events zurück.
pub fn render_control_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.active_view();

    let frame = egui::Frame::NONE
        .fill(rgba(state.options.panel_color))
        .inner_margin(egui::Margin::same(10));

    egui::TopBottomPanel::bottom("control_panel")
        .frame(frame)
        .show(ctx, |ui| {
            ui.columns(3, |columns| {
                columns[0].vertical_centered(|ui| {
                    let button = egui::Button::new(LABEL_SHOW_PLANAR)
                        .min_size(BUTTON_SIZE)
                        .selected(active == CurveKind::Planar);
                    if ui.add(button).clicked() {
                        events.push(AppIntent::SelectViewRequested {
                            kind: CurveKind::Planar,
                        });
                    }
                });

                columns[1].vertical_centered(|ui| {
                    let button = egui::Button::new(toggle_label(state.playback.running))
                        .min_size(BUTTON_SIZE);
                    if ui.add(button).clicked() {
                        events.push(AppIntent::TogglePlaybackRequested);
                    }
                });

                columns[2].vertical_centered(|ui| {
                    let button = egui::Button::new(LABEL_SHOW_HELIX)
                        .min_size(BUTTON_SIZE)
                        .selected(active == CurveKind::Helix);
                    if ui.add(button).clicked() {
                        events.push(AppIntent::SelectViewRequested {
                            kind: CurveKind::Helix,
                        });
                    }
                });
            });

            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                let mut interval_ms = state.playback.interval_ms;
                let slider = egui::Slider::new(&mut interval_ms, INTERVAL_MIN_MS..=INTERVAL_MAX_MS)
                    .step_by(1.0)
                    .text(LABEL_SPEED);
                if ui.add(slider).changed() {
                    events.push(AppIntent::SpeedChanged { interval_ms });
                }
            });
        });

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_label_follows_running_flag() {
        assert_eq!(toggle_label(true), "⏸ Pausar");
        assert_eq!(toggle_label(false), "▶ Continuar");
    }
}
