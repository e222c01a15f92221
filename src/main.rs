//! Parametric Curve Viewer.
//!
//! Zeichnet eine 2D-Kurve und eine 3D-Helix Punkt für Punkt,
//! mit Ansichtswechsel, Pause und einstellbarer Geschwindigkeit.

use curve_viewer::core::CurveKind;
use curve_viewer::{ui, AppController, AppIntent, AppState, ViewerOptions};
use eframe::egui;
use std::time::Duration;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!(
            "Parametric Curve Viewer v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ViewerOptions::config_path();
        let viewer_options = ViewerOptions::load_from_file(&config_path);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(viewer_options.window_size)
                .with_title("Curvas Parametrizadas"),
            ..Default::default()
        };

        eframe::run_native(
            "Curvas Parametrizadas",
            options,
            Box::new(move |cc| {
                ui::apply_theme(&cc.egui_ctx, &viewer_options);
                Ok(Box::new(CurveViewerApp::new(viewer_options)))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct CurveViewerApp {
    state: AppState,
    controller: AppController,
}

impl CurveViewerApp {
    fn new(options: ViewerOptions) -> Self {
        let state = AppState::with_options(options);
        log::info!(
            "Kurven berechnet: 2D {} Punkte, 3D {} Punkte",
            state.curves.planar.len(),
            state.curves.helix.len()
        );

        Self {
            state,
            controller: AppController::new(),
        }
    }
}

impl eframe::App for CurveViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Timer zuerst: die Szene zeigt den Stand nach allen fälligen Ticks
        let dt_ms = f64::from(ctx.input(|i| i.unstable_dt)) * 1000.0;
        self.process_events(vec![AppIntent::FrameTimeElapsed { dt_ms }]);

        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_events);
    }
}

impl CurveViewerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_control_panel(ctx, &self.state));

        let scene = self.controller.build_render_scene(&self.state);

        egui::CentralPanel::default().show(ctx, |ui| match scene.view {
            CurveKind::Planar => ui::render_planar_view(ui, &scene),
            CurveKind::Helix => events.extend(ui::render_helix_view(ui, &scene)),
        });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_events: bool) {
        if has_events {
            ctx.request_repaint();
        }
        // Solange der Timer läuft, nächsten Frame nach einem Intervall anfordern
        if self.state.is_animating() {
            ctx.request_repaint_after(Duration::from_millis(u64::from(
                self.state.playback.interval_ms,
            )));
        }
    }
}
