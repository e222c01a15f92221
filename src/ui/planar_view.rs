//! 2D-Ansicht als egui_plot-Liniendiagramm mit festen Achsgrenzen.

use super::theme::rgba;
use crate::core::{nice_ticks, AxesConfig};
use crate::shared::RenderScene;
use egui_plot::{HLine, Line, LineStyle, Plot, PlotBounds, PlotPoints, VLine};

const GRID_TICK_TARGET: usize = 6;

/// Positionen der vertikalen (x) und horizontalen (y) Gitterlinien.
fn grid_positions(axes: &AxesConfig) -> (Vec<f64>, Vec<f64>) {
    (
        nice_ticks(axes.min.x, axes.max.x, GRID_TICK_TARGET),
        nice_ticks(axes.min.y, axes.max.y, GRID_TICK_TARGET),
    )
}

/// Zeichnet Titel, Achsen und den sichtbaren Anfang der 2D-Kurve.
pub fn render_planar_view(ui: &mut egui::Ui, scene: &RenderScene) {
    let axes = &scene.axes;
    let options = &scene.options;

    ui.vertical_centered(|ui| {
        ui.heading(axes.title);
    });

    let bounds = PlotBounds::from_min_max([axes.min.x, axes.min.y], [axes.max.x, axes.max.y]);
    let (grid_x, grid_y) = grid_positions(axes);
    let grid_stroke = egui::Stroke::new(1.0, rgba(options.grid_color));

    Plot::new("planar_view")
        .x_axis_label(axes.x_label)
        .y_axis_label(axes.y_label)
        .show_background(false)
        .show_grid(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show(ui, |plot_ui| {
            // Grenzen jeden Frame setzen: die Achsen wachsen nicht mit der Kurve mit
            plot_ui.set_plot_bounds(bounds);

            // Gestricheltes Gitter an den Tick-Positionen
            for &x in &grid_x {
                plot_ui.vline(
                    VLine::new("", x)
                        .stroke(grid_stroke)
                        .style(LineStyle::dashed_loose()),
                );
            }
            for &y in &grid_y {
                plot_ui.hline(
                    HLine::new("", y)
                        .stroke(grid_stroke)
                        .style(LineStyle::dashed_loose()),
                );
            }

            let points = scene.planar_points();
            if points.is_empty() {
                return;
            }
            let series: PlotPoints = points.iter().map(|p| [p.x, p.y]).collect();
            plot_ui.line(
                Line::new(axes.title, series)
                    .color(rgba(options.curve_color))
                    .width(options.curve_width_px),
            );
        });
}
