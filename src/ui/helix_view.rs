//! 3D-Ansicht: orthografisch projizierte Achsen-Box mit der Helix.
//!
//! egui kennt keine 3D-Achsen. Gezeichnet werden die drei vom Betrachter
//! abgewandten Box-Seiten mit gestricheltem Gitter, Tick-Beschriftungen
//! und der sichtbare Anfang der Kurve. Ziehen mit der Maus dreht die Kamera.

use super::theme::rgba;
use crate::app::AppIntent;
use crate::core::{nice_ticks, OrbitCamera};
use crate::shared::RenderScene;
use glam::DVec3;

const TICK_TARGET: usize = 6;
const TICK_LABEL_OFFSET_PX: f32 = 14.0;
const AXIS_LABEL_OFFSET_PX: f32 = 36.0;
const GRID_DASH_PX: f32 = 4.0;
const GRID_GAP_PX: f32 = 3.0;
const FONT_SIZE_TICK: f32 = 11.0;
const FONT_SIZE_AXIS: f32 = 14.0;
/// Anteil der halben Canvas-Kante, den der Einheitskreis der Projektion einnimmt.
const FILL_FACTOR: f32 = 0.85;

/// Bildet Achsen-Koordinaten auf Canvas-Pixel ab.
struct Projector {
    camera: OrbitCamera,
    min: DVec3,
    max: DVec3,
    center: egui::Pos2,
    scale: f32,
}

impl Projector {
    fn new(rect: egui::Rect, scene: &RenderScene) -> Self {
        Self {
            camera: scene.camera,
            min: scene.axes.min,
            max: scene.axes.max,
            center: rect.center(),
            scale: 0.5 * rect.width().min(rect.height()) * FILL_FACTOR,
        }
    }

    fn to_screen(&self, p: DVec3) -> egui::Pos2 {
        let v = self.camera.project(p, self.min, self.max);
        // Bildschirm-y zeigt nach unten
        self.center + egui::vec2(v.x as f32 * self.scale, -(v.y as f32) * self.scale)
    }

    /// Wie `to_screen`, aber um `offset_px` von der Box-Mitte weg verschoben.
    fn outward(&self, p: DVec3, offset_px: f32) -> egui::Pos2 {
        let pos = self.to_screen(p);
        pos + (pos - self.center).normalized() * offset_px
    }
}

/// Koordinaten der hinteren Box-Seiten je Achse.
fn back_planes(camera: &OrbitCamera, min: DVec3, max: DVec3) -> DVec3 {
    let toward = camera.view_direction();
    DVec3::new(
        if toward.x >= 0.0 { min.x } else { max.x },
        if toward.y >= 0.0 { min.y } else { max.y },
        if toward.z >= 0.0 { min.z } else { max.z },
    )
}

/// Gitterlinien auf den hinteren Box-Seiten.
///
/// Jeder Tick auf Achse `axis` ergibt eine Linie auf jeder der beiden
/// hinteren Seiten, die nicht senkrecht zu `axis` stehen.
fn grid_segments(
    min: DVec3,
    max: DVec3,
    back: DVec3,
    ticks: &[Vec<f64>; 3],
) -> Vec<(DVec3, DVec3)> {
    let mut segments = Vec::new();
    for (axis, axis_ticks) in ticks.iter().enumerate() {
        for &t in axis_ticks {
            for pane in (0..3).filter(|&p| p != axis) {
                let along = 3 - axis - pane;
                let mut a = DVec3::ZERO;
                a[axis] = t;
                a[pane] = back[pane];
                a[along] = min[along];
                let mut b = a;
                b[along] = max[along];
                segments.push((a, b));
            }
        }
    }
    segments
}

/// Eckpunkte der hinteren Box-Seite senkrecht zu `pane`.
fn pane_outline(min: DVec3, max: DVec3, back: DVec3, pane: usize) -> [DVec3; 4] {
    let u = (pane + 1) % 3;
    let v = (pane + 2) % 3;
    let corner = |u_val: f64, v_val: f64| {
        let mut c = DVec3::ZERO;
        c[pane] = back[pane];
        c[u] = u_val;
        c[v] = v_val;
        c
    };
    [
        corner(min[u], min[v]),
        corner(max[u], min[v]),
        corner(max[u], max[v]),
        corner(min[u], max[v]),
    ]
}

/// Formatiert einen Tick-Wert ohne überflüssige Nachkommastellen.
fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Zeichnet die 3D-Ansicht und gibt Orbit-Events zurück.
pub fn render_helix_view(ui: &mut egui::Ui, scene: &RenderScene) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let axes = &scene.axes;
    let options = &scene.options;

    ui.vertical_centered(|ui| {
        ui.heading(axes.title);
    });

    let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::drag());
    if response.dragged() {
        let delta = response.drag_delta();
        if delta != egui::Vec2::ZERO {
            events.push(AppIntent::OrbitDragged {
                delta: glam::Vec2::new(delta.x, delta.y),
            });
        }
    }

    let painter = ui.painter_at(rect);
    let projector = Projector::new(rect, scene);
    let (min, max) = (axes.min, axes.max);
    let back = back_planes(&scene.camera, min, max);
    let front = min + max - back;

    let text_color = rgba(options.text_color);
    let grid_stroke = egui::Stroke::new(1.0, rgba(options.grid_color));
    let edge_stroke = egui::Stroke::new(1.0, text_color.gamma_multiply(0.6));

    // ── Hintere Box-Seiten ──
    for pane in 0..3 {
        let outline = pane_outline(min, max, back, pane)
            .iter()
            .map(|c| projector.to_screen(*c))
            .collect();
        painter.add(egui::Shape::closed_line(outline, edge_stroke));
    }

    let ticks = [
        nice_ticks(min.x, max.x, TICK_TARGET),
        nice_ticks(min.y, max.y, TICK_TARGET),
        nice_ticks(min.z, max.z, TICK_TARGET),
    ];

    for (a, b) in grid_segments(min, max, back, &ticks) {
        painter.extend(egui::Shape::dashed_line(
            &[projector.to_screen(a), projector.to_screen(b)],
            grid_stroke,
            GRID_DASH_PX,
            GRID_GAP_PX,
        ));
    }

    // ── Tick- und Achsenbeschriftung an den vorderen Kanten ──
    let tick_font = egui::FontId::proportional(FONT_SIZE_TICK);
    let axis_font = egui::FontId::proportional(FONT_SIZE_AXIS);
    let label_edges: [(usize, DVec3, Option<&str>); 3] = [
        (0, DVec3::new(0.0, front.y, back.z), Some(axes.x_label)),
        (1, DVec3::new(front.x, 0.0, back.z), Some(axes.y_label)),
        (2, DVec3::new(front.x, back.y, 0.0), axes.z_label),
    ];

    for (axis, edge, label) in label_edges {
        for &t in &ticks[axis] {
            let mut p = edge;
            p[axis] = t;
            painter.text(
                projector.outward(p, TICK_LABEL_OFFSET_PX),
                egui::Align2::CENTER_CENTER,
                format_tick(t),
                tick_font.clone(),
                text_color,
            );
        }

        if let Some(label) = label {
            let mut mid = edge;
            mid[axis] = 0.5 * (min[axis] + max[axis]);
            painter.text(
                projector.outward(mid, AXIS_LABEL_OFFSET_PX),
                egui::Align2::CENTER_CENTER,
                label,
                axis_font.clone(),
                text_color,
            );
        }
    }

    // ── Kurve ──
    let points: Vec<egui::Pos2> = scene
        .helix_points()
        .iter()
        .map(|p| projector.to_screen(*p))
        .collect();
    if points.len() >= 2 {
        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(options.curve_width_px, rgba(options.curve_color)),
        ));
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AxesConfig;

    #[test]
    fn default_camera_sees_matplotlib_back_panes() {
        let axes = AxesConfig::helix();
        let back = back_planes(&OrbitCamera::default(), axes.min, axes.max);
        assert_eq!(back, DVec3::new(-1.5, 1.5, 0.0));
    }

    #[test]
    fn camera_below_moves_floor_to_top() {
        let axes = AxesConfig::helix();
        let back = back_planes(&OrbitCamera::new(-60.0, -30.0), axes.min, axes.max);
        assert_eq!(back.z, 10.0);
    }

    #[test]
    fn grid_has_two_lines_per_tick() {
        let axes = AxesConfig::helix();
        let back = back_planes(&OrbitCamera::default(), axes.min, axes.max);
        let ticks = [vec![-1.0, 0.0, 1.0], vec![0.0], vec![0.0, 5.0, 10.0]];

        let segments = grid_segments(axes.min, axes.max, back, &ticks);

        assert_eq!(segments.len(), 2 * 7);
        for (a, b) in &segments {
            // Jede Linie liegt in einer hinteren Seite
            let in_back = (0..3).any(|i| a[i] == back[i] && b[i] == back[i]);
            assert!(in_back, "Linie {a:?} -> {b:?} nicht auf hinterer Seite");
        }
    }

    #[test]
    fn pane_outline_lies_in_pane() {
        let axes = AxesConfig::helix();
        let back = DVec3::new(-1.5, 1.5, 0.0);
        for pane in 0..3 {
            for corner in pane_outline(axes.min, axes.max, back, pane) {
                assert_eq!(corner[pane], back[pane]);
            }
        }
    }

    #[test]
    fn format_tick_drops_trailing_zero() {
        assert_eq!(format_tick(2.0), "2");
        assert_eq!(format_tick(-1.5), "-1.5");
        assert_eq!(format_tick(0.0), "0");
    }
}
