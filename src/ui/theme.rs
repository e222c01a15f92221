//! Dunkles Farbschema aus den Viewer-Optionen.

use crate::shared::ViewerOptions;

/// Wandelt eine RGBA-Farbe (0.0..=1.0) in eine `egui::Color32`.
pub fn rgba(color: [f32; 4]) -> egui::Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        channel(color[3]),
    )
}

/// Setzt Hintergrund-, Button- und Textfarben im egui-Kontext.
pub fn apply_theme(ctx: &egui::Context, options: &ViewerOptions) {
    let mut visuals = egui::Visuals::dark();

    let background = rgba(options.background_color);
    visuals.panel_fill = background;
    visuals.window_fill = background;
    visuals.extreme_bg_color = background;
    visuals.override_text_color = Some(rgba(options.text_color));

    // Buttons: ruhend dunkelgrau, bei Hover heller
    let button = rgba(options.button_color);
    let hover = rgba(options.button_hover_color);
    visuals.widgets.inactive.bg_fill = button;
    visuals.widgets.inactive.weak_bg_fill = button;
    visuals.widgets.hovered.bg_fill = hover;
    visuals.widgets.hovered.weak_bg_fill = hover;

    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::rgba;

    #[test]
    fn rgba_converts_and_clamps_channels() {
        assert_eq!(
            rgba([1.0, 0.0, 0.5, 1.0]),
            egui::Color32::from_rgba_unmultiplied(255, 0, 128, 255)
        );
        assert_eq!(
            rgba([2.0, -1.0, 0.0, 1.0]),
            egui::Color32::from_rgba_unmultiplied(255, 0, 0, 255)
        );
    }
}
