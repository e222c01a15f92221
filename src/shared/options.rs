//! Zentrale Konfiguration des Kurven-Viewers.
//!
//! `ViewerOptions` enthält alle beim Start änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Wiedergabe ──────────────────────────────────────────────────────

/// Kleinstes Tick-Intervall in Millisekunden.
pub const INTERVAL_MIN_MS: u32 = 1;
/// Größtes Tick-Intervall in Millisekunden.
pub const INTERVAL_MAX_MS: u32 = 50;
/// Tick-Intervall beim Start.
pub const INTERVAL_DEFAULT_MS: u32 = 5;
/// Obergrenze der Frame-Zeit, die pro Frame in Ticks umgesetzt wird.
pub const MAX_FRAME_DT_MS: f64 = 250.0;

// ── Fenster ─────────────────────────────────────────────────────────

/// Fenstergröße beim Start (Breite, Höhe).
pub const WINDOW_SIZE: [f32; 2] = [1200.0, 700.0];

// ── Farben ──────────────────────────────────────────────────────────

/// Hintergrund von Fenster und Achsen (RGBA: #1e1e1e).
pub const BACKGROUND_COLOR: [f32; 4] = [0.118, 0.118, 0.118, 1.0];
/// Hintergrund des Steuer-Panels (RGBA: #2e2e2e).
pub const PANEL_COLOR: [f32; 4] = [0.180, 0.180, 0.180, 1.0];
/// Button-Farbe (RGBA: #444444).
pub const BUTTON_COLOR: [f32; 4] = [0.267, 0.267, 0.267, 1.0];
/// Button-Farbe bei Hover (RGBA: Grau).
pub const BUTTON_HOVER_COLOR: [f32; 4] = [0.502, 0.502, 0.502, 1.0];
/// Text, Ticks und Achsenbeschriftung (RGBA: Weiß).
pub const TEXT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Gitterlinien (RGBA: Grau, 40 % deckend).
pub const GRID_COLOR: [f32; 4] = [0.502, 0.502, 0.502, 0.4];
/// Kurvenfarbe (RGBA: Lila).
pub const CURVE_COLOR: [f32; 4] = [0.502, 0.0, 0.502, 1.0];
/// Linienstärke der Kurve in Pixeln.
pub const CURVE_WIDTH_PX: f32 = 1.5;

// ── 3D-Ansicht ──────────────────────────────────────────────────────

/// Drehung der Orbit-Kamera pro Pixel Maus-Bewegung.
pub const ORBIT_DEGREES_PER_PX: f32 = 0.5;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle beim Start einlesbaren Viewer-Optionen.
/// Wird optional aus `curve_viewer.toml` neben der Binary gelesen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerOptions {
    // ── Wiedergabe ──────────────────────────────────────────────
    /// Tick-Intervall beim Start in Millisekunden
    pub default_interval_ms: u32,

    // ── Fenster ─────────────────────────────────────────────────
    /// Fenstergröße (Breite, Höhe)
    pub window_size: [f32; 2],

    // ── Farben ──────────────────────────────────────────────────
    /// Hintergrund von Fenster und Achsen
    pub background_color: [f32; 4],
    /// Hintergrund des Steuer-Panels
    pub panel_color: [f32; 4],
    /// Button-Farbe
    pub button_color: [f32; 4],
    /// Button-Farbe bei Hover
    pub button_hover_color: [f32; 4],
    /// Textfarbe
    pub text_color: [f32; 4],
    /// Farbe der Gitterlinien
    pub grid_color: [f32; 4],
    /// Kurvenfarbe
    pub curve_color: [f32; 4],
    /// Linienstärke der Kurve in Pixeln
    pub curve_width_px: f32,

    // ── 3D-Ansicht ──────────────────────────────────────────────
    /// Start-Azimut der Orbit-Kamera in Grad
    pub camera_azimuth_deg: f32,
    /// Start-Elevation der Orbit-Kamera in Grad
    pub camera_elevation_deg: f32,
    /// Drehung pro Pixel Maus-Bewegung
    pub orbit_degrees_per_px: f32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            default_interval_ms: INTERVAL_DEFAULT_MS,

            window_size: WINDOW_SIZE,

            background_color: BACKGROUND_COLOR,
            panel_color: PANEL_COLOR,
            button_color: BUTTON_COLOR,
            button_hover_color: BUTTON_HOVER_COLOR,
            text_color: TEXT_COLOR,
            grid_color: GRID_COLOR,
            curve_color: CURVE_COLOR,
            curve_width_px: CURVE_WIDTH_PX,

            camera_azimuth_deg: crate::core::OrbitCamera::DEFAULT_AZIMUTH_DEG,
            camera_elevation_deg: crate::core::OrbitCamera::DEFAULT_ELEVATION_DEG,
            orbit_degrees_per_px: ORBIT_DEGREES_PER_PX,
        }
    }
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus einem TOML-String; fehlende Felder bekommen Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        log::info!("Optionen geladen ({} ms Start-Intervall)", opts.interval_ms());
        Ok(opts)
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("curve_viewer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("curve_viewer.toml")
    }

    /// Start-Intervall, auf den zulässigen Bereich geklemmt.
    pub fn interval_ms(&self) -> u32 {
        clamp_interval(self.default_interval_ms)
    }
}

/// Klemmt ein Tick-Intervall auf `[INTERVAL_MIN_MS, INTERVAL_MAX_MS]`.
pub fn clamp_interval(interval_ms: u32) -> u32 {
    interval_ms.clamp(INTERVAL_MIN_MS, INTERVAL_MAX_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let opts = ViewerOptions::from_toml_str("default_interval_ms = 20\n")
            .expect("gültiges TOML");
        assert_eq!(opts.default_interval_ms, 20);
        assert_eq!(opts.curve_color, CURVE_COLOR);
        assert_eq!(opts.window_size, WINDOW_SIZE);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(ViewerOptions::from_toml_str("default_interval_ms = \"schnell\"").is_err());
    }

    #[test]
    fn test_out_of_range_interval_is_clamped() {
        let opts = ViewerOptions {
            default_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(opts.interval_ms(), INTERVAL_MIN_MS);
        assert_eq!(clamp_interval(500), INTERVAL_MAX_MS);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::path::Path::new("/nonexistent/curve_viewer.toml");
        assert_eq!(ViewerOptions::load_from_file(path), ViewerOptions::default());
    }
}
