//! Achsen-Konfiguration der beiden Ansichten (Grenzen, Titel, Beschriftung).

use super::curve::{CurveKind, PlanarCurve};
use glam::DVec3;

/// Rand um die 2D-Kurve in Achseneinheiten.
pub const PLANAR_AXIS_MARGIN: f64 = 0.5;
/// Feste x/y-Halbbreite der 3D-Achsen.
pub const HELIX_XY_LIMIT: f64 = 1.5;
/// Feste z-Obergrenze der 3D-Achsen.
pub const HELIX_Z_LIMIT: f64 = 10.0;

/// Grenzen, Titel und Achsenbeschriftungen einer Ansicht.
#[derive(Debug, Clone, PartialEq)]
pub struct AxesConfig {
    /// Für welche Kurve die Achsen eingerichtet sind
    pub kind: CurveKind,
    /// Titel über dem Diagramm
    pub title: &'static str,
    /// Untere Grenzen (x, y, z). Bei 2D ist z ungenutzt.
    pub min: DVec3,
    /// Obere Grenzen (x, y, z). Bei 2D ist z ungenutzt.
    pub max: DVec3,
    /// Beschriftung der x-Achse
    pub x_label: &'static str,
    /// Beschriftung der y-Achse
    pub y_label: &'static str,
    /// Beschriftung der z-Achse (nur 3D)
    pub z_label: Option<&'static str>,
}

impl AxesConfig {
    /// Achsen der 2D-Ansicht: Kurvenhülle plus Rand.
    pub fn planar(curve: &PlanarCurve) -> Self {
        let (lo, hi) = curve
            .bounds()
            .map(|(lo, hi)| (lo.extend(0.0), hi.extend(0.0)))
            .unwrap_or((DVec3::ZERO, DVec3::ZERO));
        let margin = DVec3::new(PLANAR_AXIS_MARGIN, PLANAR_AXIS_MARGIN, 0.0);
        Self {
            kind: CurveKind::Planar,
            title: "Curva Parametrizada 2D",
            min: lo - margin,
            max: hi + margin,
            x_label: "x",
            y_label: "y",
            z_label: None,
        }
    }

    /// Achsen der 3D-Ansicht mit festen Grenzen.
    pub fn helix() -> Self {
        Self {
            kind: CurveKind::Helix,
            title: "Hélice Circular (Mola)",
            min: DVec3::new(-HELIX_XY_LIMIT, -HELIX_XY_LIMIT, 0.0),
            max: DVec3::new(HELIX_XY_LIMIT, HELIX_XY_LIMIT, HELIX_Z_LIMIT),
            x_label: "x",
            y_label: "y",
            z_label: Some("z"),
        }
    }
}

/// "Schöne" Tick-Positionen (1, 2, 5 × 10^k) innerhalb von `[min, max]`.
///
/// `target` ist die ungefähr gewünschte Anzahl an Intervallen.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let span = max - min;
    if !(span.is_finite() && span > 0.0) || target == 0 {
        return Vec::new();
    }

    let raw_step = span / target as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|f| f * magnitude)
        .find(|s| *s >= raw_step)
        .unwrap_or(10.0 * magnitude);

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last)
        .map(|i| {
            let v = i as f64 * step;
            // -0.0 vermeiden
            if v == 0.0 {
                0.0
            } else {
                v
            }
        })
        .collect()
}
