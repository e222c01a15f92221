//! Parametrisierte Kurven: Abtastung und unveränderliche Punktfolgen.

use glam::{DVec2, DVec3};
use std::f64::consts::TAU;
use std::sync::Arc;

/// Anzahl der Abtastpunkte pro Kurve.
pub const SAMPLE_COUNT: usize = 1000;
/// Parameterbereich der 2D-Kurve: eine Periode.
pub const PLANAR_T_END: f64 = TAU;
/// Parameterbereich der Helix: zehn Perioden.
pub const HELIX_T_END: f64 = 10.0 * TAU;
/// Endhöhe der Helix (z am letzten Abtastpunkt).
pub const HELIX_HEIGHT: f64 = 10.0;

/// Welche der beiden Kurven gemeint ist (und damit auch welche Ansicht).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveKind {
    /// Ebene Kurve aus überlagerten Sinus-/Kosinus-Termen
    #[default]
    Planar,
    /// Kreis-Helix (Feder) im Raum
    Helix,
}

impl CurveKind {
    /// Kurzbezeichnung für Status-Bar und Log.
    pub fn label(self) -> &'static str {
        match self {
            CurveKind::Planar => "2D",
            CurveKind::Helix => "3D",
        }
    }
}

/// Unveränderliche, geordnete Punktfolge.
///
/// Die Punkte liegen in einem `Arc`, damit Render-Szenen pro Frame
/// ohne Kopie geklont werden können.
#[derive(Debug, Clone)]
pub struct Curve<P> {
    points: Arc<[P]>,
}

/// 2D-Kurve mit (x, y)-Punkten.
pub type PlanarCurve = Curve<DVec2>;
/// 3D-Kurve mit (x, y, z)-Punkten.
pub type HelixCurve = Curve<DVec3>;

impl<P: Copy> Curve<P> {
    /// Erstellt eine Kurve aus bereits berechneten Punkten.
    pub fn from_points(points: Vec<P>) -> Self {
        Self {
            points: points.into(),
        }
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn die Kurve keine Punkte hat.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Alle Punkte der Kurve.
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Die ersten `count` Punkte. Größere Werte liefern die ganze Kurve.
    pub fn prefix(&self, count: usize) -> &[P] {
        &self.points[..count.min(self.points.len())]
    }
}

impl Curve<DVec2> {
    /// Achsparallele Hülle aller Punkte als (min, max).
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let first = *self.points.first()?;
        Some(
            self.points
                .iter()
                .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p))),
        )
    }
}

impl Curve<DVec3> {
    /// Achsparallele Hülle aller Punkte als (min, max).
    pub fn bounds(&self) -> Option<(DVec3, DVec3)> {
        let first = *self.points.first()?;
        Some(
            self.points
                .iter()
                .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p))),
        )
    }
}

/// Ergebnis von [`generate`]: eine der beiden Kurvenarten.
#[derive(Debug, Clone)]
pub enum GeneratedCurve {
    /// 2D-Kurve
    Planar(PlanarCurve),
    /// 3D-Helix
    Helix(HelixCurve),
}

impl GeneratedCurve {
    /// Anzahl der Punkte unabhängig von der Kurvenart.
    pub fn len(&self) -> usize {
        match self {
            GeneratedCurve::Planar(c) => c.len(),
            GeneratedCurve::Helix(c) => c.len(),
        }
    }

    /// Gibt `true` zurück, wenn die Kurve keine Punkte hat.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `n` gleichmäßig verteilte Werte in `[start, end]`, beide Enden eingeschlossen.
pub fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| {
        // Letzten Wert exakt treffen, sonst summiert sich der Rundungsfehler
        if n > 1 && i == n - 1 {
            end
        } else {
            start + step * i as f64
        }
    })
}

/// Punkt der 2D-Kurve zum Parameter `t`.
pub fn planar_point(t: f64) -> DVec2 {
    DVec2::new(
        t.sin() + 0.5 * (5.0 * t).cos() + 0.25 * (13.0 * t).sin(),
        t.cos() + 0.5 * (5.0 * t).sin() + 0.25 * (13.0 * t).cos(),
    )
}

/// Punkt der Helix zum Parameter `t`.
pub fn helix_point(t: f64) -> DVec3 {
    DVec3::new(t.cos(), t.sin(), HELIX_HEIGHT / HELIX_T_END * t)
}

/// Tastet die 2D-Kurve über eine Periode ab.
pub fn generate_planar() -> PlanarCurve {
    Curve::from_points(
        linspace(0.0, PLANAR_T_END, SAMPLE_COUNT)
            .map(planar_point)
            .collect(),
    )
}

/// Tastet die Helix über zehn Perioden ab.
pub fn generate_helix() -> HelixCurve {
    Curve::from_points(
        linspace(0.0, HELIX_T_END, SAMPLE_COUNT)
            .map(helix_point)
            .collect(),
    )
}

/// Erzeugt die Kurve der gewünschten Art.
pub fn generate(kind: CurveKind) -> GeneratedCurve {
    match kind {
        CurveKind::Planar => GeneratedCurve::Planar(generate_planar()),
        CurveKind::Helix => GeneratedCurve::Helix(generate_helix()),
    }
}

/// Beide Kurven, einmalig beim Start berechnet.
#[derive(Debug, Clone)]
pub struct CurveSet {
    /// Die 2D-Kurve
    pub planar: PlanarCurve,
    /// Die 3D-Helix
    pub helix: HelixCurve,
}

impl CurveSet {
    /// Berechnet beide Kurven.
    pub fn generate() -> Self {
        Self {
            planar: generate_planar(),
            helix: generate_helix(),
        }
    }

    /// Punktanzahl der Kurve `kind`.
    pub fn len(&self, kind: CurveKind) -> usize {
        match kind {
            CurveKind::Planar => self.planar.len(),
            CurveKind::Helix => self.helix.len(),
        }
    }
}

impl Default for CurveSet {
    fn default() -> Self {
        Self::generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_includes_both_ends() {
        let values: Vec<f64> = linspace(0.0, 1.0, 5).collect();
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert_eq!(linspace(0.0, 1.0, 0).count(), 0);
        let single: Vec<f64> = linspace(3.0, 7.0, 1).collect();
        assert_eq!(single, vec![3.0]);
    }

    #[test]
    fn test_planar_curve_has_sample_count_points() {
        let curve = generate_planar();
        assert_eq!(curve.len(), SAMPLE_COUNT);
    }

    #[test]
    fn test_planar_curve_is_bounded_by_amplitude_sum() {
        let curve = generate_planar();
        for p in curve.points() {
            assert!(p.x.abs() <= 1.75, "x außerhalb: {}", p.x);
            assert!(p.y.abs() <= 1.75, "y außerhalb: {}", p.y);
        }
    }

    #[test]
    fn test_planar_curve_is_closed() {
        // Eine volle Periode: Anfangs- und Endpunkt fallen zusammen
        let curve = generate_planar();
        let first = curve.points()[0];
        let last = curve.points()[curve.len() - 1];
        assert_relative_eq!(first.x, last.x, epsilon = 1e-9);
        assert_relative_eq!(first.y, last.y, epsilon = 1e-9);
        assert_relative_eq!(first.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(first.y, 1.25, epsilon = 1e-12);
    }

    #[test]
    fn test_helix_boundary_heights() {
        let curve = generate_helix();
        assert_eq!(curve.len(), SAMPLE_COUNT);
        assert_relative_eq!(curve.points()[0].z, 0.0);
        assert_relative_eq!(curve.points()[SAMPLE_COUNT - 1].z, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_helix_projects_onto_unit_circle() {
        let curve = generate_helix();
        for p in curve.points() {
            assert_relative_eq!(p.x * p.x + p.y * p.y, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_helix_rises_monotonically() {
        let curve = generate_helix();
        assert!(curve.points().windows(2).all(|w| w[1].z > w[0].z));
    }

    #[test]
    fn test_prefix_is_clamped_to_length() {
        let curve = generate_planar();
        assert!(curve.prefix(0).is_empty());
        assert_eq!(curve.prefix(10).len(), 10);
        assert_eq!(curve.prefix(SAMPLE_COUNT + 50).len(), SAMPLE_COUNT);
    }

    #[test]
    fn test_bounds_of_helix() {
        let (lo, hi) = generate_helix().bounds().expect("Helix hat Punkte");
        assert_relative_eq!(lo.z, 0.0);
        assert_relative_eq!(hi.z, 10.0, epsilon = 1e-12);
        assert!(lo.x >= -1.0 - 1e-12 && hi.x <= 1.0 + 1e-12);
    }

    #[test]
    fn test_bounds_of_empty_curve_is_none() {
        let curve: PlanarCurve = Curve::from_points(Vec::new());
        assert!(curve.bounds().is_none());
    }

    #[test]
    fn test_generate_dispatches_on_kind() {
        assert!(matches!(generate(CurveKind::Planar), GeneratedCurve::Planar(_)));
        assert!(matches!(generate(CurveKind::Helix), GeneratedCurve::Helix(_)));
        assert_eq!(generate(CurveKind::Helix).len(), SAMPLE_COUNT);
    }
}
