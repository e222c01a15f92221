//! Orbit-Kamera für die orthografische Projektion der 3D-Ansicht.

use glam::{DVec2, DVec3, Vec2};

/// Seitenverhältnis der normierten Achsen-Box (x : y : z).
pub const BOX_ASPECT: DVec3 = DVec3::new(1.0, 1.0, 0.75);

/// Orbit-Kamera mit Azimut und Elevation in Grad.
///
/// Blickt immer auf die Mitte der Achsen-Box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Drehung um die z-Achse
    pub azimuth_deg: f32,
    /// Neigung über der xy-Ebene
    pub elevation_deg: f32,
}

impl OrbitCamera {
    /// Standard-Azimut.
    pub const DEFAULT_AZIMUTH_DEG: f32 = -60.0;
    /// Standard-Elevation.
    pub const DEFAULT_ELEVATION_DEG: f32 = 30.0;
    /// Elevation bleibt in `[-90, 90]`.
    pub const ELEVATION_LIMIT_DEG: f32 = 90.0;

    /// Erstellt eine Kamera mit den gegebenen Winkeln.
    pub fn new(azimuth_deg: f32, elevation_deg: f32) -> Self {
        let mut camera = Self {
            azimuth_deg: 0.0,
            elevation_deg: 0.0,
        };
        camera.set_angles(azimuth_deg, elevation_deg);
        camera
    }

    /// Setzt beide Winkel (normalisiert bzw. geklemmt).
    pub fn set_angles(&mut self, azimuth_deg: f32, elevation_deg: f32) {
        self.azimuth_deg = wrap_degrees(azimuth_deg);
        self.elevation_deg =
            elevation_deg.clamp(-Self::ELEVATION_LIMIT_DEG, Self::ELEVATION_LIMIT_DEG);
    }

    /// Dreht die Kamera um ein Maus-Delta (Pixel × Grad/Pixel).
    pub fn orbit(&mut self, delta_px: Vec2, degrees_per_px: f32) {
        self.set_angles(
            self.azimuth_deg - delta_px.x * degrees_per_px,
            self.elevation_deg + delta_px.y * degrees_per_px,
        );
    }

    /// Bildschirm-Basisvektoren (rechts, oben) im normierten Box-Raum.
    fn screen_basis(&self) -> (DVec3, DVec3) {
        let az = f64::from(self.azimuth_deg).to_radians();
        let el = f64::from(self.elevation_deg).to_radians();
        let right = DVec3::new(-az.sin(), az.cos(), 0.0);
        let up = DVec3::new(-el.sin() * az.cos(), -el.sin() * az.sin(), el.cos());
        (right, up)
    }

    /// Einheitsvektor von der Box-Mitte zum Betrachter.
    ///
    /// Die Vorzeichen bestimmen, welche Box-Seiten hinten liegen.
    pub fn view_direction(&self) -> DVec3 {
        let az = f64::from(self.azimuth_deg).to_radians();
        let el = f64::from(self.elevation_deg).to_radians();
        DVec3::new(el.cos() * az.cos(), el.cos() * az.sin(), el.sin())
    }

    /// Projiziert einen Punkt innerhalb der Achsgrenzen `[min, max]`.
    ///
    /// Ergebnis: x nach rechts, y nach oben; die Box-Mitte liegt im Ursprung.
    /// Die Box passt in jeder Orientierung in den Einheitskreis.
    pub fn project(&self, p: DVec3, min: DVec3, max: DVec3) -> DVec2 {
        let extent = (max - min).max(DVec3::splat(f64::EPSILON));
        let normalized = ((p - min) / extent - DVec3::splat(0.5)) * BOX_ASPECT;
        let (right, up) = self.screen_basis();
        DVec2::new(normalized.dot(right), normalized.dot(up))
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(Self::DEFAULT_AZIMUTH_DEG, Self::DEFAULT_ELEVATION_DEG)
    }
}

/// Normalisiert einen Winkel auf `(-180, 180]`.
fn wrap_degrees(deg: f32) -> f32 {
    let wrapped = (deg + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 {
        180.0
    } else {
        wrapped
    }
}
