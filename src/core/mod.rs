//! Core-Domänentypen: Kurven, Achsen, 3D-Projektion.

pub mod axes;
/// Parametrisierte Kurven
///
/// Beide Kurven werden einmalig abgetastet und danach nur noch gelesen.
pub mod curve;
pub mod projection;

pub use axes::{nice_ticks, AxesConfig};
pub use curve::{
    generate, generate_helix, generate_planar, linspace, Curve, CurveKind, CurveSet,
    GeneratedCurve, HelixCurve, PlanarCurve, SAMPLE_COUNT,
};
pub use projection::OrbitCamera;
