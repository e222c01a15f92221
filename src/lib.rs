//! Parametric Curve Viewer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, FrameTimer, PlaybackState, ViewState,
};
pub use core::{
    generate, AxesConfig, Curve, CurveKind, CurveSet, GeneratedCurve, HelixCurve, OrbitCamera,
    PlanarCurve, SAMPLE_COUNT,
};
pub use shared::{RenderScene, SceneCurve, ViewerOptions};
