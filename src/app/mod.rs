//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Kurven, Wiedergabe, Ansicht).
pub mod state;
pub mod timer;
pub mod use_cases;

pub use crate::core::{CurveKind, OrbitCamera};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, PlaybackState, ViewState};
pub use timer::FrameTimer;
