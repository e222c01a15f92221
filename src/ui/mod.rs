//! UI-Komponenten: Steuer-Panel, Status-Bar, 2D- und 3D-Ansicht.

pub mod controls;
pub mod helix_view;
/// UI-Layer mit egui
///
/// Jede Komponente liest nur State bzw. RenderScene und gibt
/// `AppIntent`s zurück; Mutationen laufen über den Controller.
pub mod planar_view;
pub mod status;
pub mod theme;

pub use controls::render_control_panel;
pub use helix_view::render_helix_view;
pub use planar_view::render_planar_view;
pub use status::render_status_bar;
pub use theme::apply_theme;
