//! Application State — zentrale Datenhaltung.

mod app_state;
mod playback;
mod view;

pub use app_state::AppState;
pub use playback::PlaybackState;
pub use view::ViewState;
