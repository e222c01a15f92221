//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::CurveKind;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SelectViewRequested { kind } => vec![AppCommand::SelectView { kind }],
        AppIntent::TogglePlaybackRequested => vec![AppCommand::TogglePlayback],
        AppIntent::SpeedChanged { interval_ms } => vec![AppCommand::SetInterval { interval_ms }],
        AppIntent::FrameTimeElapsed { dt_ms } => {
            // Gestoppter Timer: keine Commands, das Log bleibt frei von Leerlauf-Frames
            if state.is_animating() {
                vec![AppCommand::AdvanceTimer { dt_ms }]
            } else {
                vec![]
            }
        }
        AppIntent::OrbitDragged { delta } => {
            if state.active_view() == CurveKind::Helix {
                vec![AppCommand::OrbitCamera { delta }]
            } else {
                vec![]
            }
        }
    }
}
