//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::CurveKind;
use crate::shared::{RenderScene, SceneCurve};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let view = state.active_view();
    let curve = match view {
        CurveKind::Planar => SceneCurve::Planar(state.curves.planar.clone()),
        CurveKind::Helix => SceneCurve::Helix(state.curves.helix.clone()),
    };
    let total_points = state.active_len();

    RenderScene {
        view,
        axes: state.view.axes.clone(),
        curve,
        visible_points: state.playback.frame_cursor.min(total_points),
        total_points,
        camera: state.view.camera,
        running: state.playback.running,
        finished: state.is_finished(),
        interval_ms: state.playback.interval_ms,
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::use_cases::playback;
    use crate::app::AppState;
    use crate::core::CurveKind;

    #[test]
    fn build_exposes_only_active_curve_prefix() {
        let mut state = AppState::new();
        for _ in 0..25 {
            playback::tick(&mut state);
        }

        let scene = build(&state);
        assert_eq!(scene.view, CurveKind::Planar);
        assert_eq!(scene.planar_points().len(), 25);
        assert!(scene.helix_points().is_empty());
        assert_eq!(scene.planar_points(), &state.curves.planar.points()[..25]);
    }

    #[test]
    fn build_after_view_switch_starts_empty() {
        let mut state = AppState::new();
        for _ in 0..25 {
            playback::tick(&mut state);
        }
        playback::select_view(&mut state, CurveKind::Helix);

        let scene = build(&state);
        assert_eq!(scene.view, CurveKind::Helix);
        assert!(scene.helix_points().is_empty());
        assert!(scene.planar_points().is_empty());
        assert_eq!(scene.axes.kind, CurveKind::Helix);
        assert!(scene.is_animating());
    }

    #[test]
    fn build_marks_finished_scene() {
        let mut state = AppState::new();
        state.playback.frame_cursor = state.active_len();

        let scene = build(&state);
        assert!(scene.finished);
        assert!(scene.running);
        assert!(!scene.is_animating());
        assert_eq!(scene.visible_points, scene.total_points);
    }
}
