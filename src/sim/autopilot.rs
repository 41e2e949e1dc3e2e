//! Idle/demo mode - the game plays itself
//!
//! Keeps the actor riding just above the floor of the next gap and flaps
//! when gravity is about to push it through.

use super::state::{GamePhase, GameState};
use crate::tuning::Tuning;

/// Decide whether to flap before the next tick
pub fn should_flap(state: &GameState, tuning: &Tuning) -> bool {
    if state.phase != GamePhase::Running {
        return false;
    }

    let actor = state.actor.pos;

    // Next obstacle the actor has not fully cleared, else a centered virtual gap
    let gap_bottom = state
        .obstacles
        .iter()
        .find(|o| o.right_edge(tuning) >= actor.x)
        .map(|o| o.gap_bottom)
        .unwrap_or((tuning.viewport_height + tuning.gap_height) / 2.0);

    let margin = tuning.gravity_step * 2.0;
    let floor = gap_bottom - tuning.actor_height - margin;
    let would_sink = actor.y + tuning.gravity_step >= floor;
    let clears_ceiling = actor.y + tuning.flap_displacement > 0.0;

    would_sink && clears_ceiling
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Engine;
    use crate::sim::spawn::GapSource;
    use crate::sim::state::Obstacle;

    struct Centered;

    impl GapSource for Centered {
        fn next_unit(&mut self) -> f32 {
            0.5
        }
    }

    fn running_at(y: f32, tuning: &Tuning) -> GameState {
        let mut state = GameState::new(tuning);
        state.start(tuning, &mut Centered);
        state.actor.pos.y = y;
        state
    }

    #[test]
    fn test_idle_outside_running() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        state.actor.pos.y = 560.0;
        assert!(!should_flap(&state, &tuning));
    }

    #[test]
    fn test_flaps_near_gap_floor() {
        let tuning = Tuning::default();
        // Centered gap spans 200..400, so the actor may rest down to y = 370
        assert!(!should_flap(&running_at(300.0, &tuning), &tuning));
        assert!(should_flap(&running_at(365.0, &tuning), &tuning));
    }

    #[test]
    fn test_skips_flap_into_ceiling() {
        let tuning = Tuning::default();
        let mut state = running_at(80.0, &tuning);
        state.obstacles[0] = Obstacle {
            x: 90.0,
            gap_top: 50.0,
            gap_bottom: 110.0,
            passed: false,
        };
        assert!(!should_flap(&state, &tuning));
    }

    #[test]
    fn test_ignores_cleared_obstacles() {
        let tuning = Tuning::default();
        let mut state = running_at(365.0, &tuning);
        state.obstacles.push_front(Obstacle {
            x: 0.0,
            gap_top: 350.0,
            gap_bottom: 550.0,
            passed: true,
        });
        // Cleared obstacle would allow y = 365; the next one does not
        assert!(should_flap(&state, &tuning));
    }

    #[test]
    fn test_survives_steady_gaps() {
        let mut engine = Engine::new(Tuning::default(), Centered);
        engine.start();

        for _ in 0..1000 {
            if should_flap(engine.state(), engine.tuning()) {
                engine.activate();
            }
            engine.tick();
        }

        assert_eq!(engine.phase(), GamePhase::Running);
        assert!(engine.score() >= 5);
    }
}
