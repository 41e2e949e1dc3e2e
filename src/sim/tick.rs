//! Per-frame simulation step
//!
//! The host calls [`tick`] once per animation frame. The engine never
//! schedules itself.

use super::collision::{Collision, check_collision};
use super::spawn::{GapSource, generate_obstacle};
use super::state::{GameEvent, GamePhase, GameState};
use crate::tuning::Tuning;

/// Advance the game by one frame
///
/// Does nothing unless the phase is `Running`. Returns the collision that ended
/// the run, if any. The colliding positions are kept so the last frame shows
/// the crash.
pub fn tick<S: GapSource + ?Sized>(
    state: &mut GameState,
    tuning: &Tuning,
    source: &mut S,
) -> Option<Collision> {
    if state.phase != GamePhase::Running {
        return None;
    }

    state.time_ticks += 1;

    // Gravity (the floor is caught by the collision check)
    state.actor.pos.y += tuning.gravity_step;

    // Scroll
    for obstacle in state.obstacles.iter_mut() {
        obstacle.x -= tuning.scroll_speed;
    }

    // Drop obstacles that left the playfield
    state.obstacles.retain(|o| o.right_edge(tuning) >= 0.0);

    // Spawn at the right edge once the newest obstacle has moved far enough
    let needs_spawn = state
        .obstacles
        .back()
        .is_none_or(|tail| tail.x < tuning.viewport_width - tuning.spawn_pitch);
    if needs_spawn {
        let obstacle = generate_obstacle(tuning.viewport_width, tuning, source);
        state.obstacles.push_back(obstacle);
    }

    // One point per obstacle whose trailing edge cleared the actor
    let actor_x = state.actor.pos.x;
    for obstacle in state.obstacles.iter_mut() {
        if !obstacle.passed && obstacle.right_edge(tuning) < actor_x {
            obstacle.passed = true;
            state.score += 1;
            state.events.push(GameEvent::Scored { score: state.score });
        }
    }

    let hit = check_collision(&state.actor, &state.obstacles, tuning);
    if let Some(cause) = hit {
        state.phase = GamePhase::Over;
        state.events.push(GameEvent::Crashed {
            cause,
            score: state.score,
        });
        log::debug!(
            "run over after {} ticks: {:?} (score {})",
            state.time_ticks,
            cause,
            state.score
        );
    }

    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Obstacle;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Always places gaps in the middle of the band
    struct Centered;

    impl GapSource for Centered {
        fn next_unit(&mut self) -> f32 {
            0.5
        }
    }

    fn running(tuning: &Tuning) -> GameState {
        let mut state = GameState::new(tuning);
        state.start(tuning, &mut Centered);
        state.drain_events();
        state
    }

    #[test]
    fn test_tick_ignored_outside_running() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);

        assert_eq!(tick(&mut state, &tuning, &mut Centered), None);
        assert_eq!(state.actor.pos.y, 300.0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.time_ticks, 0);

        state.phase = GamePhase::Over;
        tick(&mut state, &tuning, &mut Centered);
        assert_eq!(state.actor.pos.y, 300.0);
    }

    #[test]
    fn test_gravity_without_flaps() {
        let tuning = Tuning::default();
        let mut state = running(&tuning);

        for _ in 0..5 {
            tick(&mut state, &tuning, &mut Centered);
        }

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.actor.pos.y, tuning.viewport_height / 2.0 + 10.0);
        assert_eq!(state.obstacles[0].x, 400.0 - 15.0);
    }

    #[test]
    fn test_offscreen_obstacle_is_dropped() {
        let tuning = Tuning::default();
        let mut state = running(&tuning);
        // Right edge already at -1
        state.obstacles.clear();
        state.obstacles.push_back(Obstacle {
            x: -1.0 - tuning.obstacle_width,
            gap_top: 200.0,
            gap_bottom: 400.0,
            passed: true,
        });

        tick(&mut state, &tuning, &mut Centered);

        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].x, tuning.viewport_width);
    }

    #[test]
    fn test_partly_visible_obstacle_survives() {
        let tuning = Tuning::default();
        let mut state = running(&tuning);
        state.obstacles.clear();
        state.obstacles.push_back(Obstacle {
            x: -1.0,
            gap_top: 200.0,
            gap_bottom: 400.0,
            passed: true,
        });

        tick(&mut state, &tuning, &mut Centered);

        assert_eq!(state.obstacles[0].x, -4.0);
    }

    #[test]
    fn test_floor_ends_run() {
        let tuning = Tuning::default();
        let mut state = running(&tuning);
        state.actor.pos.y = tuning.viewport_height - 1.0;

        let hit = tick(&mut state, &tuning, &mut Centered);

        assert_eq!(hit, Some(Collision::Floor));
        assert_eq!(state.phase, GamePhase::Over);
        // Terminal frame keeps the crash position
        assert_eq!(state.actor.pos.y, tuning.viewport_height + 1.0);
        assert!(matches!(
            state.events.last(),
            Some(GameEvent::Crashed {
                cause: Collision::Floor,
                ..
            })
        ));
    }

    #[test]
    fn test_scores_once_per_obstacle() {
        let tuning = Tuning::default();
        let mut state = running(&tuning);
        state.obstacles.clear();
        state.obstacles.push_back(Obstacle {
            x: 0.0,
            gap_top: 200.0,
            gap_bottom: 400.0,
            passed: false,
        });

        tick(&mut state, &tuning, &mut Centered);
        assert!(state.obstacles[0].passed);
        assert_eq!(state.score, 1);
        assert_eq!(state.drain_events(), vec![GameEvent::Scored { score: 1 }]);

        tick(&mut state, &tuning, &mut Centered);
        assert_eq!(state.score, 1);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_spawn_waits_for_pitch() {
        let tuning = Tuning::default();
        let mut state = running(&tuning);

        // Tail must pass x < 100 before a second obstacle appears
        let mut ticks = 0;
        while state.obstacles.len() == 1 {
            state.actor.pos.y = 250.0;
            tick(&mut state, &tuning, &mut Centered);
            ticks += 1;
        }

        assert_eq!(ticks, 101);
        assert_eq!(state.obstacles[0].x, 97.0);
        assert_eq!(state.obstacles[1].x, 400.0);
    }

    #[test]
    fn test_obstacle_collision_ends_run() {
        let tuning = Tuning::default();
        let mut state = running(&tuning);
        state.obstacles.clear();
        state.obstacles.push_back(Obstacle {
            x: 120.0,
            gap_top: 400.0,
            gap_bottom: 600.0,
            passed: false,
        });

        let hit = tick(&mut state, &tuning, &mut Centered);

        assert_eq!(hit, Some(Collision::Obstacle { index: 0 }));
        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.obstacles[0].x, 117.0);
    }

    #[test]
    fn test_determinism() {
        let tuning = Tuning::default();
        let mut rng1 = Pcg32::seed_from_u64(99999);
        let mut rng2 = Pcg32::seed_from_u64(99999);
        let mut state1 = GameState::new(&tuning);
        let mut state2 = GameState::new(&tuning);
        state1.start(&tuning, &mut rng1);
        state2.start(&tuning, &mut rng2);

        for i in 0..400 {
            if i % 20 == 0 {
                state1.activate(&tuning);
                state2.activate(&tuning);
            }
            tick(&mut state1, &tuning, &mut rng1);
            tick(&mut state2, &tuning, &mut rng2);
        }

        assert_eq!(state1.snapshot(), state2.snapshot());
    }

    proptest! {
        #[test]
        fn score_never_outpaces_obstacles(
            seed in any::<u64>(),
            flaps in proptest::collection::vec(any::<bool>(), 1..600),
        ) {
            let tuning = Tuning::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut state = GameState::new(&tuning);
            state.start(&tuning, &mut rng);

            let mut spawned = 1u32;
            for flap in flaps {
                if flap {
                    state.activate(&tuning);
                }
                let before = state.score;
                let was_running = state.phase == GamePhase::Running;
                tick(&mut state, &tuning, &mut rng);
                // Survivors have all scrolled, so a tail at the right edge is new
                let tail_is_new = state
                    .obstacles
                    .back()
                    .is_some_and(|o| o.x == tuning.viewport_width);
                if was_running && tail_is_new {
                    spawned += 1;
                }
                prop_assert!(state.score >= before);
                prop_assert!(state.score <= spawned);
            }
        }

        #[test]
        fn queue_is_never_starved_or_stale(
            seed in any::<u64>(),
            flaps in proptest::collection::vec(any::<bool>(), 1..400),
        ) {
            let tuning = Tuning::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut state = GameState::new(&tuning);
            state.start(&tuning, &mut rng);

            for flap in flaps {
                if state.phase != GamePhase::Running {
                    break;
                }
                if flap {
                    state.activate(&tuning);
                }
                tick(&mut state, &tuning, &mut rng);

                let threshold = tuning.viewport_width - tuning.spawn_pitch - tuning.scroll_speed;
                prop_assert!(state.obstacles.iter().any(|o| o.x > threshold));
                prop_assert!(state.obstacles.iter().all(|o| o.right_edge(&tuning) >= 0.0));
            }
        }

        #[test]
        fn flaps_never_leave_the_top(
            start_y in 0.0f32..600.0,
            flaps in 1usize..20,
        ) {
            let tuning = Tuning::default();
            let mut state = GameState::new(&tuning);
            state.start(&tuning, &mut Centered);
            state.actor.pos.y = start_y;

            for _ in 0..flaps {
                state.activate(&tuning);
                prop_assert!(state.actor.pos.y >= 0.0);
            }
        }
    }
}
