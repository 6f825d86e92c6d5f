//! Per-frame simulation tick
//!
//! Core game loop step: integrate, collide, apply the outcome.

use super::collision::{CollisionOutcome, evaluate};
use super::state::{GameEvent, Session, TickResult};
use super::tilt::Tilt;
use crate::elapsed_at_least;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Table tilt, already clamped by `Tilt`
    pub tilt: Tilt,
    /// Put the mover back on spawn (keeps score)
    pub reset: bool,
    /// Start a fresh game (clears score)
    pub new_game: bool,
}

/// Advance the session by one frame of `dt` seconds
pub fn tick(session: &mut Session, input: &TickInput, dt: f64) -> TickResult {
    session.now += dt;
    session.time_ticks += 1;
    let mut events = Vec::new();

    if input.new_game {
        session.new_game();
        log::info!("New game started");
    }

    // Frozen until a new game is requested
    if session.game_over {
        return session.snapshot(events);
    }

    if input.reset {
        session.reset_mover();
    }

    let now = session.now;
    let physics = session.config.physics;
    let cooling = session.mover.is_cooling_down(now, physics.cooldown_secs);

    session
        .mover
        .integrate(input.tilt, now, &physics, session.config.field);

    // Wall and hole contacts only count while the mover is live
    if !cooling {
        match evaluate(&session.mover, &session.maze) {
            CollisionOutcome::WallHit(i) => {
                session.mover.penalize();
                events.push(GameEvent::Collision);
                log::debug!("Wall {} hit, score now {}", i, session.mover.score);
            }
            CollisionOutcome::HoleHit(i) => {
                session.mover.score_at(now, session.spawn);
                events.push(GameEvent::Score);
                log::debug!("Hole {} scored, score now {}", i, session.mover.score);
            }
            CollisionOutcome::None => {}
        }
    }

    if let Some(limit) = session.config.time_limit
        && elapsed_at_least(now, session.started_at, limit)
    {
        session.game_over = true;
        events.push(GameEvent::GameOver);
        log::info!("Game over with score {}", session.mover.score);
    }

    if session.config.trace_ticks {
        log::trace!(
            "tick {} t={:.3} pos=({:.2}, {:.2}) vel=({:.3}, {:.3}) phase={:?}",
            session.time_ticks,
            now,
            session.mover.pos.x,
            session.mover.pos.y,
            session.mover.vel.x,
            session.mover.vel.y,
            session.phase()
        );
    }

    session.snapshot(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::maze::{Hole, Maze, Wall};
    use crate::sim::state::{GamePhase, SessionConfig};
    use glam::Vec2;
    use proptest::prelude::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).abs().max_element() < 1e-4
    }

    /// Session whose mover sits on the first classic hole
    fn session_on_hole() -> Session {
        let mut session = Session::new(Maze::classic(), SPAWN);
        session.mover.pos = Vec2::new(150.0, 200.0);
        session
    }

    #[test]
    fn test_first_tick_scenario() {
        let mut session = Session::new(Maze::classic(), SPAWN);
        let result = session.tick(Tilt::new(1.0, 1.0), SIM_DT);

        assert!(approx(result.mover_position, Vec2::new(400.5, 300.5)));
        assert!(approx(session.mover().vel, Vec2::new(0.475, 0.475)));
        assert_eq!(result.mover_size, Vec2::new(MOVER_WIDTH, MOVER_HEIGHT));
        assert_eq!(result.phase, GamePhase::Active);
        assert!(result.events.is_empty());
    }

    #[test]
    fn test_hole_hit_scores_and_respawns() {
        let mut session = Session::new(Maze::classic(), SPAWN);
        // Fast approach from the left lands on the hole center
        session.mover.pos = Vec2::new(130.0, 200.0);
        session.mover.vel = Vec2::new(20.0, 0.0);

        let result = session.tick(Tilt::ZERO, SIM_DT);
        assert_eq!(result.events, vec![GameEvent::Score]);
        assert_eq!(result.score, 1);
        assert_eq!(result.mover_position, SPAWN);
        assert_eq!(session.mover().vel, Vec2::ZERO);
        assert_eq!(result.phase, GamePhase::Cooldown);
    }

    #[test]
    fn test_cooldown_boundary_just_before() {
        let mut session = session_on_hole();
        session.tick(Tilt::ZERO, 0.5);
        assert_eq!(session.score(), 1);

        let result = session.tick(Tilt::new(1.0, 0.0), 2.999);
        assert_eq!(result.mover_position, SPAWN);
        assert_eq!(result.phase, GamePhase::Cooldown);
        assert_eq!(session.mover().vel, Vec2::ZERO);
    }

    #[test]
    fn test_cooldown_boundary_exact() {
        let mut session = session_on_hole();
        session.tick(Tilt::ZERO, 0.5);

        let result = session.tick(Tilt::new(1.0, 0.0), 3.0);
        assert!(approx(result.mover_position, Vec2::new(400.5, 300.0)));
        assert_eq!(result.phase, GamePhase::Active);
    }

    #[test]
    fn test_cooldown_half_second_steps() {
        let mut session = session_on_hole();
        session.tick(Tilt::ZERO, 0.5);

        for _ in 0..5 {
            let result = session.tick(Tilt::new(-1.0, -1.0), 0.5);
            assert_eq!(result.mover_position, SPAWN);
            assert!(result.events.is_empty());
        }
        // Sixth step lands exactly three seconds after the score
        let result = session.tick(Tilt::new(-1.0, -1.0), 0.5);
        assert!(approx(result.mover_position, Vec2::new(399.5, 299.5)));
    }

    #[test]
    fn test_wall_hit_penalizes_without_moving() {
        let mut session = Session::new(Maze::classic(), SPAWN);
        session.mover.pos = Vec2::new(45.0, 45.0);
        session.mover.score = 2;

        let result = session.tick(Tilt::ZERO, SIM_DT);
        assert_eq!(result.events, vec![GameEvent::Collision]);
        assert_eq!(result.score, 1);
        // No positional correction
        assert_eq!(result.mover_position, Vec2::new(45.0, 45.0));
        assert_eq!(result.phase, GamePhase::Active);

        session.tick(Tilt::ZERO, SIM_DT);
        let result = session.tick(Tilt::ZERO, SIM_DT);
        assert_eq!(result.score, 0);
        assert_eq!(result.events, vec![GameEvent::Collision]);
    }

    #[test]
    fn test_spawn_inside_wall_not_penalized_during_cooldown() {
        let maze = Maze::new(
            vec![Wall::new(390.0, 290.0, 30.0, 30.0)],
            vec![Hole::new(100.0, 100.0, 15.0)],
        );
        let mut session = Session::new(maze, SPAWN);
        session.mover.pos = Vec2::new(100.0, 100.0);

        let result = session.tick(Tilt::ZERO, 0.5);
        assert_eq!(result.events, vec![GameEvent::Score]);

        let result = session.tick(Tilt::ZERO, 0.5);
        assert!(result.events.is_empty());
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_time_limit_ends_game() {
        let config = SessionConfig {
            time_limit: Some(1.0),
            ..Default::default()
        };
        let mut session = Session::with_config(Maze::classic(), SPAWN, config);

        assert!(session.tick(Tilt::ZERO, 0.5).events.is_empty());
        let result = session.tick(Tilt::ZERO, 0.5);
        assert_eq!(result.events, vec![GameEvent::GameOver]);
        assert_eq!(result.phase, GamePhase::GameOver);

        // Ignored until a new game
        let result = session.tick(Tilt::new(1.0, 1.0), 0.5);
        assert!(result.events.is_empty());
        assert_eq!(result.mover_position, SPAWN);

        let input = TickInput {
            tilt: Tilt::new(1.0, 1.0),
            new_game: true,
            ..Default::default()
        };
        let result = tick(&mut session, &input, 0.5);
        assert_eq!(result.phase, GamePhase::Active);
        assert!(approx(result.mover_position, Vec2::new(400.5, 300.5)));
        assert_eq!(session.time_remaining(), Some(1.0));
    }

    #[test]
    fn test_reset_input() {
        let mut session = Session::new(Maze::classic(), SPAWN);
        session.mover.pos = Vec2::new(600.0, 500.0);
        session.mover.vel = Vec2::new(3.0, 3.0);
        session.mover.score = 2;

        let input = TickInput {
            reset: true,
            ..Default::default()
        };
        let result = tick(&mut session, &input, SIM_DT);
        assert_eq!(result.mover_position, SPAWN);
        assert_eq!(result.score, 2);
    }

    #[test]
    fn test_determinism() {
        let mut session1 = Session::new(Maze::classic(), SPAWN);
        let mut session2 = Session::new(Maze::classic(), SPAWN);

        let tilts = [
            Tilt::new(-1.0, -0.4),
            Tilt::new(-0.8, -0.2),
            Tilt::new(0.3, 1.0),
            Tilt::ZERO,
        ];

        for _ in 0..120 {
            for tilt in tilts {
                let a = session1.tick(tilt, SIM_DT);
                let b = session2.tick(tilt, SIM_DT);
                assert_eq!(a, b);
            }
        }
        assert_eq!(session1.time_ticks(), session2.time_ticks());
    }

    #[test]
    fn test_cooldown_lasts_exactly_180_frames() {
        // Score after varying amounts of play so the clock carries rounding
        for idle in [0, 1, 6, 59, 100, 1000, 4999] {
            let mut session = Session::new(Maze::classic(), SPAWN);
            for _ in 0..idle {
                session.tick(Tilt::ZERO, SIM_DT);
            }
            session.mover.pos = Vec2::new(150.0, 200.0);
            let result = session.tick(Tilt::ZERO, SIM_DT);
            assert_eq!(result.events, vec![GameEvent::Score]);

            for frame in 1..180 {
                let result = session.tick(Tilt::new(1.0, 0.0), SIM_DT);
                assert_eq!(result.mover_position, SPAWN, "idle {} frame {}", idle, frame);
                assert_eq!(result.phase, GamePhase::Cooldown);
            }
            let result = session.tick(Tilt::new(1.0, 0.0), SIM_DT);
            assert!(
                approx(result.mover_position, Vec2::new(400.5, 300.0)),
                "idle {} did not resume on frame 180",
                idle
            );
        }
    }

    #[test]
    fn test_time_limit_at_frame_rate() {
        let config = SessionConfig {
            time_limit: Some(60.0),
            ..Default::default()
        };
        let mut session = Session::with_config(Maze::classic(), SPAWN, config);

        for _ in 1..3600 {
            assert!(session.tick(Tilt::ZERO, SIM_DT).events.is_empty());
        }
        let result = session.tick(Tilt::ZERO, SIM_DT);
        assert_eq!(result.events, vec![GameEvent::GameOver]);
        assert_eq!(session.time_ticks(), 3600);
    }

    fn wall_strategy() -> impl Strategy<Value = Wall> {
        (0.0f32..780.0, 0.0f32..580.0, 5.0f32..150.0, 5.0f32..150.0)
            .prop_map(|(x, y, w, h)| Wall::new(x, y, w, h))
    }

    fn hole_strategy() -> impl Strategy<Value = Hole> {
        (0.0f32..800.0, 0.0f32..600.0, 5.0f32..40.0).prop_map(|(x, y, r)| Hole::new(x, y, r))
    }

    fn tilt_strategy() -> impl Strategy<Value = Tilt> {
        (-1.0f32..1.0, -1.0f32..1.0).prop_map(|(x, y)| Tilt::new(x, y))
    }

    proptest! {
        #[test]
        fn prop_score_follows_events_and_mover_stays_in_field(
            walls in prop::collection::vec(wall_strategy(), 0..8),
            holes in prop::collection::vec(hole_strategy(), 0..6),
            tilts in prop::collection::vec(tilt_strategy(), 1..400),
        ) {
            let mut session = Session::new(Maze::new(walls, holes), SPAWN);
            let mut expected: u32 = 0;

            for tilt in tilts {
                let result = session.tick(tilt, SIM_DT);
                for event in &result.events {
                    match event {
                        GameEvent::Collision => expected = expected.saturating_sub(1),
                        GameEvent::Score => expected += 1,
                        GameEvent::GameOver => {}
                    }
                }
                prop_assert!(result.events.len() <= 1);
                prop_assert_eq!(result.score, expected);

                let pos = result.mover_position;
                prop_assert!(pos.x >= 0.0 && pos.x + MOVER_WIDTH <= FIELD_WIDTH);
                prop_assert!(pos.y >= 0.0 && pos.y + MOVER_HEIGHT <= FIELD_HEIGHT);
            }
        }

        #[test]
        fn prop_cooldown_freezes_mover(
            tilts in prop::collection::vec(tilt_strategy(), 1..170),
        ) {
            let mut session = session_on_hole();
            session.tick(Tilt::ZERO, SIM_DT);
            prop_assert_eq!(session.phase(), GamePhase::Cooldown);

            // 170 frames at 60 Hz stays under the three second window
            for tilt in tilts {
                let result = session.tick(tilt, SIM_DT);
                prop_assert_eq!(result.mover_position, SPAWN);
                prop_assert_eq!(session.mover().vel, Vec2::ZERO);
                prop_assert!(result.events.is_empty());
            }
        }
    }
}
