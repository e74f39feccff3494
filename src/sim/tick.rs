//! Per-tick physics and scoring step

use super::opponent;
use super::state::{GameState, Side};
use crate::consts::*;

/// Input observed by a single tick. The input adapter overwrites
/// `target_y` whenever the pointer moves, so the latest position wins
/// no matter how many events arrived between frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Desired center y for the human paddle, in playfield coordinates
    pub target_y: Option<f32>,
}

/// Advance the simulation by one tick.
///
/// Phase order is fixed; later phases assume earlier ones already resolved
/// positions:
/// 1. apply human input
/// 2. integrate ball motion
/// 3. top and bottom wall bounces
/// 4. human then opponent paddle collision (reposition, reflect, spin)
/// 5. scoring and serve
/// 6. opponent tracking
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.ticks += 1;

    if let Some(target) = input.target_y {
        state.human.set_center_y(target, &state.field);
    }

    state.ball.pos += state.ball.vel;

    // Walls. Both checks run: a ball taller than the field would touch both.
    if state.ball.pos.y <= 0.0 {
        state.ball.pos.y = 0.0;
        state.ball.vel.y = -state.ball.vel.y;
    }
    if state.ball.pos.y + state.ball.h >= state.field.height {
        state.ball.pos.y = state.field.height - state.ball.h;
        state.ball.vel.y = -state.ball.vel.y;
    }

    // Paddles. Repositioning flush against the struck face removes the
    // overlap, so each collision reflects at most once per tick. The spin
    // term scales with how far off-center the strike was and is uncapped.
    if state.ball.rect().overlaps(&state.human.rect()) {
        state.ball.pos.x = state.human.x + state.human.w;
        state.ball.vel.x = -state.ball.vel.x;
        state.ball.vel.y += (state.ball.center_y() - state.human.center_y()) * SPIN_FACTOR;
    }
    if state.ball.rect().overlaps(&state.opponent.rect()) {
        state.ball.pos.x = state.opponent.x - state.ball.w;
        state.ball.vel.x = -state.ball.vel.x;
        state.ball.vel.y += (state.ball.center_y() - state.opponent.center_y()) * SPIN_FACTOR;
    }

    // Scoring. The exits are mutually exclusive within a tick; the scorer
    // receives the serve.
    if state.ball.pos.x < 0.0 {
        state.score.opponent += 1;
        state.serve(Side::Opponent);
    } else if state.ball.pos.x + state.ball.w > state.field.width {
        state.score.human += 1;
        state.serve(Side::Human);
    }

    // Opponent chases whatever ball is now in play, fresh serve included
    opponent::track_ball(&mut state.opponent, &state.ball, PADDLE_SPEED, &state.field);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_straight_line_motion() {
        let mut state = GameState::new(12345);
        state.ball.pos = Vec2::new(300.0, 200.0);
        state.ball.vel = Vec2::new(3.0, -2.0);

        for t in 1..=10 {
            tick(&mut state, &TickInput::default());
            assert!((state.ball.pos.x - (300.0 + 3.0 * t as f32)).abs() < 0.001);
            assert!((state.ball.pos.y - (200.0 - 2.0 * t as f32)).abs() < 0.001);
        }
        assert_eq!(state.ticks, 10);
    }

    #[test]
    fn test_top_wall_bounce() {
        let mut state = GameState::new(1);
        state.ball.pos = Vec2::new(400.0, 1.0);
        state.ball.vel = Vec2::new(0.0, -4.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.pos.y, 0.0);
        assert_eq!(state.ball.vel.y, 4.0);
    }

    #[test]
    fn test_bottom_wall_bounce() {
        let mut state = GameState::new(1);
        state.ball.pos = Vec2::new(400.0, 480.0);
        state.ball.vel = Vec2::new(0.0, 5.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.pos.y, 482.0);
        assert_eq!(state.ball.vel.y, -5.0);
    }

    #[test]
    fn test_human_paddle_bounce_repositions_and_reflects() {
        let mut state = GameState::new(1);
        state.human.y = 200.0;
        // Arrives overlapping the paddle face, struck dead center
        state.ball.pos = Vec2::new(44.0, 241.0);
        state.ball.vel = Vec2::new(-6.0, 0.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.ball.pos.x, 40.0);
        assert_eq!(state.ball.vel.x, 6.0);
        assert_eq!(state.ball.vel.y, 0.0);
        assert!(!state.ball.rect().overlaps(&state.human.rect()));
    }

    #[test]
    fn test_spin_follows_strike_offset() {
        let mut state = GameState::new(1);
        state.human.y = 200.0;
        // Ball center lands 30px above the paddle center
        state.ball.pos = Vec2::new(44.0, 211.0);
        state.ball.vel = Vec2::new(-6.0, 0.0);

        tick(&mut state, &TickInput::default());

        assert!((state.ball.vel.y - (-30.0 * SPIN_FACTOR)).abs() < 0.001);
        assert!(state.ball.vel.y < 0.0);
    }

    #[test]
    fn test_opponent_paddle_bounce() {
        let mut state = GameState::new(1);
        state.opponent.y = 200.0;
        state.ball.pos = Vec2::new(750.0, 241.0);
        state.ball.vel = Vec2::new(6.0, 0.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.ball.pos.x, 742.0);
        assert_eq!(state.ball.vel.x, -6.0);
        assert!(!state.ball.rect().overlaps(&state.opponent.rect()));
    }

    #[test]
    fn test_left_exit_scores_for_opponent_and_serves() {
        let mut state = GameState::new(12345);
        state.ball.pos = Vec2::new(5.0, 241.0);
        state.ball.vel = Vec2::new(-6.0, 0.0);
        // Park the human paddle away from the exit path
        state.human.y = 0.0;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score.opponent, 1);
        assert_eq!(state.score.human, 0);
        assert!((state.ball.pos.x - 391.0).abs() < 0.001);
        assert!((state.ball.pos.y - 241.0).abs() < 0.001);
        assert!((state.ball.vel.x - BALL_SPEED).abs() < 0.001);
        assert!(state.ball.vel.y.abs() <= BALL_SPEED * 0.75);
    }

    #[test]
    fn test_right_exit_scores_for_human() {
        let mut state = GameState::new(12345);
        state.ball.pos = Vec2::new(779.0, 100.0);
        state.ball.vel = Vec2::new(6.0, 0.0);
        state.opponent.y = 400.0;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score.human, 1);
        assert_eq!(state.score.opponent, 0);
        assert!((state.ball.vel.x + BALL_SPEED).abs() < 0.001);
    }

    #[test]
    fn test_input_moves_human_paddle() {
        let mut state = GameState::new(5);

        let input = TickInput {
            target_y: Some(120.0),
        };
        tick(&mut state, &input);
        assert!((state.human.y - 70.0).abs() < 0.001);

        let input = TickInput {
            target_y: Some(f32::NAN),
        };
        tick(&mut state, &input);
        assert!((state.human.y - 70.0).abs() < 0.001);
    }

    #[test]
    fn test_opponent_moves_within_the_same_tick() {
        let mut state = GameState::new(5);
        state.opponent.y = 100.0;
        state.ball.pos = Vec2::new(400.0, 291.0);
        state.ball.vel = Vec2::ZERO;

        tick(&mut state, &TickInput::default());
        assert!((state.opponent.y - 106.0).abs() < 0.001);
    }

    #[test]
    fn test_paddles_stay_in_bounds_over_long_rally() {
        let mut state = GameState::new(42);
        for i in 0..2000 {
            let wave = 250.0 + (i as f32 * 0.05).sin() * 400.0;
            let input = TickInput {
                target_y: Some(wave),
            };
            tick(&mut state, &input);
            assert!(state.human.y >= 0.0 && state.human.y <= 400.0);
            assert!(state.opponent.y >= 0.0 && state.opponent.y <= 400.0);
        }
    }

    #[test]
    fn test_determinism_same_seed_same_rally() {
        let mut a = GameState::new(99999);
        let mut b = GameState::new(99999);

        for i in 0..600 {
            let input = TickInput {
                target_y: Some(100.0 + (i % 300) as f32),
            };
            tick(&mut a, &input);
            tick(&mut b, &input);
        }

        assert_eq!(a.ticks, b.ticks);
        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.ball.vel, b.ball.vel);
        assert_eq!(a.score, b.score);
    }
}
