//! Reactive opponent controller
//!
//! Rate-limited ball tracking: the paddle chases the ball's center at a
//! fixed speed per tick and never snaps to it, so a fast vertical ball
//! can outrun it.

use super::state::{Ball, Paddle, Playfield};

/// Move `paddle` one tick toward the `y` that would center it on the ball.
/// Steps by at most `speed` and never past the target, then clamps into
/// the field. The clamp runs even on ticks where the paddle does not move.
pub fn track_ball(paddle: &mut Paddle, ball: &Ball, speed: f32, field: &Playfield) {
    let target = ball.center_y() - paddle.h / 2.0;
    if paddle.y < target {
        paddle.y = (paddle.y + speed).min(target);
    } else if paddle.y > target {
        paddle.y = (paddle.y - speed).max(target);
    }
    paddle.clamp_y(field);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BALL_SIZE, PADDLE_SPEED};
    use glam::Vec2;

    /// Build a ball positioned so the tracking target comes out to `target`.
    fn ball_with_target(target: f32, paddle: &Paddle) -> Ball {
        Ball {
            pos: Vec2::new(400.0, target + paddle.h / 2.0 - BALL_SIZE / 2.0),
            vel: Vec2::ZERO,
            w: BALL_SIZE,
            h: BALL_SIZE,
        }
    }

    #[test]
    fn test_steps_toward_target_by_speed() {
        let field = Playfield::default();
        let mut paddle = Paddle::new(760.0, &field);
        paddle.y = 100.0;
        let ball = ball_with_target(250.0, &paddle);

        track_ball(&mut paddle, &ball, PADDLE_SPEED, &field);
        assert!((paddle.y - 106.0).abs() < 0.001);
    }

    #[test]
    fn test_steps_down_toward_lower_target() {
        let field = Playfield::default();
        let mut paddle = Paddle::new(760.0, &field);
        paddle.y = 300.0;
        let ball = ball_with_target(250.0, &paddle);

        track_ball(&mut paddle, &ball, PADDLE_SPEED, &field);
        assert!((paddle.y - 294.0).abs() < 0.001);
    }

    #[test]
    fn test_settles_exactly_on_target_without_oscillating() {
        let field = Playfield::default();
        let mut paddle = Paddle::new(760.0, &field);
        paddle.y = 100.0;
        let ball = ball_with_target(250.0, &paddle);

        for _ in 0..40 {
            track_ball(&mut paddle, &ball, PADDLE_SPEED, &field);
        }
        assert_eq!(paddle.y, 250.0);

        track_ball(&mut paddle, &ball, PADDLE_SPEED, &field);
        assert_eq!(paddle.y, 250.0);
    }

    #[test]
    fn test_clamps_when_target_is_outside_field() {
        let field = Playfield::default();
        let mut paddle = Paddle::new(760.0, &field);
        paddle.y = 398.0;
        let ball = ball_with_target(450.0, &paddle);

        track_ball(&mut paddle, &ball, PADDLE_SPEED, &field);
        assert_eq!(paddle.y, 400.0);
    }

    #[test]
    fn test_clamp_applies_even_without_movement() {
        let field = Playfield::default();
        let mut paddle = Paddle::new(760.0, &field);
        paddle.y = 420.0;
        let ball = ball_with_target(420.0, &paddle);

        track_ball(&mut paddle, &ball, PADDLE_SPEED, &field);
        assert_eq!(paddle.y, 400.0);
    }
}
