//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;

/// Which side of the field a paddle defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left paddle, pointer controlled
    Human,
    /// Right paddle, tracking controller
    Opponent,
}

impl Side {
    /// Horizontal sign of travel toward this side
    pub fn sign(self) -> f32 {
        match self {
            Side::Human => -1.0,
            Side::Opponent => 1.0,
        }
    }
}

/// Fixed simulation bounds, set once at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }
}

/// A paddle. `x` is fixed at construction; only `y` ever changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Paddle {
    /// Create a paddle at column `x`, vertically centered in the field.
    pub fn new(x: f32, field: &Playfield) -> Self {
        Self {
            x,
            y: (field.height - PADDLE_HEIGHT) / 2.0,
            w: PADDLE_WIDTH,
            h: PADDLE_HEIGHT,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    /// Clamp `y` so the paddle stays fully inside the field. Idempotent.
    pub fn clamp_y(&mut self, field: &Playfield) {
        self.y = self.y.clamp(0.0, field.height - self.h);
    }

    /// Center the paddle on `center_y`, then clamp. Non-finite targets are
    /// dropped before they touch state: a NaN here would make every later
    /// clamp comparison fall through.
    pub fn set_center_y(&mut self, center_y: f32, field: &Playfield) {
        if !center_y.is_finite() {
            return;
        }
        self.y = center_y - self.h / 2.0;
        self.clamp_y(field);
    }
}

/// The ball. Velocity is in pixels per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub w: f32,
    pub h: f32,
}

impl Ball {
    pub fn rect(&self) -> Rect {
        Rect::from_pos(self.pos, self.w, self.h)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.h / 2.0
    }
}

/// Points per side. Only ever incremented; a fresh game starts at 0-0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub human: u32,
    pub opponent: u32,
}

/// Complete simulation state. One instance owns every entity; the tick
/// function mutates it in place.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed, kept for logging and replay
    pub seed: u64,
    pub field: Playfield,
    pub human: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Tick counter since game start
    pub ticks: u64,
    /// Serve randomness, advanced only when a ball is launched
    rng: Pcg32,
}

impl GameState {
    /// Create a state with both paddles centered and the ball kicked off
    /// in a random direction.
    pub fn new(seed: u64) -> Self {
        Self::with_field(seed, Playfield::default())
    }

    /// As `new`, with explicit field dimensions.
    pub fn with_field(seed: u64, field: Playfield) -> Self {
        let human = Paddle::new(PADDLE_MARGIN, &field);
        let opponent = Paddle::new(field.width - PADDLE_MARGIN - PADDLE_WIDTH, &field);
        let mut state = Self {
            seed,
            field,
            human,
            opponent,
            ball: Ball {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
                w: BALL_SIZE,
                h: BALL_SIZE,
            },
            score: Score::default(),
            ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.kickoff();
        state
    }

    /// Launch the opening ball: centered, random direction, wide spread.
    fn kickoff(&mut self) {
        let toward = if self.rng.random::<bool>() {
            Side::Opponent
        } else {
            Side::Human
        };
        self.launch_ball(toward, KICKOFF_SPREAD);
    }

    /// Relaunch after a point: the scorer receives, with a narrower spread.
    pub fn serve(&mut self, toward: Side) {
        self.launch_ball(toward, SERVE_SPREAD);
    }

    fn launch_ball(&mut self, toward: Side, spread: f32) {
        self.ball.pos = Vec2::new(
            (self.field.width - self.ball.w) / 2.0,
            (self.field.height - self.ball.h) / 2.0,
        );
        self.ball.vel = Vec2::new(
            BALL_SPEED * toward.sign(),
            BALL_SPEED * (self.rng.random::<f32>() - 0.5) * spread,
        );
    }
}
