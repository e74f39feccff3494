//! Ortho Pong - a classic two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collision, scoring)
//! - `renderer`: WebGPU quad rendering
//! - `settings`: Display preferences persisted in LocalStorage

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{GameState, TickInput};

/// Game configuration constants
pub mod consts {
    /// Playfield width in pixels
    pub const FIELD_WIDTH: f32 = 800.0;
    /// Playfield height in pixels
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Paddle size, shared by both sides
    pub const PADDLE_WIDTH: f32 = 16.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between a paddle and its goal edge
    pub const PADDLE_MARGIN: f32 = 24.0;
    /// Opponent tracking speed in pixels per tick
    pub const PADDLE_SPEED: f32 = 6.0;

    /// Ball edge length (the ball is square)
    pub const BALL_SIZE: f32 = 18.0;
    /// Horizontal serve speed in pixels per tick
    pub const BALL_SPEED: f32 = 6.0;

    /// Vertical kick per pixel of offset between ball and paddle centers
    pub const SPIN_FACTOR: f32 = 0.15;

    /// Vertical velocity spread on a post-score serve
    pub const SERVE_SPREAD: f32 = 1.5;
    /// Wider spread for the opening kickoff
    pub const KICKOFF_SPREAD: f32 = 2.0;
}
