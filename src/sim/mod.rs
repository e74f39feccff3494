//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame, velocities in pixels per tick
//! - Seeded RNG only, advanced only by serves
//! - No rendering or platform dependencies

pub mod opponent;
pub mod rect;
pub mod state;
pub mod tick;

pub use rect::Rect;
pub use state::{Ball, GameState, Paddle, Playfield, Score, Side};
pub use tick::{TickInput, tick};
