//! Scene construction: game state to vertex list
//!
//! A pure function of a read-only state snapshot. Owns no GPU resources
//! and never feeds anything back into the simulation.

use crate::settings::Settings;
use crate::sim::GameState;

use super::shapes;
use super::vertex::{Vertex, colors};

/// Divider dash length, on and off runs alike
const DASH_LEN: f32 = 10.0;
const DIVIDER_WIDTH: f32 = 2.0;

/// Score glyph metrics: digit bottoms at y = 60, centered 80px to either
/// side of the divider
const SCORE_HEIGHT: f32 = 48.0;
const SCORE_BASELINE_Y: f32 = 60.0;
const SCORE_OFFSET_X: f32 = 80.0;

/// Build the vertex list for one frame.
pub fn build(state: &GameState, settings: &Settings) -> Vec<Vertex> {
    let divider_color = if settings.high_contrast {
        colors::DIVIDER_HIGH_CONTRAST
    } else {
        colors::DIVIDER
    };

    let mut vertices = Vec::with_capacity(256);

    vertices.extend(shapes::dashed_vline(
        state.field.width / 2.0,
        0.0,
        state.field.height,
        DIVIDER_WIDTH,
        DASH_LEN,
        divider_color,
    ));

    vertices.extend(shapes::rect(
        state.human.x,
        state.human.y,
        state.human.w,
        state.human.h,
        colors::PADDLE,
    ));
    vertices.extend(shapes::rect(
        state.opponent.x,
        state.opponent.y,
        state.opponent.w,
        state.opponent.h,
        colors::PADDLE,
    ));
    vertices.extend(shapes::rect(
        state.ball.pos.x,
        state.ball.pos.y,
        state.ball.w,
        state.ball.h,
        colors::BALL,
    ));

    vertices.extend(shapes::number(
        state.score.human,
        state.field.width / 2.0 - SCORE_OFFSET_X,
        SCORE_BASELINE_Y,
        SCORE_HEIGHT,
        colors::SCORE,
    ));
    vertices.extend(shapes::number(
        state.score.opponent,
        state.field.width / 2.0 + SCORE_OFFSET_X,
        SCORE_BASELINE_Y,
        SCORE_HEIGHT,
        colors::SCORE,
    ));

    vertices
}
