//! Shape generation for 2D primitives
//!
//! Everything the game draws is built from axis-aligned quads, including
//! the seven-segment score glyphs.

use super::vertex::Vertex;

/// Segment bitmasks for the digits 0-9. Bit order: 0=top, 1=upper-right,
/// 2=lower-right, 3=bottom, 4=lower-left, 5=upper-left, 6=middle.
const DIGIT_SEGMENTS: [u8; 10] = [
    0b0111111, // 0
    0b0000110, // 1
    0b1011011, // 2
    0b1001111, // 3
    0b1100110, // 4
    0b1101101, // 5
    0b1111101, // 6
    0b0000111, // 7
    0b1111111, // 8
    0b1101111, // 9
];

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    let (x1, y1) = (x + w, y + h);

    // Two triangles per quad
    vertices.push(Vertex::new(x, y, color));
    vertices.push(Vertex::new(x1, y, color));
    vertices.push(Vertex::new(x, y1, color));

    vertices.push(Vertex::new(x1, y, color));
    vertices.push(Vertex::new(x1, y1, color));
    vertices.push(Vertex::new(x, y1, color));

    vertices
}

/// Generate vertices for a vertical dashed line centered on `x`, with
/// equal-length on and off runs of `dash_len`.
pub fn dashed_vline(
    x: f32,
    top: f32,
    bottom: f32,
    width: f32,
    dash_len: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let mut y = top;
    while y < bottom {
        let end = (y + dash_len).min(bottom);
        vertices.extend(rect(x - width / 2.0, y, width, end - y, color));
        y += dash_len * 2.0;
    }
    vertices
}

/// Generate vertices for one seven-segment digit with its top-left corner
/// at (x, y). Glyph width is half the height; segments overlap at corners.
pub fn digit(d: u32, x: f32, y: f32, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    let w = height * 0.5;
    let t = height * 0.15;
    let half = height / 2.0;
    let segs = DIGIT_SEGMENTS[(d % 10) as usize];

    let mut vertices = Vec::new();
    if segs & 0b0000001 != 0 {
        vertices.extend(rect(x, y, w, t, color));
    }
    if segs & 0b0000010 != 0 {
        vertices.extend(rect(x + w - t, y, t, half, color));
    }
    if segs & 0b0000100 != 0 {
        vertices.extend(rect(x + w - t, y + half, t, half, color));
    }
    if segs & 0b0001000 != 0 {
        vertices.extend(rect(x, y + height - t, w, t, color));
    }
    if segs & 0b0010000 != 0 {
        vertices.extend(rect(x, y + half, t, half, color));
    }
    if segs & 0b0100000 != 0 {
        vertices.extend(rect(x, y, t, half, color));
    }
    if segs & 0b1000000 != 0 {
        vertices.extend(rect(x, y + half - t / 2.0, w, t, color));
    }
    vertices
}

/// Generate vertices for a whole number, its digit row centered on
/// `center_x` with glyph bottoms sitting on `baseline_y`.
pub fn number(
    value: u32,
    center_x: f32,
    baseline_y: f32,
    height: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let mut digits = Vec::new();
    let mut v = value;
    loop {
        digits.push(v % 10);
        v /= 10;
        if v == 0 {
            break;
        }
    }
    digits.reverse();

    let w = height * 0.5;
    let gap = height * 0.15;
    let total = digits.len() as f32 * w + (digits.len() - 1) as f32 * gap;

    let mut vertices = Vec::new();
    let mut x = center_x - total / 2.0;
    let y = baseline_y - height;
    for d in digits {
        vertices.extend(digit(d, x, y, height, color));
        x += w + gap;
    }
    vertices
}
