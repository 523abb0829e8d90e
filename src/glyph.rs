//! Hand angles that spell the digits 0-9 on a 4×6 block of clocks.
//!
//! Each entry lines up with [`digit_cells`](crate::topology::digit_cells):
//! position `i` holds the two hand angles, in degrees, for the `i`-th clock
//! of the block in row-major order. Clocks that are not part of a digit point
//! both hands at [`BLANK_ANGLE`].

use crate::error::{ClockError, Result};
use crate::topology::CLOCKS_PER_DIGIT;

/// Target angles of a clock's two hands.
pub type HandPair = [f64; 2];

/// Angle of both hands on an unlit clock.
pub const BLANK_ANGLE: f64 = -225.0;

const B: HandPair = [BLANK_ANGLE, BLANK_ANGLE];

/// Colon hand angles, aligned with [`COLON_CELLS`](crate::topology::COLON_CELLS).
#[rustfmt::skip]
pub const COLON_ANGLES: [HandPair; 8] = [
    [0.0, -270.0], [-180.0, -270.0], [0.0, -90.0], [-90.0, -180.0],
    [0.0, -270.0], [-180.0, -270.0], [0.0, -90.0], [-90.0, -180.0],
];

type Glyph = [HandPair; CLOCKS_PER_DIGIT];

#[rustfmt::skip]
static GLYPHS: [Glyph; 10] = [
    // 0
    [
        [0.0, -270.0], [0.0, -180.0], [0.0, -180.0], [-180.0, -270.0],
        [-90.0, -270.0], [0.0, -270.0], [-180.0, -270.0], [-90.0, -270.0],
        [-90.0, -270.0], [-90.0, -270.0], [-90.0, -270.0], [-90.0, -270.0],
        [-90.0, -270.0], [-90.0, -270.0], [-90.0, -270.0], [-90.0, -270.0],
        [-90.0, -270.0], [0.0, -90.0], [-90.0, -180.0], [-90.0, -270.0],
        [0.0, -90.0], [0.0, -180.0], [0.0, -180.0], [-90.0, -180.0],
    ],
    // 1
    [
        [0.0, -270.0], [0.0, -180.0], [-180.0, -270.0], B,
        [0.0, -90.0], [-180.0, -270.0], [-90.0, -270.0], B,
        B, [-90.0, -270.0], [-90.0, -270.0], B,
        B, [-90.0, -270.0], [-90.0, -270.0], B,
        [0.0, -270.0], [-90.0, -180.0], [0.0, -90.0], [-180.0, -270.0],
        [0.0, -90.0], [0.0, -180.0], [0.0, -180.0], [-90.0, -180.0],
    ],
    // 2
    [
        [0.0, -270.0], [0.0, -180.0], [0.0, -180.0], [-180.0, -270.0],
        [0.0, -90.0], [0.0, -180.0], [-180.0, -270.0], [-90.0, -270.0],
        [0.0, -270.0], [0.0, -180.0], [-90.0, -180.0], [-90.0, -270.0],
        [-90.0, -270.0], [0.0, -270.0], [0.0, -180.0], [-90.0, -180.0],
        [-90.0, -270.0], [0.0, -90.0], [0.0, -180.0], [-180.0, -270.0],
        [0.0, -90.0], [0.0, -180.0], [0.0, -180.0], [-90.0, -180.0],
    ],
    // 3
    [
        [0.0, -270.0], [0.0, -180.0], [0.0, -180.0], [-180.0, -270.0],
        [0.0, -90.0], [0.0, -180.0], [-180.0, -270.0], [-90.0, -270.0],
        [0.0, -270.0], [0.0, -180.0], [-90.0, -180.0], [-90.0, -270.0],
        [0.0, -90.0], [0.0, -180.0], [-180.0, -270.0], [-90.0, -270.0],
        [0.0, -270.0], [0.0, -180.0], [-90.0, -180.0], [-90.0, -270.0],
        [0.0, -90.0], [0.0, -180.0], [0.0, -180.0], [-90.0, -180.0],
    ],
    // 4
    [
        [0.0, -270.0], [-180.0, -270.0], [0.0, -270.0], [-180.0, -270.0],
        [-90.0, -270.0], [-90.0, -270.0], [-90.0, -270.0], [-90.0, -270.0],
        [-90.0, -270.0], [0.0, -90.0], [-90.0, -180.0], [-90.0, -270.0],
        [0.0, -90.0], [0.0, -180.0], [-180.0, -270.0], [-90.0, -270.0],
        B, B, [-90.0, -270.0], [-90.0, -270.0],
        B, B, [0.0, -90.0], [-90.0, -180.0],
    ],
    // 5
    [
        [0.0, -270.0], [0.0, -180.0], [0.0, -180.0], [-180.0, -270.0],
        [-90.0, -270.0], [0.0, -270.0], [0.0, -180.0], [-90.0, -180.0],
        [-90.0, -270.0], [0.0, -90.0], [0.0, -180.0], [-180.0, -270.0],
        [0.0, -90.0], [0.0, -180.0], [-180.0, -270.0], [-90.0, -270.0],
        [0.0, -270.0], [0.0, -180.0], [-90.0, -180.0], [-90.0, -270.0],
        [0.0, -90.0], [0.0, -180.0], [0.0, -180.0], [-90.0, -180.0],
    ],
    // 6
    [
        [0.0, -270.0], [0.0, -180.0], [0.0, -180.0], [-180.0, -270.0],
        [-90.0, -270.0], [0.0, -270.0], [0.0, -180.0], [-90.0, -180.0],
        [-90.0, -270.0], [0.0, -90.0], [0.0, -180.0], [-180.0, -270.0],
        [-90.0, -270.0], [0.0, -270.0], [-180.0, -270.0], [-90.0, -270.0],
        [-90.0, -270.0], [0.0, -90.0], [-90.0, -180.0], [-90.0, -270.0],
        [0.0, -90.0], [0.0, -180.0], [0.0, -180.0], [-90.0, -180.0],
    ],
    // 7
    [
        [0.0, -270.0], [0.0, -180.0], [0.0, -180.0], [-180.0, -270.0],
        [0.0, -90.0], [0.0, -180.0], [-180.0, -270.0], [-90.0, -270.0],
        B, B, [-90.0, -225.0], [-90.0, -225.0],
        B, [-45.0, -270.0], [-45.0, -270.0], B,
        B, [-90.0, -270.0], [-90.0, -270.0], B,
        B, [0.0, -90.0], [-90.0, -180.0], B,
    ],
    // 8
    [
        [0.0, -270.0], [0.0, -180.0], [0.0, -180.0], [-180.0, -270.0],
        [-90.0, -270.0], [0.0, -270.0], [-180.0, -270.0], [-90.0, -270.0],
        [-90.0, -270.0], [0.0, -90.0], [-90.0, -180.0], [-90.0, -270.0],
        [-90.0, -270.0], [0.0, -270.0], [-180.0, -270.0], [-90.0, -270.0],
        [-90.0, -270.0], [0.0, -90.0], [-90.0, -180.0], [-90.0, -270.0],
        [0.0, -90.0], [0.0, -180.0], [0.0, -180.0], [-90.0, -180.0],
    ],
    // 9
    [
        [0.0, -270.0], [0.0, -180.0], [0.0, -180.0], [-180.0, -270.0],
        [-90.0, -270.0], [0.0, -270.0], [-180.0, -270.0], [-90.0, -270.0],
        [-90.0, -270.0], [0.0, -90.0], [-90.0, -180.0], [-90.0, -270.0],
        [0.0, -90.0], [0.0, -180.0], [-180.0, -270.0], [-90.0, -270.0],
        [0.0, -270.0], [0.0, -180.0], [-90.0, -180.0], [-90.0, -270.0],
        [0.0, -90.0], [0.0, -180.0], [0.0, -180.0], [-90.0, -180.0],
    ],
];

/// Hand angles for `digit`, one pair per clock of the digit block.
pub fn glyph_angles(digit: u8) -> Result<&'static [HandPair; CLOCKS_PER_DIGIT]> {
    GLYPHS
        .get(usize::from(digit))
        .ok_or(ClockError::InvalidDigit(digit))
}
