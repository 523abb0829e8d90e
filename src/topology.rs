//! Grid layout of the clock wall: which clocks draw which digit.
//!
//! ```text
//!  col  0   1 .. 4   5 .. 8   9 10  11 .. 14  15 .. 18  19
//!  row 0  ----------------------------------------------
//!  row 1     [slot 0] [slot 1]         [slot 2] [slot 3]
//!  ..        hour      hour    colon    minute   minute
//!  row 6
//!  row 7  ----------------------------------------------
//! ```

use crate::error::{ClockError, Result};

pub const GRID_COLUMNS: usize = 20;
pub const GRID_ROWS: usize = 8;
pub const HANDS_PER_CLOCK: usize = 2;
pub const CELL_COUNT: usize = GRID_COLUMNS * GRID_ROWS;

pub const DIGIT_SLOTS: usize = 4;
pub const DIGIT_COLUMNS: usize = 4;
pub const DIGIT_ROWS: usize = 6;
pub const CLOCKS_PER_DIGIT: usize = DIGIT_COLUMNS * DIGIT_ROWS;

/// Position of a clock in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex {
    pub row: usize,
    pub column: usize,
}

impl CellIndex {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Offset into row-major cell storage.
    pub const fn offset(self) -> usize {
        self.row * GRID_COLUMNS + self.column
    }

    /// Every cell of the grid, row-major.
    pub fn all() -> impl Iterator<Item = CellIndex> {
        (0..GRID_ROWS).flat_map(|row| (0..GRID_COLUMNS).map(move |column| Self::new(row, column)))
    }
}

/// Clocks forming the colon between hours and minutes.
pub const COLON_CELLS: [CellIndex; 8] = [
    CellIndex::new(2, 9),
    CellIndex::new(2, 10),
    CellIndex::new(3, 9),
    CellIndex::new(3, 10),
    CellIndex::new(4, 9),
    CellIndex::new(4, 10),
    CellIndex::new(5, 9),
    CellIndex::new(5, 10),
];

const SLOT_ORIGINS: [CellIndex; DIGIT_SLOTS] = [
    CellIndex::new(1, 1),
    CellIndex::new(1, 5),
    CellIndex::new(1, 11),
    CellIndex::new(1, 15),
];

/// Cells of a digit block, row-major. Slots 0 and 1 show the hour, 2 and 3
/// the minute.
pub fn digit_cells(slot: usize) -> Result<[CellIndex; CLOCKS_PER_DIGIT]> {
    let origin = SLOT_ORIGINS
        .get(slot)
        .copied()
        .ok_or(ClockError::InvalidDigitSlot(slot))?;
    Ok(std::array::from_fn(|i| {
        CellIndex::new(origin.row + i / DIGIT_COLUMNS, origin.column + i % DIGIT_COLUMNS)
    }))
}
