use core::fmt;

use serde::{Deserialize, Serialize};

/// Single coordinate axis used for the board side length and positions.
pub type Coord = u8;

/// Count type used for cleared-cell and total-cell counts.
pub type CellCount = u16;

/// Row/column coordinates of a board cell, row 0 being the top row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: Coord,
    pub col: Coord,
}

impl Position {
    pub const fn new(row: Coord, col: Coord) -> Self {
        Self { row, col }
    }

    pub const fn manhattan_distance(self, other: Self) -> u16 {
        (self.row.abs_diff(other.row) as u16) + (self.col.abs_diff(other.col) as u16)
    }

    /// Two cells are adjacent when they share an edge.
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }

    pub const fn is_within(self, size: Coord) -> bool {
        self.row < size && self.col < size
    }
}

impl From<(Coord, Coord)> for Position {
    fn from((row, col): (Coord, Coord)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Position {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.row.into(), self.col.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const DISPLACEMENTS: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Applies `delta` to `pos`, returning a value only when it remains on a board of side `size`.
fn apply_delta(pos: Position, delta: (i8, i8), size: Coord) -> Option<Position> {
    let row = pos.row.checked_add_signed(delta.0)?;
    let col = pos.col.checked_add_signed(delta.1)?;
    let next = Position::new(row, col);
    next.is_within(size).then_some(next)
}

/// Iterates the edge-sharing neighbours of a cell in row-major order.
#[derive(Debug)]
pub struct NeighborIter {
    center: Position,
    size: Coord,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Position, size: Coord) -> Self {
        Self {
            center,
            size,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next) = apply_delta(self.center, delta, self.size) {
                return Some(next);
            }
        }
    }
}
