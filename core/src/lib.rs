#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use matcher::*;
pub use resolver::*;
pub use scoring::*;
pub use session::*;
pub use tile::*;
pub use types::*;

mod analysis;
mod engine;
mod error;
mod generator;
mod matcher;
mod resolver;
mod scoring;
mod session;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: Coord,
    pub moves: u16,
    pub scoring: ScoringRules,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord = 8;
    pub const DEFAULT_MOVES: u16 = 30;
    /// Smallest board that can still hold a run of three.
    pub const MIN_SIZE: Coord = MIN_MATCH_LEN;
    pub const MAX_SIZE: Coord = 32;

    pub const fn new_unchecked(size: Coord, moves: u16, scoring: ScoringRules) -> Self {
        Self {
            size,
            moves,
            scoring,
        }
    }

    pub fn new(size: Coord, moves: u16) -> Self {
        Self::new_unchecked(size, moves, ScoringRules::default()).clamped()
    }

    /// Pulls every field back into the range the engine supports.
    pub fn clamped(self) -> Self {
        let size = self.size.clamp(Self::MIN_SIZE, Self::MAX_SIZE);
        let moves = self.moves.max(1);
        Self::new_unchecked(size, moves, self.scoring)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_SIZE,
            Self::DEFAULT_MOVES,
            ScoringRules::default(),
        )
    }
}

/// Square grid of crystals, indexed by `Position` with row 0 on top.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<Cell>", into = "Array2<Cell>")]
pub struct Board {
    cells: Array2<Cell>,
}

impl TryFrom<Array2<Cell>> for Board {
    type Error = GameError;

    fn try_from(cells: Array2<Cell>) -> Result<Self> {
        Self::from_cells(cells)
    }
}

impl From<Board> for Array2<Cell> {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl Board {
    pub fn empty(size: Coord) -> Self {
        let size = usize::from(size);
        Self {
            cells: Array2::from_elem((size, size), None),
        }
    }

    pub fn from_cells(cells: Array2<Cell>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows != cols || rows == 0 || rows > usize::from(Coord::MAX) {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { cells })
    }

    /// Parses one line of token symbols per row, `.` marking an empty cell.
    pub fn parse(text: &str) -> Result<Self> {
        let mut cells = Vec::new();
        let mut rows = 0;
        let mut width = None;

        for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let row = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|symbol| match symbol {
                    '.' => Ok(None),
                    _ => Token::from_symbol(symbol)
                        .map(Some)
                        .ok_or(GameError::UnknownToken(symbol)),
                })
                .collect::<Result<Vec<Cell>>>()?;

            if *width.get_or_insert(row.len()) != row.len() {
                return Err(GameError::InvalidBoardShape);
            }
            cells.extend(row);
            rows += 1;
        }

        let cells = Array2::from_shape_vec((rows, rows), cells)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Self::from_cells(cells)
    }

    pub fn size(&self) -> Coord {
        // from_cells guarantees the side fits into a Coord
        self.cells.nrows() as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    pub fn validate_position(&self, pos: Position) -> Result<Position> {
        if pos.is_within(self.size()) {
            Ok(pos)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.to_nd_index()).copied()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn empty_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_none())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size();
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    pub fn row(&self, row: Coord) -> impl Iterator<Item = Cell> + '_ {
        self.cells.row(usize::from(row)).into_iter().copied()
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub(crate) fn iter_neighbors(&self, pos: Position) -> NeighborIter {
        NeighborIter::new(pos, self.size())
    }

    pub fn swap(&mut self, a: Position, b: Position) {
        self.cells.swap(a.to_nd_index(), b.to_nd_index());
    }

    /// Copy of the board with the two cells exchanged.
    pub fn swapped(&self, a: Position, b: Position) -> Self {
        let mut board = self.clone();
        board.swap(a, b);
        board
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.to_nd_index()]
    }
}

impl IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.to_nd_index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                match cell {
                    Some(token) => write!(f, "{token}")?,
                    None => f.write_str(".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
