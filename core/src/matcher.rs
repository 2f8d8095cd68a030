use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Shortest run of identical tokens that counts as a match.
pub const MIN_MATCH_LEN: Coord = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Run along a row, growing to the right.
    Horizontal,
    /// Run along a column, growing downwards.
    Vertical,
}

/// A maximal run of at least `MIN_MATCH_LEN` identical tokens.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub origin: Position,
    pub orientation: Orientation,
    pub len: Coord,
    pub token: Token,
}

impl Match {
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let Match {
            origin,
            orientation,
            len,
            ..
        } = *self;
        (0..len).map(move |offset| match orientation {
            Orientation::Horizontal => Position::new(origin.row, origin.col + offset),
            Orientation::Vertical => Position::new(origin.row + offset, origin.col),
        })
    }

    pub fn contains(&self, pos: Position) -> bool {
        let Position { row, col } = self.origin;
        match self.orientation {
            Orientation::Horizontal => pos.row == row && pos.col >= col && pos.col - col < self.len,
            Orientation::Vertical => pos.col == col && pos.row >= row && pos.row - row < self.len,
        }
    }
}

/// Finds every horizontal run (row-major) followed by every vertical run (column-major).
pub fn find_matches(board: &Board) -> Vec<Match> {
    let size = board.size();
    let mut matches = Vec::new();

    for row in 0..size {
        scan_line(board, Orientation::Horizontal, &mut matches, |i| {
            Position::new(row, i)
        });
    }
    for col in 0..size {
        scan_line(board, Orientation::Vertical, &mut matches, |i| {
            Position::new(i, col)
        });
    }

    matches
}

pub fn has_matches(board: &Board) -> bool {
    !find_matches(board).is_empty()
}

/// Union of the cells covered by `matches`, so crossing runs count each cell once.
pub fn matched_mask(size: Coord, matches: &[Match]) -> Array2<bool> {
    let side = usize::from(size);
    let mut mask = Array2::from_elem((side, side), false);
    for pos in matches.iter().flat_map(Match::positions) {
        if let Some(cell) = mask.get_mut(pos.to_nd_index()) {
            *cell = true;
        }
    }
    mask
}

fn scan_line(
    board: &Board,
    orientation: Orientation,
    matches: &mut Vec<Match>,
    at: impl Fn(Coord) -> Position,
) {
    let size = board.size();
    let mut start = 0;

    while start < size {
        let Some(token) = board[at(start)] else {
            start += 1;
            continue;
        };

        let mut end = start + 1;
        while end < size && board[at(end)] == Some(token) {
            end += 1;
        }

        let len = end - start;
        if len >= MIN_MATCH_LEN {
            matches.push(Match {
                origin: at(start),
                orientation,
                len,
                token,
            });
        }
        start = end;
    }
}
