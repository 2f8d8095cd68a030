use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Result of one cascade step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub board: Board,
    /// Cells removed by the step's matches.
    pub cleared: Array2<bool>,
    /// Rows each tile travelled to reach its cell. Refilled tiles count from above the board, so
    /// a new tile landing in row `r` fell `r + 1`. Presentation only, game logic ignores it.
    pub falls: Array2<u8>,
    pub cleared_count: CellCount,
}

/// Clears the cells covered by `matches`, drops the remaining tiles of each column to the
/// bottom keeping their order, then refills the gaps left at the top from `source`.
///
/// Refill draws column by column, left to right, and top to bottom within a column.
pub fn resolve<S: TokenSource + ?Sized>(
    board: &Board,
    matches: &[Match],
    source: &mut S,
) -> Resolution {
    let size = board.size();
    let cleared = matched_mask(size, matches);
    let cleared_count = cleared
        .iter()
        .filter(|&&hit| hit)
        .count()
        .try_into()
        .unwrap_or(CellCount::MAX);

    let mut next = Board::empty(size);
    let mut falls = Array2::zeros(next.cells().dim());

    for col in 0..size {
        let mut write = size;
        for row in (0..size).rev() {
            let from = Position::new(row, col);
            if cleared[from.to_nd_index()] {
                continue;
            }
            if let Some(token) = board[from] {
                write -= 1;
                let to = Position::new(write, col);
                next[to] = Some(token);
                falls[to.to_nd_index()] = write - row;
            }
        }

        for row in 0..write {
            let to = Position::new(row, col);
            next[to] = Some(source.next_token());
            falls[to.to_nd_index()] = row + 1;
        }
    }

    Resolution {
        board: next,
        cleared,
        falls,
        cleared_count,
    }
}
