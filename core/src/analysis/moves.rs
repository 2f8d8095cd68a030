use alloc::vec::Vec;

use crate::*;

/// Swaps that would produce at least one match, each listed once with the upper-left cell first.
pub fn legal_moves(board: &Board) -> Vec<(Position, Position)> {
    candidate_swaps(board)
        .filter(|&(a, b)| creates_match(board, a, b))
        .collect()
}

pub fn find_legal_move(board: &Board) -> Option<(Position, Position)> {
    candidate_swaps(board).find(|&(a, b)| creates_match(board, a, b))
}

/// A board without any legal move is dead: no swap can ever be accepted on it.
pub fn has_legal_move(board: &Board) -> bool {
    find_legal_move(board).is_some()
}

/// Whether swapping `a` and `b` completes a run through either of them.
///
/// Only the row and column of the two swapped cells can change, so checking runs through those
/// cells is equivalent to re-scanning the whole swapped board when `board` itself has no matches.
pub fn creates_match(board: &Board, a: Position, b: Position) -> bool {
    if !a.is_adjacent(b) || !a.is_within(board.size()) || !b.is_within(board.size()) {
        return false;
    }
    let swapped = board.swapped(a, b);
    [a, b].into_iter().any(|pos| {
        run_through(&swapped, pos, Orientation::Horizontal) >= MIN_MATCH_LEN
            || run_through(&swapped, pos, Orientation::Vertical) >= MIN_MATCH_LEN
    })
}

fn candidate_swaps(board: &Board) -> impl Iterator<Item = (Position, Position)> + '_ {
    board.positions().flat_map(move |pos| {
        board
            .iter_neighbors(pos)
            .filter(move |&neighbor| neighbor > pos)
            .map(move |neighbor| (pos, neighbor))
    })
}

/// Length of the run of identical tokens through `pos` along `orientation`.
fn run_through(board: &Board, pos: Position, orientation: Orientation) -> Coord {
    let Some(token) = board[pos] else {
        return 0;
    };

    let mut len = 1;
    for delta in [-1, 1] {
        let mut cursor = step(pos, orientation, delta);
        while let Some(next) = cursor.filter(|&p| board.get(p) == Some(Some(token))) {
            len += 1;
            cursor = step(next, orientation, delta);
        }
    }
    len
}

fn step(pos: Position, orientation: Orientation, delta: i8) -> Option<Position> {
    let (row, col) = match orientation {
        Orientation::Horizontal => (0, delta),
        Orientation::Vertical => (delta, 0),
    };
    Some(Position::new(
        pos.row.checked_add_signed(row)?,
        pos.col.checked_add_signed(col)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        Board::parse(text).unwrap()
    }

    #[test]
    fn finds_the_only_matching_swap() {
        let board = board(
            "
            RSRE
            TRDA
            SAET
            DTAS
            ",
        );

        assert_eq!(legal_moves(&board), [(Position::new(0, 1), Position::new(1, 1))]);
        assert!(has_legal_move(&board));
        assert!(creates_match(&board, Position::new(1, 1), Position::new(0, 1)));
        assert!(!creates_match(&board, Position::new(0, 0), Position::new(0, 1)));
    }

    #[test]
    fn dead_board_has_no_legal_move() {
        let board = board(
            "
            RSE
            TAD
            RSE
            ",
        );

        assert!(legal_moves(&board).is_empty());
        assert!(!has_legal_move(&board));
        assert_eq!(find_legal_move(&board), None);
    }

    #[test]
    fn agrees_with_full_rescan_on_generated_boards() {
        for seed in 0..50 {
            let board = generate_playable(8, &mut RandomTokens::seeded(seed));
            for (a, b) in legal_moves(&board) {
                assert!(has_matches(&board.swapped(a, b)), "seed {seed}: {a} <-> {b}");
            }
            let rescanned = board
                .positions()
                .flat_map(|pos| {
                    board
                        .iter_neighbors(pos)
                        .filter(move |&n| n > pos)
                        .map(move |n| (pos, n))
                })
                .filter(|&(a, b)| has_matches(&board.swapped(a, b)))
                .count();
            assert_eq!(legal_moves(&board).len(), rescanned, "seed {seed}");
        }
    }

    #[test]
    fn non_adjacent_pairs_never_match() {
        let board = board(
            "
            RSRE
            TRDA
            SAET
            DTAS
            ",
        );

        assert!(!creates_match(&board, Position::new(0, 1), Position::new(2, 1)));
        assert!(!creates_match(&board, Position::new(0, 3), Position::new(0, 4)));
    }
}
