use std::fmt::Write as _;

use prismatch_core::{Board, CascadeStep, Match, Orientation, Position, Selection};

/// Board with row/column indices, the selected cell wrapped in brackets.
pub fn render_board(board: &Board, selection: Selection) -> String {
    let size = board.size();
    let selected = selection.selected();
    let mut out = String::from("   ");

    for col in 0..size {
        let _ = write!(out, "{col:^3}");
    }
    out.push('\n');

    for row in 0..size {
        let _ = write!(out, "{row:>2} ");
        for col in 0..size {
            let pos = Position::new(row, col);
            let symbol = board[pos].map_or('.', |token| token.symbol());
            if selected == Some(pos) {
                let _ = write!(out, "[{symbol}]");
            } else {
                let _ = write!(out, " {symbol} ");
            }
        }
        out.push('\n');
    }
    out
}

pub fn describe_match(run: &Match) -> String {
    let direction = match run.orientation {
        Orientation::Horizontal => "row",
        Orientation::Vertical => "column",
    };
    format!(
        "{} x{} along {direction} from {}",
        run.token, run.len, run.origin
    )
}

pub fn describe_step(step: &CascadeStep) -> String {
    let runs: Vec<_> = step.matches.iter().map(describe_match).collect();
    let mut line = format!(
        "cascade {}: {} (+{}",
        step.combo,
        runs.join(", "),
        step.award.base
    );
    if step.award.bonus > 0 {
        let _ = write!(line, ", combo bonus +{}", step.award.bonus);
    }
    line.push(')');
    line
}

/// Fall distances of a cascade step, one digit per cell, for debug logging.
pub fn render_falls(step: &CascadeStep) -> String {
    let mut out = String::new();
    for row in step.falls.rows() {
        for fall in row {
            let _ = write!(out, "{fall:>3}");
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use prismatch_core::Token;

    #[test]
    fn board_shows_indices_and_selection() {
        let board = Board::parse("RSE\nTAD\nRSE").unwrap();

        let text = render_board(&board, Selection::Selected(Position::new(1, 2)));

        assert_eq!(
            text,
            "    0  1  2 \n 0  R  S  E \n 1  T  A [D]\n 2  R  S  E \n"
        );
    }

    #[test]
    fn matches_are_described_in_words() {
        let run = Match {
            origin: Position::new(2, 0),
            orientation: Orientation::Horizontal,
            len: 4,
            token: Token::Topaz,
        };

        assert_eq!(describe_match(&run), "T x4 along row from (2, 0)");
    }
}
