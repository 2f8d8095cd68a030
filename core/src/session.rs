use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    Idle,
    Selected(Position),
}

impl Selection {
    pub const fn selected(self) -> Option<Position> {
        match self {
            Self::Idle => None,
            Self::Selected(pos) => Some(pos),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    Active,
    GameOver,
}

impl SessionState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

/// One resolve-and-recheck iteration of an accepted move, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeStep {
    /// Combo level reached by this iteration, starting at 1.
    pub combo: u32,
    pub matches: Vec<Match>,
    pub cleared: Array2<bool>,
    pub falls: Array2<u8>,
    /// Board after removal, compaction and refill.
    pub board: Board,
    pub award: Award,
}

/// Everything the presentation layer needs to replay an accepted move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub swap: (Position, Position),
    /// Board right after the swap, before anything was cleared.
    pub swapped: Board,
    pub steps: Vec<CascadeStep>,
}

impl TurnReport {
    pub fn points(&self) -> u32 {
        self.steps
            .iter()
            .fold(0, |acc, step| acc.saturating_add(step.award.total()))
    }

    pub fn combo(&self) -> u32 {
        self.steps.last().map_or(0, |step| step.combo)
    }

    pub fn final_board(&self) -> &Board {
        self.steps.last().map_or(&self.swapped, |step| &step.board)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Input arrived while the game was over or pointed outside the board.
    Ignored,
    /// A cell is now selected, either as a first pick or replacing a non-adjacent one.
    Selected(Position),
    /// The swap would not produce a match; nothing changed and no move was used.
    Rejected { from: Position, to: Position },
    Accepted { report: TurnReport, game_over: bool },
}

impl SelectOutcome {
    /// Whether the board or score could have changed.
    pub const fn has_update(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub const fn is_game_over(&self) -> bool {
        matches!(self, Self::Accepted { game_over: true, .. })
    }
}

/// Result of applying one input to a session value.
#[derive(Clone, Debug)]
pub struct Transition<S> {
    pub session: GameSession<S>,
    pub outcome: SelectOutcome,
}

/// Complete state of one game, from generation to game over.
///
/// Public transitions take `&self` and hand back the next session value, so a caller can keep
/// earlier states around. `PlayEngine` wraps the same transitions for in-place use.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession<S = RandomTokens> {
    config: GameConfig,
    board: Board,
    score: u32,
    moves_remaining: u16,
    combo: u32,
    selection: Selection,
    state: SessionState,
    source: S,
}

impl GameSession<RandomTokens> {
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::new(config, RandomTokens::seeded(seed))
    }
}

impl<S: TokenSource> GameSession<S> {
    pub fn new(config: GameConfig, mut source: S) -> Self {
        let config = config.clamped();
        let board = generate_playable(config.size, &mut source);
        log::debug!(
            "New {size}x{size} session with {moves} moves",
            size = config.size,
            moves = config.moves
        );
        Self::with_board(config, board, source)
    }

    /// Starts a session on a prepared board, which must be full, match-free and sized as
    /// `config` says. The config is clamped first, so a session always has a move to play.
    pub fn from_board(config: GameConfig, board: Board, source: S) -> Result<Self> {
        let config = config.clamped();
        if board.size() != config.size {
            return Err(GameError::InvalidBoardShape);
        }
        if !board.is_full() {
            return Err(GameError::EmptyCell);
        }
        if has_matches(&board) {
            return Err(GameError::BoardHasMatches);
        }
        Ok(Self::with_board(config, board, source))
    }

    fn with_board(config: GameConfig, board: Board, source: S) -> Self {
        Self {
            config,
            board,
            score: 0,
            moves_remaining: config.moves,
            combo: 0,
            selection: Selection::Idle,
            state: SessionState::Active,
            source,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves_remaining(&self) -> u16 {
        self.moves_remaining
    }

    /// Cascade iterations of the most recent accepted move, 0 after a rejection.
    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_finished()
    }

    /// Score to hand to a leaderboard, once the game has ended.
    pub fn final_score(&self) -> Option<u32> {
        self.is_game_over().then_some(self.score)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn has_legal_move(&self) -> bool {
        has_legal_move(&self.board)
    }

    pub fn hint(&self) -> Option<(Position, Position)> {
        find_legal_move(&self.board)
    }

    fn accepts_input(&self) -> bool {
        !self.state.is_finished() && self.moves_remaining > 0
    }

    pub(crate) fn apply_select(&mut self, pos: Position) -> SelectOutcome {
        if !self.accepts_input() || self.board.validate_position(pos).is_err() {
            return SelectOutcome::Ignored;
        }

        match self.selection {
            Selection::Selected(first) if first.is_adjacent(pos) => self.apply_swap(first, pos),
            _ => {
                self.selection = Selection::Selected(pos);
                SelectOutcome::Selected(pos)
            }
        }
    }

    pub(crate) fn apply_swap(&mut self, from: Position, to: Position) -> SelectOutcome {
        if !self.accepts_input()
            || self.board.validate_position(from).is_err()
            || self.board.validate_position(to).is_err()
            || !from.is_adjacent(to)
        {
            return SelectOutcome::Ignored;
        }
        self.selection = Selection::Idle;

        let swapped = self.board.swapped(from, to);
        if !has_matches(&swapped) {
            log::debug!("Rejected swap {from} <-> {to}");
            self.combo = 0;
            return SelectOutcome::Rejected { from, to };
        }

        self.board = swapped.clone();
        self.moves_remaining -= 1;
        self.combo = 0;
        let steps = self.run_cascade();

        if self.moves_remaining == 0 {
            self.state = SessionState::GameOver;
            log::debug!("Game over with score {}", self.score);
        }

        let report = TurnReport {
            swap: (from, to),
            swapped,
            steps,
        };
        log::debug!(
            "Accepted swap {from} <-> {to}: {} cascades, {} points, {} moves left",
            report.steps.len(),
            report.points(),
            self.moves_remaining
        );
        SelectOutcome::Accepted {
            report,
            game_over: self.state.is_finished(),
        }
    }

    /// Resolves matches until the board settles. Termination is only probabilistic: every
    /// iteration draws fresh tokens, and a source that keeps recreating runs keeps it going.
    fn run_cascade(&mut self) -> Vec<CascadeStep> {
        let mut steps = Vec::new();

        loop {
            let matches = find_matches(&self.board);
            if matches.is_empty() {
                break;
            }

            self.combo += 1;
            let Resolution {
                board,
                cleared,
                falls,
                cleared_count,
            } = resolve(&self.board, &matches, &mut self.source);
            let award = self.config.scoring.award(cleared_count, self.combo);
            self.score = self.score.saturating_add(award.total());
            log::trace!(
                "Cascade {}: cleared {cleared_count} cells for {} points",
                self.combo,
                award.total()
            );

            self.board = board.clone();
            steps.push(CascadeStep {
                combo: self.combo,
                matches,
                cleared,
                falls,
                board,
                award,
            });
        }

        debug_assert!(self.board.is_full(), "cascade left an empty cell");
        debug_assert!(!has_matches(&self.board), "cascade left a match");
        steps
    }
}

impl<S: TokenSource + Clone> GameSession<S> {
    /// Applies a click on `pos`, see `SelectOutcome` for the possible results.
    pub fn select(&self, pos: Position) -> Transition<S> {
        let mut session = self.clone();
        let outcome = session.apply_select(pos);
        Transition { session, outcome }
    }

    /// Attempts a whole move at once, bypassing the selection state.
    pub fn swap(&self, from: Position, to: Position) -> Transition<S> {
        let mut session = self.clone();
        let outcome = session.apply_swap(from, to);
        Transition { session, outcome }
    }

    /// Fresh game with the same configuration, continuing the token stream.
    pub fn reset(&self) -> Self {
        log::debug!("Resetting session");
        Self::new(self.config, self.source.clone())
    }
}
