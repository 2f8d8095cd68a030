use crate::*;

/// In-place driver around `GameSession` for presentation layers that keep a single mutable game.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayEngine<S = RandomTokens> {
    session: GameSession<S>,
    accepted_moves: u32,
}

impl PlayEngine<RandomTokens> {
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::new(GameSession::seeded(config, seed))
    }
}

impl<S: TokenSource> PlayEngine<S> {
    pub fn new(session: GameSession<S>) -> Self {
        Self {
            session,
            accepted_moves: 0,
        }
    }

    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    pub fn into_session(self) -> GameSession<S> {
        self.session
    }

    pub fn board(&self) -> &Board {
        self.session.board()
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    pub fn moves_remaining(&self) -> u16 {
        self.session.moves_remaining()
    }

    pub fn combo(&self) -> u32 {
        self.session.combo()
    }

    pub fn selection(&self) -> Selection {
        self.session.selection()
    }

    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    /// Accepted moves since the last reset.
    pub fn accepted_moves(&self) -> u32 {
        self.accepted_moves
    }

    pub fn select(&mut self, pos: Position) -> SelectOutcome {
        let outcome = self.session.apply_select(pos);
        self.record(&outcome);
        outcome
    }

    pub fn swap(&mut self, from: Position, to: Position) -> SelectOutcome {
        let outcome = self.session.apply_swap(from, to);
        self.record(&outcome);
        outcome
    }

    fn record(&mut self, outcome: &SelectOutcome) {
        if outcome.has_update() {
            self.accepted_moves += 1;
        }
    }
}

impl<S: TokenSource + Clone> PlayEngine<S> {
    pub fn reset(&mut self) {
        self.session = self.session.reset();
        self.accepted_moves = 0;
    }
}

impl<S> From<GameSession<S>> for PlayEngine<S>
where
    S: TokenSource,
{
    fn from(session: GameSession<S>) -> Self {
        Self::new(session)
    }
}
