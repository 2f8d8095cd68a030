use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Draws tokens uniformly from any random number generator.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomTokens<R = SmallRng> {
    rng: R,
}

impl<R> RandomTokens<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RandomTokens<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TokenSource for RandomTokens<R> {
    fn next_token(&mut self) -> Token {
        Token::ALL[self.rng.random_range(0..Token::COUNT)]
    }
}

/// Replays a fixed token sequence, starting over once it runs out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedTokens {
    tokens: Vec<Token>,
    cursor: usize,
}

impl ScriptedTokens {
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Result<Self> {
        let tokens: Vec<_> = tokens.into_iter().collect();
        if tokens.is_empty() {
            return Err(GameError::EmptyTokenScript);
        }
        Ok(Self { tokens, cursor: 0 })
    }

    /// Builds a script from token symbols, ignoring whitespace.
    pub fn parse(symbols: &str) -> Result<Self> {
        let tokens = symbols
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|symbol| Token::from_symbol(symbol).ok_or(GameError::UnknownToken(symbol)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(tokens)
    }

    /// Number of tokens handed out so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl TokenSource for ScriptedTokens {
    fn next_token(&mut self) -> Token {
        let token = self.tokens[self.cursor % self.tokens.len()];
        self.cursor += 1;
        token
    }
}
