use core::fmt;

use serde::{Deserialize, Serialize};

/// Crystal kind occupying a board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Token {
    Ruby,
    Sapphire,
    Emerald,
    Topaz,
    Amethyst,
    Diamond,
}

/// A board cell, `None` only while a cascade step is being resolved.
pub type Cell = Option<Token>;

impl Token {
    pub const COUNT: usize = 6;

    pub const ALL: [Token; Self::COUNT] = [
        Self::Ruby,
        Self::Sapphire,
        Self::Emerald,
        Self::Topaz,
        Self::Amethyst,
        Self::Diamond,
    ];

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-letter symbol used by the text board format.
    pub const fn symbol(self) -> char {
        use Token::*;
        match self {
            Ruby => 'R',
            Sapphire => 'S',
            Emerald => 'E',
            Topaz => 'T',
            Amethyst => 'A',
            Diamond => 'D',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|token| token.symbol() == symbol.to_ascii_uppercase())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip_for_every_kind() {
        for token in Token::ALL {
            assert_eq!(Token::from_symbol(token.symbol()), Some(token));
            assert_eq!(Token::from_index(token.index()), Some(token));
        }
        assert_eq!(Token::from_symbol('r'), Some(Token::Ruby));
        assert_eq!(Token::from_symbol('x'), None);
        assert_eq!(Token::from_index(Token::COUNT), None);
    }
}
