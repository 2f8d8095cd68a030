//! In-memory ranked store of finished games.
//!
//! Keeps only the best score per identifier, ranked by score descending.

use std::collections::HashMap;

/// Default number of entries shown after a game.
pub const DEFAULT_TOP: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub identifier: String,
    pub score: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    best: HashMap<String, u32>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `score` for `identifier`, keeping the higher of the old and new score.
    ///
    /// Returns true when the stored best improved.
    pub fn submit(&mut self, identifier: &str, score: u32) -> bool {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return false;
        }

        match self.best.get_mut(identifier) {
            Some(best) if *best >= score => false,
            Some(best) => {
                *best = score;
                true
            }
            None => {
                self.best.insert(identifier.to_owned(), score);
                true
            }
        }
    }

    pub fn best(&self, identifier: &str) -> Option<u32> {
        self.best.get(identifier.trim()).copied()
    }

    /// Best `k` entries, highest score first, ties broken by identifier.
    pub fn top(&self, k: usize) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<_> = self
            .best
            .iter()
            .map(|(identifier, &score)| LeaderboardEntry {
                identifier: identifier.clone(),
                score,
            })
            .collect();
        entries.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.identifier.cmp(&b.identifier))
        });
        entries.truncate(k);
        entries
    }

    /// 1-indexed rank of `identifier`, if it has a score.
    pub fn rank(&self, identifier: &str) -> Option<usize> {
        let score = self.best(identifier)?;
        let identifier = identifier.trim();
        let ahead = self
            .best
            .iter()
            .filter(|&(other, &other_score)| {
                other_score > score || (other_score == score && other.as_str() < identifier)
            })
            .count();
        Some(ahead + 1)
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}
