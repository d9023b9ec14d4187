//! High score leaderboard
//!
//! Tracks the top 10 finished runs. Serializable; the embedding application
//! owns where the JSON lives (browser storage, disk, nowhere).

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Final score when the hazard ended the run
    pub score: u32,
    /// Collectibles consumed during the run
    pub collected: u32,
    /// Unix timestamp (ms) when achieved, supplied by the embedder
    pub timestamp: f64,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a finished run (if it qualifies).
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn add_score(&mut self, score: u32, collected: u32, timestamp: f64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            collected,
            timestamp,
        };

        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Parse a leaderboard from JSON produced by [`Self::to_json`]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert!(scores.qualifies(10));
    }

    #[test]
    fn test_add_sorts_descending() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(30, 3, 0.0), Some(1));
        assert_eq!(scores.add_score(120, 12, 1.0), Some(1));
        assert_eq!(scores.add_score(60, 6, 2.0), Some(2));
        let listed: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(listed, vec![120, 60, 30]);
        assert_eq!(scores.top_score(), Some(120));
    }

    #[test]
    fn test_board_truncates_to_max() {
        let mut scores = HighScores::new();
        for i in 1..=15u32 {
            scores.add_score(i * 10, i, i as f64);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        // Lowest kept entry is 60: 10..=50 fell off
        assert_eq!(scores.entries.last().unwrap().score, 60);
        assert!(!scores.qualifies(60));
        assert!(scores.qualifies(70));
    }

    #[test]
    fn test_potential_rank() {
        let mut scores = HighScores::new();
        scores.add_score(100, 10, 0.0);
        scores.add_score(50, 5, 0.0);
        assert_eq!(scores.potential_rank(200), Some(1));
        assert_eq!(scores.potential_rank(70), Some(2));
        assert_eq!(scores.potential_rank(10), Some(3));
        assert_eq!(scores.potential_rank(0), None);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut scores = HighScores::new();
        scores.add_score(120, 12, 1000.0);
        let restored = HighScores::from_json(&scores.to_json().unwrap()).unwrap();
        assert_eq!(restored.entries.len(), 1);
        assert_eq!(restored.top_score(), Some(120));
        assert_eq!(restored.entries[0].collected, 12);
    }
}
