//! Session score counters.

use serde::{Deserialize, Serialize};

use crate::Mark;

/// Cumulative wins per mark and draws.
///
/// Serializes as `{"X": n, "O": n, "Draws": n}`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_new::new,
)]
pub struct Scores {
    #[serde(rename = "X")]
    x_wins: u64,
    #[serde(rename = "O")]
    o_wins: u64,
    #[serde(rename = "Draws")]
    draws: u64,
}

impl Scores {
    /// Wins credited to a mark.
    pub fn wins(&self, mark: Mark) -> u64 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Draw count.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// True when every counter is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Credits a win.
    pub fn record_win(&mut self, mark: Mark) {
        let counter = match mark {
            Mark::X => &mut self.x_wins,
            Mark::O => &mut self.o_wins,
        };
        *counter = counter.saturating_add(1);
    }

    /// Counts a draw.
    pub fn record_draw(&mut self) {
        self.draws = self.draws.saturating_add(1);
    }
}

impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X: {}   Draws: {}   O: {}",
            self.x_wins, self.draws, self.o_wins
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record() {
        let mut scores = Scores::default();
        scores.record_win(Mark::O);
        scores.record_win(Mark::O);
        scores.record_draw();
        assert_eq!(scores, Scores::new(0, 2, 1));
        assert_eq!(scores.wins(Mark::O), 2);
        assert!(!scores.is_zero());
    }

    #[test]
    fn test_counters_saturate() {
        let mut scores = Scores::new(u64::MAX, 0, 0);
        scores.record_win(Mark::X);
        assert_eq!(scores.wins(Mark::X), u64::MAX);
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_string(&Scores::new(3, 1, 2)).unwrap();
        assert_eq!(json, r#"{"X":3,"O":1,"Draws":2}"#);
    }
}
