//! Accusation scoring
//!
//! An accusation holds only when enough collected clues point at the same
//! suspect through the clue index.

use crate::data::{ClueCollection, ClueIndex, SuspectRoster};
use crate::GameError;
use serde::{Deserialize, Serialize};

/// Clues needed before an arrest is justified
pub const CORROBORATION_THRESHOLD: usize = 2;

/// Outcome of a scored accusation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    GuiltyConfirmed { suspect: String, clue_count: usize },
    InsufficientEvidence { suspect: String, clue_count: usize },
}

impl Verdict {
    pub fn suspect(&self) -> &str {
        match self {
            Verdict::GuiltyConfirmed { suspect, .. } | Verdict::InsufficientEvidence { suspect, .. } => suspect,
        }
    }

    pub fn clue_count(&self) -> usize {
        match self {
            Verdict::GuiltyConfirmed { clue_count, .. }
            | Verdict::InsufficientEvidence { clue_count, .. } => *clue_count,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, Verdict::GuiltyConfirmed { .. })
    }
}

/// Number of collected clues the index attributes to `suspect`
///
/// Clues missing from the index never count.
pub fn count_clues_against(collected: &ClueCollection, index: &ClueIndex, suspect: &str) -> usize {
    collected
        .iter()
        .filter(|clue| index.lookup(clue) == Some(suspect))
        .count()
}

/// Parse the player's typed suspect number
pub fn parse_choice(token: &str) -> Result<usize, GameError> {
    token
        .trim()
        .parse::<usize>()
        .map_err(|_| GameError::InvalidInput(format!("'{}' is not a suspect number", token.trim())))
}

/// Scores accusations against one session's evidence
#[derive(Debug, Clone, Copy)]
pub struct AccusationEngine<'a> {
    collected: &'a ClueCollection,
    index: &'a ClueIndex,
    roster: &'a SuspectRoster,
    threshold: usize,
}

impl<'a> AccusationEngine<'a> {
    pub fn new(collected: &'a ClueCollection, index: &'a ClueIndex, roster: &'a SuspectRoster) -> Self {
        Self {
            collected,
            index,
            roster,
            threshold: CORROBORATION_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Score an accusation against the 1-based roster `choice`
    ///
    /// An out-of-range choice is reported as `InvalidAccusation` and nothing
    /// is counted.
    pub fn evaluate(&self, choice: usize) -> Result<Verdict, GameError> {
        let suspect = self.roster.get(choice).ok_or(GameError::InvalidAccusation {
            choice,
            roster_len: self.roster.len(),
        })?;

        let clue_count = count_clues_against(self.collected, self.index, suspect);
        let suspect = suspect.to_string();

        if clue_count >= self.threshold {
            Ok(Verdict::GuiltyConfirmed { suspect, clue_count })
        } else {
            Ok(Verdict::InsufficientEvidence { suspect, clue_count })
        }
    }
}

/// Score an accusation with the standard corroboration threshold
pub fn evaluate(
    collected: &ClueCollection,
    roster: &SuspectRoster,
    index: &ClueIndex,
    choice: usize,
) -> Result<Verdict, GameError> {
    AccusationEngine::new(collected, index, roster).evaluate(choice)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> SuspectRoster {
        SuspectRoster::new(["Carlos", "Ana", "Pedro"])
    }

    fn index() -> ClueIndex {
        let mut index = ClueIndex::default();
        index.insert("X", "Carlos");
        index.insert("X", "Carlos");
        index.insert("Y", "Carlos");
        index.insert("Z", "Ana");
        index
    }

    #[test]
    fn test_two_clues_confirm_guilt() {
        let collected: ClueCollection = ["X", "Y"].into_iter().collect();
        let verdict = evaluate(&collected, &roster(), &index(), 1).unwrap();

        assert_eq!(
            verdict,
            Verdict::GuiltyConfirmed {
                suspect: "Carlos".to_string(),
                clue_count: 2
            }
        );
    }

    #[test]
    fn test_single_clue_is_insufficient() {
        let collected: ClueCollection = ["X"].into_iter().collect();
        let verdict = evaluate(&collected, &roster(), &index(), 1).unwrap();

        assert!(!verdict.is_confirmed());
        assert_eq!(verdict.clue_count(), 1);
        assert_eq!(verdict.suspect(), "Carlos");
    }

    #[test]
    fn test_out_of_range_choice_is_rejected() {
        let collected: ClueCollection = ["X", "Y"].into_iter().collect();
        let index = index();
        let roster = roster();

        for choice in [0, 4, 99] {
            let err = evaluate(&collected, &roster, &index, choice).unwrap_err();
            assert_eq!(err, GameError::InvalidAccusation { choice, roster_len: 3 });
        }
    }

    #[test]
    fn test_unknown_clues_never_count() {
        let collected: ClueCollection = ["Q", "R", "Z"].into_iter().collect();
        let index = index();
        assert_eq!(count_clues_against(&collected, &index, "Carlos"), 0);
        assert_eq!(count_clues_against(&collected, &index, "Ana"), 1);
    }

    #[test]
    fn test_custom_threshold() {
        let collected: ClueCollection = ["Z"].into_iter().collect();
        let index = index();
        let roster = roster();

        let engine = AccusationEngine::new(&collected, &index, &roster).with_threshold(1);
        assert!(engine.evaluate(2).unwrap().is_confirmed());
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice(" 3 "), Ok(3));
        assert!(matches!(parse_choice("Carlos"), Err(GameError::InvalidInput(_))));
        assert!(matches!(parse_choice("-1"), Err(GameError::InvalidInput(_))));
    }
}
