use thiserror::Error;

use super::Card;

/// Everything that can go wrong while building cards, card sets or solvers.
///
/// Impossible combinations are not errors; they have a probability of zero.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum BluffError {
    #[error("Unexpected rank character '{0}', expected one of 9 T J Q K A")]
    UnexpectedRankChar(char),
    #[error("Unexpected suit character '{0}', expected one of ♠ ♣ ♦ ♥ (or s c d h)")]
    UnexpectedSuitChar(char),
    #[error("Input ended in the middle of a card")]
    UnexpectedEnd,
    #[error("Extraneous trailing characters")]
    UnparsedCharsRemaining,
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("Can't draw {draw} unknown cards, only {available} remain")]
    InfeasibleDrawSize { draw: usize, available: usize },
    #[error("Not enough cards: {requested} requested but only {available} available")]
    NotEnoughCards { requested: usize, available: usize },
    #[error("Unknown combination: {0}")]
    UnknownCombination(String),
}
