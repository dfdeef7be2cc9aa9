/// card.rs has rank, suit, and card
mod card;
/// Export `Card`, `Rank`, and `Suit`
pub use self::card::{Card, Rank, Suit};

/// Deck level constants.
mod constants;
pub use self::constants::*;

/// Binomial coefficients used by every counting primitive.
mod binomial;
pub use self::binomial::binomial;

/// Immutable set of distinct cards with cached rank and suit counts.
mod card_set;
pub use self::card_set::{CardSet, CardSetIter};

/// Errors for everything in the crate.
mod error;
pub use self::error::BluffError;
