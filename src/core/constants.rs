use super::Rank;

/// Number of distinct ranks (nine through ace).
pub const NUM_RANKS: usize = 6;

/// Number of distinct suits.
pub const NUM_SUITS: usize = 4;

/// Every card in the domain.
pub const DECK_SIZE: usize = NUM_RANKS * NUM_SUITS;

/// How many cards share a rank (one per suit).
pub const CARDS_PER_RANK: u8 = NUM_SUITS as u8;

/// How many cards share a suit (one per rank).
pub const CARDS_PER_SUIT: u8 = NUM_RANKS as u8;

/// Cards of one suit needed for a flush.
pub const FLUSH_SIZE: u8 = 5;

/// Ranks of the small straight.
pub const SMALL_STRAIGHT: [Rank; 5] = [Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King];

/// Ranks of the big straight.
pub const BIG_STRAIGHT: [Rank; 5] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];
