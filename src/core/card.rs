use std::fmt;
use std::str::FromStr;

use super::BluffError;

/// Card rank or face value.
/// This is the number or letter printed on the card.
///
/// Only six ranks exist in this deck. They are totally ordered with
/// `Nine` lowest and `Ace` highest.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Rank {
    /// Nine
    Nine = 0,
    /// Ten
    Ten = 1,
    /// Jack
    Jack = 2,
    /// Queen
    Queen = 3,
    /// King
    King = 4,
    /// Ace
    Ace = 5,
}

impl Rank {
    /// Every rank in ascending order.
    pub const ALL: [Rank; 6] = [
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Position of the rank in `Rank::ALL`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Convert a character into a rank.
    ///
    /// # Examples
    ///
    /// ```
    /// use bluff_odds::core::Rank;
    ///
    /// assert_eq!(Some(Rank::Ten), Rank::from_char('T'));
    /// assert_eq!(None, Rank::from_char('8'));
    /// ```
    pub fn from_char(c: char) -> Option<Rank> {
        match c {
            '9' => Some(Rank::Nine),
            'T' | 't' => Some(Rank::Ten),
            'J' | 'j' => Some(Rank::Jack),
            'Q' | 'q' => Some(Rank::Queen),
            'K' | 'k' => Some(Rank::King),
            'A' | 'a' => Some(Rank::Ace),
            _ => None,
        }
    }

    /// The canonical character for this rank.
    pub fn to_char(self) -> char {
        match self {
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Rank {
    type Err = BluffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let c = chars.next().ok_or(BluffError::UnexpectedEnd)?;
        let rank = Rank::from_char(c).ok_or(BluffError::UnexpectedRankChar(c))?;
        if chars.next().is_some() {
            return Err(BluffError::UnparsedCharsRemaining);
        }
        Ok(rank)
    }
}

/// Enum for the four different suits.
///
/// Suits carry no ranking. The declaration order only fixes the order in
/// which per-suit combinations appear in the catalog.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Diamonds
    Diamond = 2,
    /// Hearts
    Heart = 3,
}

impl Suit {
    /// Every suit in catalog order.
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Diamond, Suit::Heart];

    /// Position of the suit in `Suit::ALL`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Convert a symbol or an ascii letter into a suit.
    ///
    /// # Examples
    ///
    /// ```
    /// use bluff_odds::core::Suit;
    ///
    /// assert_eq!(Some(Suit::Heart), Suit::from_char('♥'));
    /// assert_eq!(Some(Suit::Heart), Suit::from_char('h'));
    /// ```
    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            '♠' | 's' | 'S' => Some(Suit::Spade),
            '♣' | 'c' | 'C' => Some(Suit::Club),
            '♦' | 'd' | 'D' => Some(Suit::Diamond),
            '♥' | 'h' | 'H' => Some(Suit::Heart),
            _ => None,
        }
    }

    /// The unicode symbol for this suit.
    pub fn to_char(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Club => '♣',
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Suit {
    type Err = BluffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let c = chars.next().ok_or(BluffError::UnexpectedEnd)?;
        let suit = Suit::from_char(c).ok_or(BluffError::UnexpectedSuitChar(c))?;
        if chars.next().is_some() {
            return Err(BluffError::UnparsedCharsRemaining);
        }
        Ok(suit)
    }
}

/// The main struct of this library.
/// This is a carrier for Rank and Suit.
///
/// Cards are immutable values and the 24 of them are the whole domain.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub rank: Rank,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    /// Index of the card in the 24 card domain.
    ///
    /// Cards are laid out rank major, so all four nines come first.
    pub const fn index(self) -> usize {
        self.rank.index() * super::NUM_SUITS + self.suit.index()
    }

    /// Inverse of `Card::index`. Returns `None` past the end of the domain.
    pub fn from_index(idx: usize) -> Option<Card> {
        let rank = *Rank::ALL.get(idx / super::NUM_SUITS)?;
        let suit = Suit::ALL[idx % super::NUM_SUITS];
        Some(Card { rank, suit })
    }

    pub fn is_rank(&self, rank: Rank) -> bool {
        self.rank == rank
    }

    pub fn is_suit(&self, suit: Suit) -> bool {
        self.suit == suit
    }

    /// Is `rank` strictly higher than this card's rank.
    pub fn is_rank_higher(&self, rank: Rank) -> bool {
        rank > self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = BluffError;

    /// Parse a card such as `A♠` or `As`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let r = chars.next().ok_or(BluffError::UnexpectedEnd)?;
        let rank = Rank::from_char(r).ok_or(BluffError::UnexpectedRankChar(r))?;
        let c = chars.next().ok_or(BluffError::UnexpectedEnd)?;
        let suit = Suit::from_char(c).ok_or(BluffError::UnexpectedSuitChar(c))?;
        if chars.next().is_some() {
            return Err(BluffError::UnparsedCharsRemaining);
        }
        Ok(Card { rank, suit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DECK_SIZE;

    #[test]
    fn test_rank_ordering() {
        assert!(Rank::Nine < Rank::Ten);
        assert!(Rank::King < Rank::Ace);
        let mut sorted = Rank::ALL;
        sorted.sort();
        assert_eq!(Rank::ALL, sorted);
    }

    #[test]
    fn test_rank_char_round_trip() {
        for rank in Rank::ALL {
            assert_eq!(Some(rank), Rank::from_char(rank.to_char()));
        }
        assert_eq!(None, Rank::from_char('2'));
    }

    #[test]
    fn test_suit_ascii_and_symbol() {
        assert_eq!(Some(Suit::Spade), Suit::from_char('s'));
        assert_eq!(Some(Suit::Club), Suit::from_char('♣'));
        assert_eq!(Some(Suit::Diamond), Suit::from_char('D'));
        assert_eq!(None, Suit::from_char('x'));
    }

    #[test]
    fn test_index_round_trip() {
        for idx in 0..DECK_SIZE {
            let card = Card::from_index(idx).unwrap();
            assert_eq!(idx, card.index());
        }
        assert_eq!(None, Card::from_index(DECK_SIZE));
    }

    #[test]
    fn test_parse_card() {
        let c: Card = "As".parse().unwrap();
        assert_eq!(Card::new(Rank::Ace, Suit::Spade), c);
        let c: Card = "T♥".parse().unwrap();
        assert_eq!(Card::new(Rank::Ten, Suit::Heart), c);
        assert_eq!("T♥", c.to_string());
    }

    #[test]
    fn test_parse_card_errors() {
        assert_eq!(Err(BluffError::UnexpectedRankChar('2')), "2s".parse::<Card>());
        assert_eq!(Err(BluffError::UnexpectedSuitChar('x')), "Ax".parse::<Card>());
        assert_eq!(Err(BluffError::UnexpectedEnd), "A".parse::<Card>());
        assert_eq!(Err(BluffError::UnparsedCharsRemaining), "Ass".parse::<Card>());
    }

    #[test]
    fn test_rank_higher() {
        let c = Card::new(Rank::Jack, Suit::Club);
        assert!(c.is_rank_higher(Rank::Queen));
        assert!(!c.is_rank_higher(Rank::Jack));
        assert!(!c.is_rank_higher(Rank::Nine));
        assert!(c.is_rank(Rank::Jack));
        assert!(c.is_suit(Suit::Club));
    }
}
