use std::fmt;
use std::str::FromStr;

use super::{Catalog, RankRequirement, Requirement};
use crate::core::{
    BluffError, Card, CardSet, Rank, Suit, BIG_STRAIGHT, FLUSH_SIZE, SMALL_STRAIGHT,
};

/// The two five rank runs that exist in a nine-to-ace deck.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Straight {
    /// Nine through king.
    Small,
    /// Ten through ace.
    Big,
}

impl Straight {
    pub fn ranks(&self) -> &'static [Rank; 5] {
        match self {
            Straight::Small => &SMALL_STRAIGHT,
            Straight::Big => &BIG_STRAIGHT,
        }
    }

    /// The five cards of this straight in `suit`.
    pub fn cards(&self, suit: Suit) -> CardSet {
        CardSet::from_bits(
            self.ranks()
                .iter()
                .fold(0, |bits, &rank| bits | 1u32 << Card::new(rank, suit).index()),
        )
    }
}

/// A named pattern players bet on.
///
/// A combination can be asked two questions: how likely it is before the
/// cards are revealed (see [`super::Solver::probability`]) and whether it
/// actually holds once they are ([`Combination::holds`]).
///
/// The two rank variants expect distinct ranks. `TwoPair` lists the higher
/// pair first; `Full` lists the three-of-a-kind rank first. Given the same
/// rank twice they fall back to `Pair` and `Three` of that rank. Only the
/// combinations listed in the [`Catalog`] can be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combination {
    /// At least one card of the rank.
    HighCard(Rank),
    /// At least two cards of the rank.
    Pair(Rank),
    /// At least two cards of each rank.
    TwoPair(Rank, Rank),
    /// Nine through king, any suits.
    SmallStraight,
    /// Ten through ace, any suits.
    BigStraight,
    /// At least three cards of the rank.
    Three(Rank),
    /// Three of the first rank and two of the second.
    Full(Rank, Rank),
    /// All four cards of the rank.
    Quad(Rank),
    /// At least five cards of the suit.
    Flush(Suit),
    /// Nine through king all in the suit.
    SmallPoker(Suit),
    /// Ten through ace all in the suit.
    BigPoker(Suit),
}

impl Combination {
    /// What the revealed cards need to contain for this combination.
    pub fn requirement(&self) -> Requirement {
        match *self {
            Combination::HighCard(rank) => RankRequirement::single(rank, 1).into(),
            Combination::Pair(rank) => RankRequirement::single(rank, 2).into(),
            Combination::TwoPair(a, b) => RankRequirement::new().with(a, 2).with(b, 2).into(),
            Combination::SmallStraight => RankRequirement::each(&SMALL_STRAIGHT, 1).into(),
            Combination::BigStraight => RankRequirement::each(&BIG_STRAIGHT, 1).into(),
            Combination::Three(rank) => RankRequirement::single(rank, 3).into(),
            Combination::Full(three, pair) => {
                RankRequirement::new().with(three, 3).with(pair, 2).into()
            }
            Combination::Quad(rank) => RankRequirement::single(rank, 4).into(),
            Combination::Flush(suit) => Requirement::Suit {
                suit,
                count: FLUSH_SIZE,
            },
            Combination::SmallPoker(suit) => Requirement::Cards(Straight::Small.cards(suit)),
            Combination::BigPoker(suit) => Requirement::Cards(Straight::Big.cards(suit)),
        }
    }

    /// Does the combination hold in these (fully revealed) cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use bluff_odds::core::{CardSet, Rank};
    /// use bluff_odds::solver::Combination;
    ///
    /// let revealed: CardSet = "AsAhKd".parse().unwrap();
    /// assert!(Combination::Pair(Rank::Ace).holds(&revealed));
    /// assert!(!Combination::Pair(Rank::King).holds(&revealed));
    /// ```
    pub fn holds(&self, cards: &CardSet) -> bool {
        self.requirement().is_met_by(cards)
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combination::HighCard(rank) => write!(f, "high_card_{rank}"),
            Combination::Pair(rank) => write!(f, "pair_{rank}"),
            Combination::TwoPair(a, b) => write!(f, "two_pair_{a}_{b}"),
            Combination::SmallStraight => write!(f, "small_straight"),
            Combination::BigStraight => write!(f, "big_straight"),
            Combination::Three(rank) => write!(f, "three_{rank}"),
            Combination::Full(three, pair) => write!(f, "full_{three}_{pair}"),
            Combination::Quad(rank) => write!(f, "quad_{rank}"),
            Combination::Flush(suit) => write!(f, "flush_{suit}"),
            Combination::SmallPoker(suit) => write!(f, "small_poker_{suit}"),
            Combination::BigPoker(suit) => write!(f, "big_poker_{suit}"),
        }
    }
}

impl FromStr for Combination {
    type Err = BluffError;

    /// Parse a catalog name such as `pair_A` or `flush_♠`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Catalog::global()
            .lookup(s)
            .map(|entry| *entry.combination())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Combination {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Combination {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
