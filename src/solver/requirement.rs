use crate::core::{CardSet, Rank, Suit, NUM_RANKS};

/// Minimum number of cards needed for each named rank.
///
/// The requirement is stored per rank, so a rank can never be named twice.
/// Naming a rank again keeps the larger count: at least three aces and at
/// least two aces is just at least three aces.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RankRequirement {
    needs: [Option<u8>; NUM_RANKS],
}

impl RankRequirement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(rank: Rank, count: u8) -> Self {
        Self::new().with(rank, count)
    }

    /// Require `count` cards of every one of `ranks`.
    pub fn each(ranks: &[Rank], count: u8) -> Self {
        ranks.iter().fold(Self::new(), |req, &rank| req.with(rank, count))
    }

    /// Require at least `count` cards of `rank` as well.
    pub fn with(mut self, rank: Rank, count: u8) -> Self {
        let slot = &mut self.needs[rank.index()];
        *slot = Some(slot.map_or(count, |seen| seen.max(count)));
        self
    }

    pub fn get(&self, rank: Rank) -> Option<u8> {
        self.needs[rank.index()]
    }

    /// Every named rank with its count, in ascending rank order.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        Rank::ALL
            .iter()
            .filter_map(|&rank| self.get(rank).map(|count| (rank, count)))
    }

    /// Sum of all the counts.
    pub fn total(&self) -> usize {
        self.iter().map(|(_, count)| count as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.needs.iter().all(Option::is_none)
    }

    pub fn is_met_by(&self, cards: &CardSet) -> bool {
        self.iter().all(|(rank, count)| cards.count_rank(rank) >= count)
    }
}

impl FromIterator<(Rank, u8)> for RankRequirement {
    fn from_iter<T: IntoIterator<Item = (Rank, u8)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |req, (rank, count)| req.with(rank, count))
    }
}

/// What a set of cards must contain for a combination to hold.
///
/// The solver has one exact algorithm per variant and doesn't care which
/// named combination a requirement came from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// At least the given number of cards of every named rank.
    Ranks(RankRequirement),
    /// At least `count` cards of `suit`.
    Suit { suit: Suit, count: u8 },
    /// Every one of these specific cards.
    Cards(CardSet),
}

impl Requirement {
    /// Exact membership check against fully revealed cards.
    pub fn is_met_by(&self, cards: &CardSet) -> bool {
        match self {
            Requirement::Ranks(needs) => needs.is_met_by(cards),
            Requirement::Suit { suit, count } => cards.count_suit(*suit) >= *count,
            Requirement::Cards(special) => special.is_subset(cards),
        }
    }
}

impl From<RankRequirement> for Requirement {
    fn from(needs: RankRequirement) -> Self {
        Requirement::Ranks(needs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_requirement_iter_is_sorted() {
        let req = RankRequirement::new()
            .with(Rank::Ace, 2)
            .with(Rank::Nine, 3);
        assert_eq!(
            vec![(Rank::Nine, 3), (Rank::Ace, 2)],
            req.iter().collect::<Vec<_>>()
        );
        assert_eq!(5, req.total());
        assert_eq!(None, req.get(Rank::King));
    }

    #[test]
    fn test_repeated_rank_keeps_largest() {
        let req: RankRequirement = [(Rank::Ace, 3), (Rank::Ace, 2)].into_iter().collect();
        assert_eq!(Some(3), req.get(Rank::Ace));
        assert_eq!(1, req.iter().count());
        assert_eq!(
            RankRequirement::single(Rank::King, 2),
            RankRequirement::new()
                .with(Rank::King, 2)
                .with(Rank::King, 2)
        );
    }

    #[test]
    fn test_zero_count_is_named() {
        let req = RankRequirement::single(Rank::Ten, 0);
        assert!(!req.is_empty());
        assert_eq!(Some(0), req.get(Rank::Ten));
        assert!(req.is_met_by(&CardSet::empty()));
    }

    #[test]
    fn test_is_met_by() {
        let cards: CardSet = "AsAhKsKd9c".parse().unwrap();
        assert!(RankRequirement::new()
            .with(Rank::Ace, 2)
            .with(Rank::King, 2)
            .is_met_by(&cards));
        assert!(!RankRequirement::single(Rank::Ace, 3).is_met_by(&cards));

        let flush = Requirement::Suit {
            suit: Suit::Spade,
            count: 2,
        };
        assert!(flush.is_met_by(&cards));

        let special: CardSet = "AsKs".parse().unwrap();
        assert!(Requirement::Cards(special).is_met_by(&cards));
        let special: CardSet = "AsQs".parse().unwrap();
        assert!(!Requirement::Cards(special).is_met_by(&cards));
    }
}
