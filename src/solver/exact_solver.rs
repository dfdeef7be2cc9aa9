use tracing::{debug, instrument, trace};

use super::{Combination, Odds, RankRequirement, Requirement};
use crate::core::{BluffError, CardSet, Rank, Suit, CARDS_PER_RANK, CARDS_PER_SUIT};

/// Exact probabilities for what will be showing once `draw` unknown cards
/// join a known hand.
///
/// The 24 card domain is split once into the known `hand` and the `remaining`
/// pool that unknown cards are drawn from without replacement. Every query is
/// a read-only count of favourable draws over all draws, so a solver can be
/// shared freely between threads.
///
/// # Example
/// ```
/// use bluff_odds::core::CardSet;
/// use bluff_odds::solver::{Combination, Odds, Solver};
///
/// let hand: CardSet = "9sTs".parse().unwrap();
/// let solver = Solver::new(hand, 3).unwrap();
///
/// // J, Q and K are all still missing and exactly three cards remain to be
/// // seen, so all three have to show up.
/// let odds = solver.odds_for(&Combination::SmallStraight);
/// assert_eq!(Odds::new(16, 385), odds.reduced());
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    /// Cards the solver already knows about.
    hand: CardSet,
    /// Everything else; the population unknown cards come from.
    remaining: CardSet,
    /// How many unknown cards will be revealed.
    draw: usize,
}

impl Solver {
    /// Create a new solver.
    ///
    /// # Arguments
    /// * `hand` - The cards already known.
    /// * `draw` - How many of the remaining cards will be revealed.
    ///
    /// # Errors
    ///
    /// `BluffError::InfeasibleDrawSize` if `draw` is larger than the number of
    /// cards outside of the hand.
    pub fn new(hand: CardSet, draw: usize) -> Result<Self, BluffError> {
        let remaining = hand.complement();
        if draw > remaining.len() {
            return Err(BluffError::InfeasibleDrawSize {
                draw,
                available: remaining.len(),
            });
        }
        debug!(%hand, draw, remaining = remaining.len(), "Creating solver");
        Ok(Self {
            hand,
            remaining,
            draw,
        })
    }

    pub fn hand(&self) -> CardSet {
        self.hand
    }

    pub fn remaining(&self) -> CardSet {
        self.remaining
    }

    pub fn draw(&self) -> usize {
        self.draw
    }

    /// Exact odds that hand plus draw meets `requirement`.
    #[instrument(level = "trace", skip(self), fields(hand = %self.hand, draw = self.draw))]
    pub fn odds(&self, requirement: &Requirement) -> Odds {
        match requirement {
            Requirement::Ranks(needs) => self.odds_ranks(needs),
            Requirement::Suit { suit, count } => self.odds_suit(*suit, *count),
            Requirement::Cards(special) => self.odds_cards(special),
        }
    }

    pub fn odds_for(&self, combination: &Combination) -> Odds {
        self.odds(&combination.requirement())
    }

    /// Probability that `combination` will hold.
    pub fn probability(&self, combination: &Combination) -> f64 {
        self.odds_for(combination).probability()
    }

    /// At least `k` cards of each named rank.
    fn odds_ranks(&self, needs: &RankRequirement) -> Odds {
        // A rank only has four cards, asking for more can never work.
        if needs.iter().any(|(_, count)| count > CARDS_PER_RANK) {
            trace!("Requirement exceeds the cards of a rank");
            return Odds::IMPOSSIBLE;
        }

        // Only the ranks the hand hasn't covered yet matter.
        let deficits: Vec<(Rank, u8)> = needs
            .iter()
            .filter_map(|(rank, count)| {
                let missing = count.saturating_sub(self.hand.count_rank(rank));
                (missing > 0).then_some((rank, missing))
            })
            .collect();

        if deficits.is_empty() {
            trace!("Hand already meets the requirement");
            return Odds::CERTAIN;
        }
        let missing: usize = deficits.iter().map(|(_, m)| *m as usize).sum();
        if missing > self.draw {
            trace!(missing, "Not enough unknown cards left");
            return Odds::IMPOSSIBLE;
        }

        let favorable = self.sum_assignments(&deficits, RankRequirement::new());
        trace!(favorable, "Counted favourable draws");
        assert!(
            favorable > 0,
            "a feasible requirement must have a favourable draw"
        );
        Odds::new(favorable, self.remaining.total_ways(self.draw))
    }

    /// Walk every joint assignment of drawn counts for the pending ranks,
    /// each from its deficit up to a full rank, and add up the exact ways.
    fn sum_assignments(&self, pending: &[(Rank, u8)], assignment: RankRequirement) -> u64 {
        match pending.split_first() {
            None => self.remaining.ways_ranks_nums(self.draw, assignment.iter()),
            Some((&(rank, deficit), rest)) => (deficit..=CARDS_PER_RANK)
                .map(|drawn| self.sum_assignments(rest, assignment.with(rank, drawn)))
                .sum(),
        }
    }

    /// At least `count` cards of `suit`.
    fn odds_suit(&self, suit: Suit, count: u8) -> Odds {
        if count > CARDS_PER_SUIT {
            trace!("Requirement exceeds the cards of a suit");
            return Odds::IMPOSSIBLE;
        }
        let missing = count.saturating_sub(self.hand.count_suit(suit)) as usize;
        if missing == 0 {
            trace!("Hand already meets the requirement");
            return Odds::CERTAIN;
        }
        if missing > self.draw {
            trace!(missing, "Not enough unknown cards left");
            return Odds::IMPOSSIBLE;
        }

        let favorable: u64 = (missing..=CARDS_PER_SUIT as usize)
            .map(|k| self.remaining.ways_suit(self.draw, suit, k))
            .sum();
        trace!(favorable, "Counted favourable draws");
        assert!(
            favorable > 0,
            "a feasible requirement must have a favourable draw"
        );
        Odds::new(favorable, self.remaining.total_ways(self.draw))
    }

    /// Every card of `special`.
    fn odds_cards(&self, special: &CardSet) -> Odds {
        let missing = special.difference(&self.hand).len();
        if missing == 0 {
            trace!("Hand already meets the requirement");
            return Odds::CERTAIN;
        }
        if missing > self.draw {
            trace!(missing, "Not enough unknown cards left");
            return Odds::IMPOSSIBLE;
        }

        // The missing cards are all in the pool, so exactly `missing` of them
        // showing up is the only way.
        let favorable = self
            .remaining
            .ways_fixed_cardset(self.draw, special, missing);
        trace!(favorable, "Counted favourable draws");
        Odds::new(favorable, self.remaining.total_ways(self.draw))
    }

    pub fn probability_high_card(&self, rank: Rank) -> f64 {
        self.probability(&Combination::HighCard(rank))
    }

    pub fn probability_pair(&self, rank: Rank) -> f64 {
        self.probability(&Combination::Pair(rank))
    }

    /// Two pairs, of `rank_a` and of `rank_b`. The ranks should differ.
    pub fn probability_two_pair(&self, rank_a: Rank, rank_b: Rank) -> f64 {
        self.probability(&Combination::TwoPair(rank_a, rank_b))
    }

    pub fn probability_three(&self, rank: Rank) -> f64 {
        self.probability(&Combination::Three(rank))
    }

    /// Three of `rank_three` and two of `rank_pair`. The ranks should differ.
    pub fn probability_full(&self, rank_three: Rank, rank_pair: Rank) -> f64 {
        self.probability(&Combination::Full(rank_three, rank_pair))
    }

    pub fn probability_quad(&self, rank: Rank) -> f64 {
        self.probability(&Combination::Quad(rank))
    }

    pub fn probability_small_straight(&self) -> f64 {
        self.probability(&Combination::SmallStraight)
    }

    pub fn probability_big_straight(&self) -> f64 {
        self.probability(&Combination::BigStraight)
    }

    /// Five or more cards of `suit`.
    pub fn probability_flush(&self, suit: Suit) -> f64 {
        self.probability(&Combination::Flush(suit))
    }

    /// The nine through king of `suit`.
    pub fn probability_small_poker(&self, suit: Suit) -> f64 {
        self.probability(&Combination::SmallPoker(suit))
    }

    /// The ten through ace of `suit`.
    pub fn probability_big_poker(&self, suit: Suit) -> f64 {
        self.probability(&Combination::BigPoker(suit))
    }
}
