use std::fmt;
use std::ops::{BitAnd, BitOr, Sub};
use std::str::FromStr;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use super::{binomial, BluffError, Card, Rank, Suit, DECK_SIZE, NUM_RANKS, NUM_SUITS};

/// Bits of every card in the domain.
const DOMAIN_MASK: u32 = (1u32 << DECK_SIZE) - 1;

/// Bits of the four cards of the lowest rank. Shift by `4 * rank` for the
/// others.
const RANK_MASK: u32 = 0b1111;

/// Bits of every spade. Shift by the suit index for the others.
const SUIT_MASK: u32 = 0b0001_0001_0001_0001_0001_0001;

/// An immutable set of distinct cards out of the 24 card domain.
///
/// Each card is one bit, so set algebra is a single integer operation. The
/// per rank and per suit counts are computed once when the set is built and
/// never change afterwards; every counting primitive reads them.
///
/// # Examples
///
/// ```
/// use bluff_odds::core::{CardSet, Rank, Suit};
///
/// let hand: CardSet = "9sTsAhAd".parse().unwrap();
/// assert_eq!(4, hand.len());
/// assert_eq!(2, hand.count_rank(Rank::Ace));
/// assert_eq!(2, hand.count_suit(Suit::Spade));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardSet {
    bits: u32,
    rank_counts: [u8; NUM_RANKS],
    suit_counts: [u8; NUM_SUITS],
}

impl CardSet {
    /// Build a set from a list of cards.
    ///
    /// # Errors
    ///
    /// `BluffError::DuplicateCard` if any card is listed twice.
    pub fn new<I>(cards: I) -> Result<Self, BluffError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut bits = 0;
        for card in cards {
            let bit = Self::bit(card);
            if bits & bit != 0 {
                return Err(BluffError::DuplicateCard(card));
            }
            bits |= bit;
        }
        Ok(Self::from_bits(bits))
    }

    /// The set with no cards.
    pub fn empty() -> Self {
        Self::from_bits(0)
    }

    /// All 24 cards.
    pub fn full_domain() -> Self {
        Self::from_bits(DOMAIN_MASK)
    }

    /// Build from the raw bit layout (`Card::index` is the bit position).
    /// Bits past the end of the domain are ignored.
    pub fn from_bits(bits: u32) -> Self {
        let bits = bits & DOMAIN_MASK;
        let mut rank_counts = [0; NUM_RANKS];
        for (idx, count) in rank_counts.iter_mut().enumerate() {
            *count = ((bits >> (idx * NUM_SUITS)) & RANK_MASK).count_ones() as u8;
        }
        let mut suit_counts = [0; NUM_SUITS];
        for (idx, count) in suit_counts.iter_mut().enumerate() {
            *count = (bits & (SUIT_MASK << idx)).count_ones() as u8;
        }
        Self {
            bits,
            rank_counts,
            suit_counts,
        }
    }

    /// Join the cards of several hands.
    ///
    /// # Errors
    ///
    /// `BluffError::DuplicateCard` if two hands share a card.
    pub fn union_all<'a, I>(hands: I) -> Result<Self, BluffError>
    where
        I: IntoIterator<Item = &'a CardSet>,
    {
        let mut bits = 0;
        for hand in hands {
            let overlap = bits & hand.bits;
            if let Some(card) = CardSet::from_bits(overlap).iter().next() {
                return Err(BluffError::DuplicateCard(card));
            }
            bits |= hand.bits;
        }
        Ok(Self::from_bits(bits))
    }

    fn bit(card: Card) -> u32 {
        1u32 << card.index()
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn contains(&self, card: Card) -> bool {
        self.bits & Self::bit(card) != 0
    }

    pub fn is_subset(&self, other: &CardSet) -> bool {
        self.bits & !other.bits == 0
    }

    pub fn union(&self, other: &CardSet) -> CardSet {
        Self::from_bits(self.bits | other.bits)
    }

    pub fn intersection(&self, other: &CardSet) -> CardSet {
        Self::from_bits(self.bits & other.bits)
    }

    pub fn difference(&self, other: &CardSet) -> CardSet {
        Self::from_bits(self.bits & !other.bits)
    }

    /// Every card of the domain that is not in this set.
    pub fn complement(&self) -> CardSet {
        Self::from_bits(!self.bits)
    }

    /// Iterate the cards in domain order (rank major).
    pub fn iter(&self) -> CardSetIter {
        CardSetIter { bits: self.bits }
    }

    /// How many cards of `rank` are in the set (0 to 4).
    pub fn count_rank(&self, rank: Rank) -> u8 {
        self.rank_counts[rank.index()]
    }

    /// How many cards of `suit` are in the set (0 to 6).
    pub fn count_suit(&self, suit: Suit) -> u8 {
        self.suit_counts[suit.index()]
    }

    /// Ways to pick an unordered `n` card subset.
    pub fn total_ways(&self, n: usize) -> u64 {
        binomial(self.len(), n)
    }

    /// Ways to pick `n` cards holding exactly `count` cards of each named
    /// rank, with the rest of the `n` cards coming from the other ranks.
    ///
    /// A rank named more than once is constrained once, to its largest count.
    pub fn ways_ranks_nums<I>(&self, n: usize, needs: I) -> u64
    where
        I: IntoIterator<Item = (Rank, u8)>,
    {
        let mut per_rank = [None; NUM_RANKS];
        for (rank, count) in needs {
            let slot: &mut Option<u8> = &mut per_rank[rank.index()];
            *slot = Some(slot.map_or(count, |seen| seen.max(count)));
        }

        let mut ways = 1;
        let mut needed = 0;
        let mut constrained = 0;
        for (rank, count) in Rank::ALL.into_iter().zip(per_rank) {
            let Some(count) = count else { continue };
            let available = self.count_rank(rank) as usize;
            ways *= binomial(available, count as usize);
            needed += count as usize;
            constrained += available;
        }
        if needed > n {
            return 0;
        }
        ways * binomial(self.len() - constrained, n - needed)
    }

    /// Ways to pick `n` cards holding exactly `k` cards of `suit`.
    pub fn ways_suit(&self, n: usize, suit: Suit, k: usize) -> u64 {
        if k > n {
            return 0;
        }
        let suited = self.count_suit(suit) as usize;
        binomial(suited, k) * binomial(self.len() - suited, n - k)
    }

    /// Ways to pick `n` cards holding exactly `k` of the `special` cards.
    /// Only the special cards that are actually in this set can be drawn.
    pub fn ways_fixed_cardset(&self, n: usize, special: &CardSet, k: usize) -> u64 {
        if k > n {
            return 0;
        }
        let overlap = self.intersection(special).len();
        binomial(overlap, k) * binomial(self.len() - overlap, n - k)
    }

    /// Every `k` card subset of this set. There are `total_ways(k)` of them.
    pub fn combinations(&self, k: usize) -> impl Iterator<Item = CardSet> + '_ {
        SubsetIter::new(self.iter().collect(), k)
    }

    /// Pick `n` distinct cards uniformly at random.
    ///
    /// # Errors
    ///
    /// `BluffError::NotEnoughCards` when `n` is larger than the set.
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<CardSet, BluffError> {
        if n > self.len() {
            return Err(BluffError::NotEnoughCards {
                requested: n,
                available: self.len(),
            });
        }
        let cards: Vec<Card> = self.iter().collect();
        let bits = cards
            .choose_multiple(rng, n)
            .fold(0, |bits, card| bits | Self::bit(*card));
        Ok(Self::from_bits(bits))
    }

    /// Shuffle the set and split off one hand per entry of `sizes`.
    ///
    /// # Errors
    ///
    /// `BluffError::NotEnoughCards` when the hands need more cards than the
    /// set has.
    pub fn deal<R: Rng + ?Sized>(
        &self,
        sizes: &[usize],
        rng: &mut R,
    ) -> Result<Vec<CardSet>, BluffError> {
        let requested: usize = sizes.iter().sum();
        if requested > self.len() {
            return Err(BluffError::NotEnoughCards {
                requested,
                available: self.len(),
            });
        }
        let mut cards: Vec<Card> = self.iter().collect();
        cards.shuffle(rng);

        let mut remaining = &cards[..];
        let mut hands = Vec::with_capacity(sizes.len());
        for &size in sizes {
            let (hand, rest) = remaining.split_at(size);
            hands.push(Self::from_bits(
                hand.iter().fold(0, |bits, card| bits | Self::bit(*card)),
            ));
            remaining = rest;
        }
        Ok(hands)
    }
}

impl Default for CardSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in self.iter() {
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromStr for CardSet {
    type Err = BluffError;

    /// Parse concatenated cards like `9sTs` or `9♠T♠`. Whitespace and commas
    /// between cards are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .peekable();
        let mut cards = Vec::new();
        while let Some(r) = chars.next() {
            let rank = Rank::from_char(r).ok_or(BluffError::UnexpectedRankChar(r))?;
            let c = chars.next().ok_or(BluffError::UnexpectedEnd)?;
            let suit = Suit::from_char(c).ok_or(BluffError::UnexpectedSuitChar(c))?;
            cards.push(Card::new(rank, suit));
        }
        CardSet::new(cards)
    }
}

impl BitOr for CardSet {
    type Output = CardSet;

    fn bitor(self, rhs: CardSet) -> CardSet {
        self.union(&rhs)
    }
}

impl BitAnd for CardSet {
    type Output = CardSet;

    fn bitand(self, rhs: CardSet) -> CardSet {
        self.intersection(&rhs)
    }
}

impl Sub for CardSet {
    type Output = CardSet;

    fn sub(self, rhs: CardSet) -> CardSet {
        self.difference(&rhs)
    }
}

impl<'a> IntoIterator for &'a CardSet {
    type Item = Card;
    type IntoIter = CardSetIter;

    fn into_iter(self) -> CardSetIter {
        self.iter()
    }
}

/// Iterator over the cards of a `CardSet`, lowest index first.
#[derive(Debug, Clone)]
pub struct CardSetIter {
    bits: u32,
}

impl Iterator for CardSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the lowest set bit.
        self.bits &= self.bits - 1;
        Card::from_index(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for CardSetIter {}

/// Walks every `num_cards` subset of a slice of cards in lexicographic index
/// order.
#[derive(Debug)]
struct SubsetIter {
    possible_cards: Vec<Card>,
    /// Current offsets into `possible_cards`; `None` once exhausted.
    idx: Option<Vec<usize>>,
}

impl SubsetIter {
    fn new(possible_cards: Vec<Card>, num_cards: usize) -> Self {
        let idx = if num_cards <= possible_cards.len() {
            Some((0..num_cards).collect())
        } else {
            None
        };
        SubsetIter {
            possible_cards,
            idx,
        }
    }

    /// Move the offsets to the next subset, or mark the iterator done.
    fn advance(&mut self) {
        let total = self.possible_cards.len();
        let Some(idx) = self.idx.as_mut() else {
            return;
        };
        let num_cards = idx.len();
        // Find the right-most offset that still has room to move.
        let level = (0..num_cards)
            .rev()
            .find(|&level| idx[level] < total - (num_cards - level));
        match level {
            Some(level) => {
                idx[level] += 1;
                for next in level + 1..num_cards {
                    idx[next] = idx[next - 1] + 1;
                }
            }
            None => self.idx = None,
        }
    }
}

impl Iterator for SubsetIter {
    type Item = CardSet;

    fn next(&mut self) -> Option<CardSet> {
        let bits = self
            .idx
            .as_ref()?
            .iter()
            .fold(0, |bits, &i| bits | CardSet::bit(self.possible_cards[i]));
        self.advance();
        Some(CardSet::from_bits(bits))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CardSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CardSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for CardSet {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(CardSet::from_bits(u32::arbitrary(u)?))
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn set(s: &str) -> CardSet {
        s.parse().unwrap()
    }

    #[test]
    fn test_full_domain_counts() {
        let full = CardSet::full_domain();
        assert_eq!(DECK_SIZE, full.len());
        for rank in Rank::ALL {
            assert_eq!(4, full.count_rank(rank));
        }
        for suit in Suit::ALL {
            assert_eq!(6, full.count_suit(suit));
        }
    }

    #[test]
    fn test_duplicate_card_rejected() {
        let ace = Card::new(Rank::Ace, Suit::Spade);
        assert_eq!(
            Err(BluffError::DuplicateCard(ace)),
            CardSet::new(vec![ace, Card::new(Rank::Ten, Suit::Club), ace])
        );
        assert_eq!(Err(BluffError::DuplicateCard(ace)), "AsTcA♠".parse::<CardSet>());
    }

    #[test]
    fn test_parse_and_display() {
        let hand = set("9s, T♠ Ah");
        assert_eq!(3, hand.len());
        assert_eq!("9♠T♠A♥", hand.to_string());
        assert_eq!(Err(BluffError::UnexpectedEnd), "9sT".parse::<CardSet>());
        assert!(set("").is_empty());
    }

    #[test]
    fn test_iter_domain_order() {
        let hand = set("AhKd9c");
        let cards: Vec<Card> = hand.iter().collect();
        assert_eq!(
            vec![
                Card::new(Rank::Nine, Suit::Club),
                Card::new(Rank::King, Suit::Diamond),
                Card::new(Rank::Ace, Suit::Heart),
            ],
            cards
        );
        assert_eq!(3, hand.iter().len());
    }

    #[test]
    fn test_set_algebra() {
        let a = set("9sTsJs");
        let b = set("JsQs");
        assert_eq!(set("9sTsJsQs"), a | b);
        assert_eq!(set("Js"), a & b);
        assert_eq!(set("9sTs"), a - b);
        assert_eq!(21, a.complement().len());
        assert!((a & b).is_subset(&a));
        assert!(!a.is_subset(&b));
        assert!(a.intersection(&a.complement()).is_empty());
        assert_eq!(CardSet::full_domain(), a.union(&a.complement()));
    }

    #[test]
    fn test_counts_follow_cards() {
        let hand = set("AsAhAdKs");
        assert_eq!(3, hand.count_rank(Rank::Ace));
        assert_eq!(1, hand.count_rank(Rank::King));
        assert_eq!(0, hand.count_rank(Rank::Nine));
        assert_eq!(2, hand.count_suit(Suit::Spade));
        assert_eq!(0, hand.count_suit(Suit::Club));
    }

    #[test]
    fn test_total_ways() {
        let pool = set("9sTs").complement();
        assert_eq!(1540, pool.total_ways(3));
        assert_eq!(1, pool.total_ways(0));
        assert_eq!(0, pool.total_ways(23));
    }

    #[test]
    fn test_ways_ranks_nums_matches_brute_force() {
        let pool = set("9sTsAh").complement();
        let needs = [(Rank::Jack, 1), (Rank::Ace, 2)];
        let expected = pool
            .combinations(5)
            .filter(|draw| draw.count_rank(Rank::Jack) == 1 && draw.count_rank(Rank::Ace) == 2)
            .count() as u64;
        assert_eq!(expected, pool.ways_ranks_nums(5, needs));
    }

    #[test]
    fn test_ways_ranks_nums_repeated_rank() {
        let pool = CardSet::full_domain();
        let one_ace = pool
            .combinations(2)
            .filter(|draw| draw.count_rank(Rank::Ace) == 1)
            .count() as u64;
        assert_eq!(80, one_ace);
        assert_eq!(one_ace, pool.ways_ranks_nums(2, [(Rank::Ace, 1), (Rank::Ace, 1)]));
        assert_eq!(
            pool.ways_ranks_nums(3, [(Rank::Ace, 2)]),
            pool.ways_ranks_nums(3, [(Rank::Ace, 1), (Rank::Ace, 2)])
        );
        assert_eq!(1, pool.ways_ranks_nums(0, [(Rank::Ace, 0); 7]));
    }

    #[test]
    fn test_ways_ranks_nums_over_budget() {
        let pool = CardSet::full_domain();
        assert_eq!(0, pool.ways_ranks_nums(2, [(Rank::Ace, 2), (Rank::King, 1)]));
        // More of a rank than the set holds.
        let pool = set("AsAh").complement();
        assert_eq!(0, pool.ways_ranks_nums(4, [(Rank::Ace, 3)]));
    }

    #[test]
    fn test_ways_ranks_nums_small_straight_scenario() {
        let pool = set("9sTs").complement();
        let needs = [(Rank::Jack, 1), (Rank::Queen, 1), (Rank::King, 1)];
        assert_eq!(64, pool.ways_ranks_nums(3, needs));
    }

    #[test]
    fn test_ways_suit_matches_brute_force() {
        let pool = set("AsKsKh").complement();
        for k in 0..=4 {
            let expected = pool
                .combinations(4)
                .filter(|draw| draw.count_suit(Suit::Spade) as usize == k)
                .count() as u64;
            assert_eq!(expected, pool.ways_suit(4, Suit::Spade, k));
        }
        assert_eq!(0, pool.ways_suit(2, Suit::Spade, 3));
    }

    #[test]
    fn test_ways_fixed_cardset() {
        let special = set("9♥T♥J♥Q♥K♥");
        let pool = set("9♥T♥").complement();
        // Exactly the three missing cards plus one other.
        assert_eq!(19, pool.ways_fixed_cardset(4, &special, 3));
        let expected = pool
            .combinations(4)
            .filter(|draw| draw.intersection(&special).len() == 3)
            .count() as u64;
        assert_eq!(expected, pool.ways_fixed_cardset(4, &special, 3));
        assert_eq!(0, pool.ways_fixed_cardset(2, &special, 3));
    }

    #[test]
    fn test_combinations_count() {
        let pool = set("9sTsJs").complement();
        for k in 0..=4 {
            assert_eq!(pool.total_ways(k), pool.combinations(k).count() as u64);
        }
        assert_eq!(1, pool.combinations(pool.len()).count());
        assert_eq!(0, pool.combinations(pool.len() + 1).count());
        for subset in pool.combinations(2) {
            assert_eq!(2, subset.len());
            assert!(subset.is_subset(&pool));
        }
    }

    #[test]
    fn test_sample() {
        let mut rng = StdRng::seed_from_u64(420);
        let pool = set("AsAh").complement();
        for n in 0..=pool.len() {
            let drawn = pool.sample(n, &mut rng).unwrap();
            assert_eq!(n, drawn.len());
            assert!(drawn.is_subset(&pool));
        }
        assert_eq!(
            Err(BluffError::NotEnoughCards {
                requested: 23,
                available: 22
            }),
            pool.sample(23, &mut rng)
        );
    }

    #[test]
    fn test_deal_disjoint_hands() {
        let mut rng = StdRng::seed_from_u64(7);
        let hands = CardSet::full_domain().deal(&[1, 2, 3, 5], &mut rng).unwrap();
        assert_eq!(
            vec![1, 2, 3, 5],
            hands.iter().map(CardSet::len).collect::<Vec<_>>()
        );
        let joined = CardSet::union_all(&hands).unwrap();
        assert_eq!(11, joined.len());

        assert!(CardSet::full_domain().deal(&[20, 5], &mut rng).is_err());
    }

    #[test]
    fn test_union_all_rejects_shared_card() {
        let a = set("AsKs");
        let b = set("Ks9h");
        assert_eq!(
            Err(BluffError::DuplicateCard(Card::new(Rank::King, Suit::Spade))),
            CardSet::union_all([&a, &b])
        );
    }

    #[test]
    fn test_from_bits_masks_outside_domain() {
        let s = CardSet::from_bits(u32::MAX);
        assert_eq!(CardSet::full_domain(), s);
    }
}
