//! The ordered list of every combination a player can bet on.
//!
//! Position in the catalog is the strength of a bet: a new bet has to sit
//! later in the catalog than the one before it. The order is
//!
//! 1. high card, by ascending rank
//! 2. pair, by ascending rank
//! 3. two pair, higher pair first, ordered by that higher then the lower rank
//! 4. small straight
//! 5. big straight
//! 6. three of a kind, by ascending rank
//! 7. full house, every two distinct ranks, three-rank then pair-rank
//! 8. quad, by ascending rank
//! 9. flush, per suit
//! 10. small poker, per suit
//! 11. big poker, per suit
//!
//! Once published this order must not change.
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use super::{Combination, Odds, Requirement, Solver};
use crate::core::{BluffError, CardSet, Rank, Suit};

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// One catalog slot: the combination, its name and the requirement the
/// solver evaluates for it.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    combination: Combination,
    name: String,
    requirement: Requirement,
}

impl CatalogEntry {
    fn new(combination: Combination) -> Self {
        Self {
            combination,
            name: combination.to_string(),
            requirement: combination.requirement(),
        }
    }

    pub fn combination(&self) -> &Combination {
        &self.combination
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn requirement(&self) -> &Requirement {
        &self.requirement
    }

    /// Exact odds of this entry for the solver's hand and draw.
    pub fn odds(&self, solver: &Solver) -> Odds {
        solver.odds(&self.requirement)
    }

    /// Does the entry hold in the revealed cards.
    pub fn holds(&self, cards: &CardSet) -> bool {
        self.requirement.is_met_by(cards)
    }
}

/// One row of a probability table.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombinationOdds {
    pub combination: Combination,
    pub odds: Odds,
    pub probability: f64,
}

/// Every combination in strength order.
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_name: HashMap<String, usize>,
    by_combination: HashMap<Combination, usize>,
}

impl Catalog {
    /// The catalog shared by the whole process. Built on first use.
    pub fn global() -> &'static Catalog {
        CATALOG.get_or_init(Catalog::build)
    }

    fn build() -> Catalog {
        let mut combinations = Vec::new();
        combinations.extend(Rank::ALL.map(Combination::HighCard));
        combinations.extend(Rank::ALL.map(Combination::Pair));
        combinations.extend(
            Self::rank_pairs()
                .filter(|(a, b)| a > b)
                .map(|(a, b)| Combination::TwoPair(a, b)),
        );
        combinations.push(Combination::SmallStraight);
        combinations.push(Combination::BigStraight);
        combinations.extend(Rank::ALL.map(Combination::Three));
        combinations.extend(Self::rank_pairs().map(|(a, b)| Combination::Full(a, b)));
        combinations.extend(Rank::ALL.map(Combination::Quad));
        combinations.extend(Suit::ALL.map(Combination::Flush));
        combinations.extend(Suit::ALL.map(Combination::SmallPoker));
        combinations.extend(Suit::ALL.map(Combination::BigPoker));

        let entries: Vec<CatalogEntry> = combinations.into_iter().map(CatalogEntry::new).collect();
        let by_name = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.name.clone(), idx))
            .collect();
        let by_combination = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.combination, idx))
            .collect();
        debug!(entries = entries.len(), "Built combination catalog");
        Catalog {
            entries,
            by_name,
            by_combination,
        }
    }

    /// Every ordered pair of distinct ranks, first rank major.
    fn rank_pairs() -> impl Iterator<Item = (Rank, Rank)> {
        Rank::ALL
            .into_iter()
            .flat_map(|a| Rank::ALL.into_iter().map(move |b| (a, b)))
            .filter(|(a, b)| a != b)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn get(&self, position: usize) -> Option<&CatalogEntry> {
        self.entries.get(position)
    }

    /// Strength of a combination; `None` when it isn't a catalog entry
    /// (for example a two pair with the lower rank first).
    pub fn position(&self, combination: &Combination) -> Option<usize> {
        self.by_combination.get(combination).copied()
    }

    /// Find an entry by name.
    ///
    /// # Errors
    ///
    /// `BluffError::UnknownCombination` when no entry has that name.
    pub fn lookup(&self, name: &str) -> Result<&CatalogEntry, BluffError> {
        self.by_name
            .get(name)
            .map(|&idx| &self.entries[idx])
            .ok_or_else(|| BluffError::UnknownCombination(name.to_string()))
    }

    /// Compare two combinations by strength. `None` if either is not in the
    /// catalog.
    pub fn compare(&self, a: &Combination, b: &Combination) -> Option<Ordering> {
        Some(self.position(a)?.cmp(&self.position(b)?))
    }

    /// Whether `candidate` is a strictly stronger bet than `previous`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bluff_odds::core::Rank;
    /// use bluff_odds::solver::{Catalog, Combination};
    ///
    /// let catalog = Catalog::global();
    /// assert!(catalog.is_stronger(&Combination::Pair(Rank::Nine), &Combination::HighCard(Rank::Ace)));
    /// assert!(!catalog.is_stronger(&Combination::Pair(Rank::Nine), &Combination::Pair(Rank::Nine)));
    /// ```
    pub fn is_stronger(&self, candidate: &Combination, previous: &Combination) -> bool {
        self.compare(candidate, previous) == Some(Ordering::Greater)
    }

    /// The full probability table for a solver, in catalog order.
    pub fn odds(&self, solver: &Solver) -> Vec<CombinationOdds> {
        self.entries
            .iter()
            .map(|entry| {
                let odds = entry.odds(solver);
                CombinationOdds {
                    combination: entry.combination,
                    odds,
                    probability: odds.probability(),
                }
            })
            .collect()
    }

    /// Every entry that holds in the revealed cards, weakest first.
    pub fn holding<'a>(&'a self, cards: &'a CardSet) -> impl Iterator<Item = &'a CatalogEntry> {
        self.entries.iter().filter(move |entry| entry.holds(cards))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
