#![no_main]

extern crate arbitrary;
extern crate bluff_odds;
extern crate libfuzzer_sys;

use bluff_odds::core::{CardSet, Rank, Suit};
use bluff_odds::solver::{Catalog, Combination, RankRequirement, Requirement, Solver};

use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub hand: CardSet,
    pub draw: u8,
    pub ranks: Vec<(Rank, u8)>,
    pub suit: Suit,
    pub suit_count: u8,
    pub special: CardSet,
}

fuzz_target!(|input: Input| {
    let available = input.hand.complement().len();
    let draw = input.draw as usize;
    let solver = match Solver::new(input.hand, draw) {
        Ok(solver) => solver,
        Err(_) => {
            assert!(draw > available);
            return;
        }
    };

    for entry in Catalog::global() {
        let odds = entry.odds(&solver);
        assert!(odds.favorable <= odds.total);
        if entry.holds(&input.hand) {
            assert!(odds.is_certain(), "{} should already hold", entry.name());
        }
        if draw == 0 && !entry.holds(&input.hand) {
            assert!(odds.is_impossible(), "{} can't change", entry.name());
        }
        assert_eq!(Some(entry.combination()), entry.name().parse::<Combination>().ok().as_ref());
    }

    let needs: RankRequirement = input.ranks.iter().copied().collect();
    for requirement in [
        Requirement::Ranks(needs),
        Requirement::Suit {
            suit: input.suit,
            count: input.suit_count,
        },
        Requirement::Cards(input.special),
    ] {
        let p = solver.odds(&requirement).probability();
        assert!((0.0..=1.0).contains(&p), "{requirement:?} gave {p}");
    }
});
