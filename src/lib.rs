//! This is a library to compute exact draw odds for the 24 card deck
//! (nine through ace, four suits) used by bluff betting games.
//!
//! # Core
//!
//! The core module contains the basic values: [`core::Rank`],
//! [`core::Suit`], [`core::Card`] and the [`core::CardSet`] that knows how
//! many ways there are to draw cards out of it.
//!
//! # Solver
//!
//! The solver module turns a known hand and a number of unknown cards into
//! exact probabilities for every combination in the
//! [`solver::Catalog`].
//!
//! ```
//! use bluff_odds::core::{CardSet, Rank};
//! use bluff_odds::solver::Solver;
//!
//! let hand: CardSet = "9sTs".parse().unwrap();
//! let solver = Solver::new(hand, 3).unwrap();
//!
//! assert!(solver.probability_small_straight() > 0.0);
//! assert_eq!(0.0, solver.probability_quad(Rank::Ace));
//! ```
#![deny(clippy::all)]

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to the exact probability engine.
pub mod core;

/// The exact probability engine and the ordered combination catalog.
pub mod solver;
