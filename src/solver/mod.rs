/// Exact favourable / total counts.
mod odds;
/// Export `Odds`
pub use self::odds::Odds;

/// Declarative requirements: per rank minimums, suit minimums and fixed
/// card sets.
mod requirement;
/// Export `Requirement` and `RankRequirement`
pub use self::requirement::{RankRequirement, Requirement};

/// The eleven combination categories and their parameters.
mod combination;
/// Export `Combination` and `Straight`
pub use self::combination::{Combination, Straight};

/// Module for the solver that turns a hand and a draw size into exact
/// probabilities.
mod exact_solver;
/// Export `Solver`
pub use self::exact_solver::Solver;

/// The ordered list of every combination a player can bet on.
mod catalog;
/// Export `Catalog` and friends
pub use self::catalog::{Catalog, CatalogEntry, CombinationOdds};
