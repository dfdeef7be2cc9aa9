use std::fmt;

/// An exact probability kept as a count of favourable draws over a count of
/// all draws.
///
/// Keeping both integers lets callers compare results exactly; use
/// `probability` for the floating point value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Odds {
    /// Number of draws that satisfy the requirement.
    pub favorable: u64,
    /// Number of possible draws. Never zero.
    pub total: u64,
}

impl Odds {
    /// The requirement holds no matter what is drawn.
    pub const CERTAIN: Odds = Odds {
        favorable: 1,
        total: 1,
    };

    /// The requirement can't hold.
    pub const IMPOSSIBLE: Odds = Odds {
        favorable: 0,
        total: 1,
    };

    pub fn new(favorable: u64, total: u64) -> Self {
        debug_assert!(total > 0, "odds need at least one possible draw");
        debug_assert!(favorable <= total, "{favorable} favourable of {total}");
        Odds { favorable, total }
    }

    pub fn probability(&self) -> f64 {
        self.favorable as f64 / self.total as f64
    }

    /// The same odds with the fraction in lowest terms.
    ///
    /// # Examples
    ///
    /// ```
    /// use bluff_odds::solver::Odds;
    ///
    /// assert_eq!(Odds::new(16, 385), Odds::new(64, 1540).reduced());
    /// ```
    pub fn reduced(&self) -> Odds {
        let divisor = gcd(self.favorable, self.total);
        Odds {
            favorable: self.favorable / divisor,
            total: self.total / divisor,
        }
    }

    pub fn is_certain(&self) -> bool {
        self.favorable == self.total
    }

    pub fn is_impossible(&self) -> bool {
        self.favorable == 0
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.favorable, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced() {
        assert_eq!(Odds::new(1, 6), Odds::new(4, 24).reduced());
        assert_eq!(Odds::IMPOSSIBLE, Odds::new(0, 1540).reduced());
        assert_eq!(Odds::CERTAIN, Odds::new(7, 7).reduced());
    }

    #[test]
    fn test_probability() {
        assert_eq!(0.25, Odds::new(1, 4).probability());
        assert_eq!(1.0, Odds::CERTAIN.probability());
        assert_eq!(0.0, Odds::IMPOSSIBLE.probability());
    }

    #[test]
    fn test_flags_and_display() {
        assert!(Odds::new(3, 3).is_certain());
        assert!(Odds::new(0, 3).is_impossible());
        assert!(!Odds::new(1, 3).is_certain());
        assert_eq!("16/385", Odds::new(16, 385).to_string());
    }
}
