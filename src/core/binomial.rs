/// Number of ways to choose `k` items out of `n`.
///
/// Follows the combinatorial convention that choosing more items than exist
/// has zero ways, rather than being an error.
///
/// # Panics
///
/// Panics if the coefficient doesn't fit in a `u64` (`n` well past 60).
/// The 24 card domain never gets close.
///
/// # Examples
///
/// ```
/// use bluff_odds::core::binomial;
///
/// assert_eq!(1540, binomial(22, 3));
/// assert_eq!(0, binomial(3, 4));
/// ```
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    // Symmetry keeps the loop short and the intermediates small.
    let k = k.min(n - k) as u128;
    let n = n as u128;
    (0..k)
        .try_fold(1u128, |acc, i| acc.checked_mul(n - i).map(|wide| wide / (i + 1)))
        .and_then(|ways| u64::try_from(ways).ok())
        .unwrap_or_else(|| panic!("binomial({n}, {k}) overflows u64"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        assert_eq!(1, binomial(0, 0));
        assert_eq!(1, binomial(24, 0));
        assert_eq!(1, binomial(24, 24));
        assert_eq!(24, binomial(24, 1));
        assert_eq!(0, binomial(0, 1));
    }

    #[test]
    fn test_known_values() {
        assert_eq!(6, binomial(4, 2));
        assert_eq!(2_704_156, binomial(24, 12));
        assert_eq!(134_596, binomial(24, 6));
    }

    #[test]
    fn test_large_n() {
        assert_eq!(4_950, binomial(100, 2));
        assert_eq!(12_103_014, binomial(70, 5));
        assert_eq!(9_075_135_300, binomial(36, 18));
        // Largest central coefficient that fits in a u64.
        assert_eq!(14_226_520_737_620_288_370, binomial(67, 33));
    }

    #[test]
    #[should_panic(expected = "overflows u64")]
    fn test_overflow_panics() {
        binomial(70, 35);
    }

    #[test]
    fn test_pascal_rule() {
        for n in 1..=24 {
            for k in 1..=n {
                assert_eq!(binomial(n, k), binomial(n - 1, k - 1) + binomial(n - 1, k));
            }
        }
    }
}
