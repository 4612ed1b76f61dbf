//! Binomial coefficients for the Bernstein basis.

/// Returns "n choose k" or `None` if the exact value does not fit into a `u64`.
///
/// Indices outside of `0..=n` yield `Some(0)`, so summations over the
/// Bernstein basis never need to special case their boundaries.
///
/// Uses the multiplicative formula `C(n, i) = C(n, i - 1) * (n - i + 1) / i`,
/// multiplying before dividing so every step divides exactly. Intermediate
/// products are kept in `u128`, which cannot overflow for any `n` that fits an
/// `i64` as long as the previous partial result fits a `u64`.
/// The first central coefficient that does not fit is `C(68, 34)`.
pub fn checked_binomial(n: i64, k: i64) -> Option<u64> {
    if k < 0 || k > n {
        return Some(0);
    }
    // C(n, k) == C(n, n - k), iterate over the shorter side
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 1..=k as u128 {
        let factor = n as u128 - i + 1;
        result = result.checked_mul(factor)? / i;
        if result > u64::MAX as u128 {
            return None;
        }
    }
    u64::try_from(result).ok()
}
