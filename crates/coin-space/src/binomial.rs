/// Number of ways to choose `k` successes among `n` flips.
///
/// Returns `Some(0)` when `k > n` and `None` when the coefficient does not fit
/// in a `u64`. The running product is kept in 128 bits and divided at every
/// step, so each intermediate value is a binomial coefficient times at most `n`.
pub fn binomial_coefficient(n: u32, k: u32) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        result = result.checked_mul(u128::from(n - i))? / u128::from(i + 1);
    }
    u64::try_from(result).ok()
}
