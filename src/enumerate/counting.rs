//! Closed-form sizes of each enumeration, used for progress logging.
//! Saturates instead of overflowing.

pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 0..k {
        // Exact at every step: result * (n - i) is divisible by (i + 1)
        result = result.saturating_mul((n - i) as u64) / (i as u64 + 1);
    }
    result
}

pub fn factorial(n: usize) -> u64 {
    (1..=n as u64).fold(1, |acc, x| acc.saturating_mul(x))
}

pub fn catalan(n: usize) -> u64 {
    binomial(2 * n, n) / (n as u64 + 1)
}

/// Number of token streams enumerated for one subset size `m` of a bag of
/// `n`: C(n, m) * m! * 4^(m-1) * Catalan(m-1)
pub fn streams_for_size(n: usize, m: usize) -> u64 {
    if m == 0 || m > n {
        return 0;
    }
    let operators = 4u64.saturating_pow((m - 1) as u32);
    binomial(n, m)
        .saturating_mul(factorial(m))
        .saturating_mul(operators)
        .saturating_mul(catalan(m - 1))
}
