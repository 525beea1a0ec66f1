/// Returns the number of k-element subsets of an n-element set, "n choose k".
///
/// Defined as 0 when `n < k`: there are no k-subsets of a smaller set.
/// Callers rely on this instead of treating it as an error.
///
/// The accumulation multiplies and divides in an order that keeps every
/// intermediate value an exact integer, so the result is exact for the whole
/// range this crate cares about (up to `choose(52, 7)` and well beyond).
pub fn choose(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: usize = 1;
    for i in 1..=k {
        result = result * (n - (k - i)) / i;
    }
    result
}

/// Returns the number of k-element multisets drawable from an n-element set,
/// "n multichoose k", defined as `choose(n + k - 1, k)`.
///
/// `multichoose(0, k)` is 0 for k > 0 (nothing to draw from) and 1 for k = 0
/// (the empty multiset). The saturating subtraction keeps the n = 0, k = 0
/// case from underflowing.
pub fn multichoose(n: usize, k: usize) -> usize {
    choose((n + k).saturating_sub(1), k)
}

/// Returns the largest n such that `choose(n, k) <= limit`.
///
/// `choose(n, k)` is non-decreasing in n for fixed k, so a linear scan upward
/// from the smallest candidate terminates at the answer.
fn largest_n(k: usize, limit: usize) -> usize {
    let mut n = k - 1;
    while choose(n + 1, k) <= limit {
        n += 1;
    }
    n
}

/// Returns the k-combination at position `pos` under the combinatorial number
/// system ordering. The elements are strictly decreasing.
///
/// Greedily peels off the largest n with `choose(n, k) <= pos`, subtracts that
/// coefficient and recurses on k - 1. Repeated over [0, choose(n, k)) this is
/// a bijection onto all k-combinations of [0, n).
///
/// `k = 0` yields the empty combination. Positions at or beyond the caller's
/// combination space simply decode to combinations with larger elements; the
/// caller is responsible for staying inside its universe.
pub fn k_combination(k: usize, mut pos: usize) -> Vec<usize> {
    let mut combination = Vec::with_capacity(k);
    for k in (1..=k).rev() {
        let n = largest_n(k, pos);
        pos -= choose(n, k);
        combination.push(n);
    }
    combination
}

/// Returns the position of a strictly-decreasing combination under the
/// combinatorial number system ordering. Inverse of [`k_combination`].
pub fn rank_combination(combination: &[usize]) -> usize {
    let k = combination.len();
    combination
        .iter()
        .enumerate()
        .map(|(i, &c)| choose(c, k - i))
        .sum()
}
