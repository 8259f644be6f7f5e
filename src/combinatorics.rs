use crate::error::{CodecError, Result};
use itertools::Itertools;
use log::debug;

/// Largest domain for which every intermediate product of [`unrank_combination`]
/// fits in a `u128`. At 126 `C(125, 62) * 125` overflows.
pub const MAX_DOMAIN: usize = 125;

/// Exact binomial coefficient `C(n, k)`, or `None` if computing it overflows a
/// `u128`. Returns `Some(0)` when `k < 0` or `n < k`.
pub const fn checked_choose(n: i64, k: i64) -> Option<u128> {
    if k < 0 || n < k {
        return Some(0);
    }
    let k = if k < n - k { k } else { n - k };
    let mut result: u128 = 1;
    let mut i = 1;
    while i <= k {
        // result == C(n - k + i - 1, i - 1) here, so the division is exact.
        result = match result.checked_mul((n - k + i) as u128) {
            Some(product) => product / i as u128,
            None => return None,
        };
        i += 1;
    }
    Some(result)
}

/// Exact binomial coefficient `C(n, k)`; 0 when `k < 0` or `n < k`.
///
/// # Panics
/// If the coefficient overflows a `u128`, which never happens for
/// `n <= MAX_DOMAIN`. Use [`checked_choose`] for arbitrary `n`.
pub const fn choose(n: i64, k: i64) -> u128 {
    match checked_choose(n, k) {
        Some(value) => value,
        None => panic!("binomial coefficient overflows u128"),
    }
}

/// Index of a strictly ascending combination.
///
/// `n` is the domain size; every element must be below it. The result lies in
/// `[0, choose(n, sequence.len()))`.
pub fn rank_combination(sequence: &[usize], n: usize) -> Result<u128> {
    check_domain(n)?;
    if let Some(&value) = sequence.iter().find(|&&value| value >= n) {
        debug!("rejecting combination: {value} outside [0, {n})");
        return Err(CodecError::ValueOutOfDomain { value, domain: n });
    }
    if let Some(position) = sequence.iter().tuple_windows().position(|(a, b)| a >= b) {
        debug!("rejecting combination: not ascending at {}", position + 1);
        return Err(CodecError::NotStrictlyAscending {
            position: position + 1,
        });
    }

    Ok(sequence
        .iter()
        .enumerate()
        .map(|(i, &x)| choose(x as i64, i as i64 + 1))
        .sum())
}

/// The ascending combination of `length` elements from `[0, n)` whose index is
/// `index`. Inverse of [`rank_combination`].
pub fn unrank_combination(index: u128, n: usize, length: usize) -> Result<Vec<usize>> {
    check_domain(n)?;
    if length > n {
        return Err(CodecError::InvalidCombinationSize {
            expected: n,
            actual: length,
        });
    }
    let bound = choose(n as i64, length as i64);
    if index >= bound {
        debug!("rejecting index {index} for C({n}, {length}) = {bound}");
        return Err(CodecError::IndexOutOfRange { index, bound });
    }

    let mut combo = Vec::with_capacity(length);
    let mut rest = index;
    let mut remaining = length;
    let mut value = n.saturating_sub(1);
    // Number of combinations of `remaining` elements that all lie below `value`.
    let mut below = choose(value as i64, remaining as i64);

    // Once `rest` hits zero the tail is the smallest combination [0, remaining).
    while remaining > 0 && rest > 0 {
        let (v, r) = (value as u128, remaining as u128);
        if rest < below {
            below = below * (v - r) / v;
        } else {
            combo.push(value);
            rest -= below;
            below = below * r / v;
            remaining -= 1;
        }
        value -= 1;
    }

    combo.extend(0..remaining);
    combo.sort_unstable();
    Ok(combo)
}

fn check_domain(n: usize) -> Result<()> {
    if n > MAX_DOMAIN {
        return Err(CodecError::DomainTooLarge { domain: n });
    }
    Ok(())
}
