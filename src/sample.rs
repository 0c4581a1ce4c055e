//! Uniform sampling without replacement.

use crate::error::{CdsError, CdsResult};

use rand::Rng;

/// Draws `count` distinct indices from `0..n`, uniformly at random.
///
/// Runs a partial Fisher-Yates shuffle, so exactly `count` draws are made and
/// the result is returned in draw order. Fails before drawing anything when
/// `count` exceeds `n`.
pub fn sample_indices<R>(n: usize, count: usize, rng: &mut R) -> CdsResult<Vec<usize>>
where
    R: Rng + ?Sized,
{
    if count > n {
        return Err(CdsError::InsufficientRecords {
            requested: count,
            available: n,
        });
    }

    let mut pool: Vec<usize> = (0..n).collect();
    for i in 0..count {
        let j = rng.gen_range(i..n);
        pool.swap(i, j);
    }

    pool.truncate(count);
    Ok(pool)
}

/// Picks `count` distinct items from `items` in draw order.
pub fn sample<'a, T, R>(items: &'a [T], count: usize, rng: &mut R) -> CdsResult<Vec<&'a T>>
where
    R: Rng + ?Sized,
{
    Ok(sample_indices(items.len(), count, rng)?
        .into_iter()
        .map(|idx| &items[idx])
        .collect())
}
