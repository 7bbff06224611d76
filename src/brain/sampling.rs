//! Weighted selection over integer bead counts

use rand::Rng;

/// Sum of a bead vector.
pub fn total(weights: &[i64]) -> i64 {
    weights.iter().sum()
}

/// Pick an index with probability proportional to its weight.
///
/// Draws `r` uniformly from `1..=total` and walks the weights subtracting
/// each one, returning the first index at which `r` reaches zero or below.
/// Returns `None` when the total is not positive.
pub fn weighted_index<R: Rng>(rng: &mut R, weights: &[i64]) -> Option<usize> {
    let sum = total(weights);
    if sum <= 0 {
        return None;
    }

    let mut remaining = rng.random_range(1..=sum);
    for (index, &weight) in weights.iter().enumerate() {
        remaining -= weight;
        if remaining <= 0 {
            return Some(index);
        }
    }

    // Unreachable for a positive total: the running value ends at r - sum <= 0.
    Some(weights.len() - 1)
}
