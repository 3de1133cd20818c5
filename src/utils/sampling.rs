use rand::seq::index;
use rand::Rng;

/// Picks up to `amount` distinct ids uniformly at random.
pub fn sample_ids<R: Rng + ?Sized>(ids: &[i32], amount: usize, rng: &mut R) -> Vec<i32> {
    let amount = amount.min(ids.len());
    index::sample(rng, ids.len(), amount)
        .into_iter()
        .map(|i| ids[i])
        .collect()
}
