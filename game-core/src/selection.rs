use game_types::Player;
use tracing::warn;

use crate::RandomSource;

/// Uniform Fisher–Yates shuffle.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// Weighted sampling without replacement.
///
/// The pool is shuffled once, then each of the `count` draws walks the
/// remaining candidates subtracting their weight from a uniform value in
/// `[0, total)` until the remainder reaches zero. If float drift leaves no
/// candidate selected, the last one in the pool is taken.
///
/// `count` must be smaller than `players.len()`; the result is truncated
/// rather than panicking if the pool runs dry.
pub fn select_impostors<'a, F, R>(
    players: &'a [Player],
    count: usize,
    mut weight: F,
    rng: &mut R,
) -> Vec<&'a Player>
where
    F: FnMut(&Player) -> f64,
    R: RandomSource + ?Sized,
{
    let mut pool: Vec<&Player> = players.iter().collect();
    shuffle(&mut pool, rng);

    let mut chosen = Vec::with_capacity(count);
    while chosen.len() < count && !pool.is_empty() {
        let weights: Vec<f64> = pool.iter().map(|p| weight(p)).collect();
        let total: f64 = weights.iter().sum();
        let mut remainder = rng.next_f64() * total;

        let picked = weights.iter().position(|w| {
            remainder -= w;
            remainder <= 0.0
        });

        let index = picked.unwrap_or_else(|| {
            warn!("Weighted draw fell through (total {}), taking last candidate", total);
            pool.len() - 1
        });
        chosen.push(pool.remove(index));
    }

    chosen
}
