//! Shuffling, dealing and seat rotation.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

/// Returns the items in a uniformly random order.
///
/// The output holds exactly the input items; nothing is added or dropped.
#[must_use]
pub fn shuffle<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Vec<T> {
    items.shuffle(rng);
    items
}

/// Splits `items` into `parts` partitions whose sizes differ by at most one.
///
/// Each partition first takes an equal contiguous block from the front. The
/// remaining `items.len() % parts` items are then handed out from the back:
/// the first partition gets the last item, the second the one before it, and
/// so on. Returns no partitions when `parts` is zero.
///
/// # Example
///
/// ```
/// use acers::deal::split_evenly;
///
/// let parts = split_evenly(&[1, 2, 3, 4, 5, 6, 7, 8], 3);
/// assert_eq!(parts, vec![vec![1, 2, 8], vec![3, 4, 7], vec![5, 6]]);
/// ```
#[must_use]
pub fn split_evenly<T: Clone>(items: &[T], parts: usize) -> Vec<Vec<T>> {
    if parts == 0 {
        return Vec::new();
    }

    let size = items.len() / parts;
    let mut partitions: Vec<Vec<T>> = (0..parts)
        .map(|index| items[index * size..(index + 1) * size].to_vec())
        .collect();

    for (partition, item) in partitions
        .iter_mut()
        .zip(items.iter().rev().take(items.len() % parts))
    {
        partition.push(item.clone());
    }

    partitions
}

/// Rotates `items` so that `items[start]` comes first, keeping the cyclic
/// order of the rest.
///
/// `start` wraps around the length. An empty input gives an empty output.
#[must_use]
pub fn rotate<T: Clone>(items: &[T], start: usize) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }

    let start = start % items.len();
    items[start..].iter().chain(&items[..start]).cloned().collect()
}
