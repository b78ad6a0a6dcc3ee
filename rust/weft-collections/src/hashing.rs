//! Hash codes that agree across container types.
//!
//! Element hashes come from a fixed-seed `ahash` state, so two collections with
//! equal contents report equal codes no matter which concrete type holds them.

use std::hash::{BuildHasher, Hash, Hasher};

use ahash::RandomState;

const ELEMENT_STATE: RandomState =
    RandomState::with_seeds(0x1f3d5b79, 0x2e4c6a88, 0x9b7d5f31, 0x6a4c2e18);

#[inline]
fn element_hash<T: Hash + ?Sized>(item: &T) -> u64 {
    ELEMENT_STATE.hash_one(item)
}

/// `h = 31 * h + hash(e)` folded from `1`, with wrapping arithmetic.
pub fn ordered_hash_code<'a, T, I>(items: I) -> u64
where
    T: Hash + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().fold(1u64, |code, item| {
        code.wrapping_mul(31).wrapping_add(element_hash(item))
    })
}

/// Wrapping sum of element hashes; independent of iteration order.
pub fn unordered_hash_code<'a, T, I>(items: I) -> u64
where
    T: Hash + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .fold(0u64, |code, item| code.wrapping_add(element_hash(item)))
}

/// Feeds a sequence into `state` the same way for every list type: the length
/// followed by each element.
pub fn hash_sequence<'a, T, I, H>(items: I, len: usize, state: &mut H)
where
    T: Hash + 'a,
    I: IntoIterator<Item = &'a T>,
    H: Hasher,
{
    state.write_usize(len);
    for item in items {
        item.hash(state);
    }
}
