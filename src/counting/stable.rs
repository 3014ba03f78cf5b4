//! Stable counting sort.
//!
//! Tallies keys, turns the tallies into end positions with a prefix sum and then places every
//! element, scanning the input backwards, at the slot just before its key's end position. Equal
//! keys keep their input order, so arbitrary elements can be sorted by an integer key.

use super::{key_range, DiscreteKey};

#[inline]
pub fn sort<K>(v: &mut [K])
where
    K: DiscreteKey,
{
    sort_by_key(v, |k| *k);
}

pub fn sort_by_key<T, K, F>(v: &mut [T], mut key: F)
where
    T: Clone,
    K: DiscreteKey,
    F: FnMut(&T) -> K,
{
    let keys = v.iter().map(|elem| key(elem).to_i64()).collect::<Vec<_>>();

    let Some((min, table_len)) = key_range(keys.iter().copied(), v.len()) else {
        return;
    };

    let offsets = keys
        .into_iter()
        .map(|k| (k - min) as usize)
        .collect::<Vec<_>>();

    let mut positions = vec![0usize; table_len];
    for &offset in &offsets {
        positions[offset] += 1;
    }

    // positions[k] becomes one past the last slot for key k.
    for i in 1..positions.len() {
        positions[i] += positions[i - 1];
    }

    let input = v.to_vec();
    for (elem, offset) in input.into_iter().zip(offsets).rev() {
        positions[offset] -= 1;
        v[positions[offset]] = elem;
    }
}
