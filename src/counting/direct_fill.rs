//! Counting sort that rewrites the input from the tally table.
//!
//! Walks the table in key order and writes each key as often as it was counted. Only the keys
//! survive, element identity is not preserved, so this is not a stable sort and only works on
//! the keys themselves. There is no keyed form: equal keys are interchangeable, so
//! the lost order can not be observed. Records go through [`super::stable::sort_by_key`].

use super::{key_range, DiscreteKey};

pub fn sort<K>(v: &mut [K])
where
    K: DiscreteKey,
{
    let Some((min, table_len)) = key_range(v.iter().map(|k| k.to_i64()), v.len()) else {
        return;
    };

    let mut counts = vec![0usize; table_len];
    for k in v.iter() {
        counts[(k.to_i64() - min) as usize] += 1;
    }

    let mut slots = v.iter_mut();
    for (offset, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }

        let key = K::from_i64(min + offset as i64);
        for slot in slots.by_ref().take(count) {
            *slot = key;
        }
    }
}
