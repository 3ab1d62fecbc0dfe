//! Frequency helpers shared by the report generators
//!
//! Ties are always broken by first occurrence in input order.

use std::collections::HashMap;
use std::hash::Hash;

/// Count distinct values, sorted by descending count
///
/// Values with equal counts keep their first-seen order.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    let mut order: Vec<T> = Vec::new();

    for value in values {
        let count = counts.entry(value.clone()).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    let mut result: Vec<(T, usize)> = order
        .into_iter()
        .map(|value| {
            let count = counts[&value];
            (value, count)
        })
        .collect();

    // stable sort keeps first-seen order within equal counts
    result.sort_by(|a, b| b.1.cmp(&a.1));
    result
}

/// The most frequent value, if any
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    mode_with_count(values).map(|(value, _)| value)
}

/// The most frequent value with its count, if any
pub fn mode_with_count<T, I>(values: I) -> Option<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    value_counts(values).into_iter().next()
}

/// Every value sharing the highest count, in first-seen order
pub fn modes<T, I>(values: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let counts = value_counts(values);
    let top = match counts.first() {
        Some(&(_, count)) => count,
        None => return Vec::new(),
    };
    counts
        .into_iter()
        .take_while(|&(_, count)| count == top)
        .map(|(value, _)| value)
        .collect()
}
