//! Aggregation primitives shared by the reports.

use std::collections::BTreeMap;

/// Most frequent value. On ties the lowest value (by `Ord`) wins.
/// Returns `None` for an empty input.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(T, usize)> = None;

    // ascending key order + strict `>` keeps the lowest value on ties
    for (value, count) in count_values(values) {
        if best.as_ref().is_none_or(|(_, top)| count > *top) {
            best = Some((value, count));
        }
    }

    best.map(|(value, _)| value)
}

/// Occurrences of each distinct value, most frequent first.
/// Equal counts are ordered by ascending value.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: Vec<(T, usize)> = count_values(values).into_iter().collect();
    // stable sort: ties stay in key order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn count_values<T, I>(values: I) -> BTreeMap<T, usize>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

/// Sum and arithmetic mean; the mean is `None` when there are no values.
pub fn sum_and_mean<I>(values: I) -> (f64, usize, Option<f64>)
where
    I: IntoIterator<Item = f64>,
{
    let (total, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));

    let mean = if count == 0 {
        None
    } else {
        Some(total / count as f64)
    };

    (total, count, mean)
}
