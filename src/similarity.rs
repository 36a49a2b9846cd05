use std::collections::HashMap;
use std::hash::Hash;

/// Ratio of matched lines to the longer sequence, in `[0, 1]`.
///
/// Each target line is matched against at most one equal source line, so the
/// numerator is the size of the multiset intersection. Two empty sequences are
/// vacuously identical (1.0); one empty sequence against a non-empty one scores 0.0.
pub fn similarity<T: Eq + Hash>(source: &[T], target: &[T]) -> f64 {
    let longest = source.len().max(target.len());
    if longest == 0 {
        return 1.0;
    }

    matched_count(source, target) as f64 / longest as f64
}

/// Size of the multiset intersection of `source` and `target`
pub fn matched_count<T: Eq + Hash>(source: &[T], target: &[T]) -> usize {
    let mut available: HashMap<&T, usize> = HashMap::with_capacity(source.len());
    for item in source {
        *available.entry(item).or_default() += 1;
    }

    let mut matched = 0;
    for item in target {
        if let Some(count) = available.get_mut(item) {
            if *count > 0 {
                *count -= 1;
                matched += 1;
            }
        }
    }
    matched
}
