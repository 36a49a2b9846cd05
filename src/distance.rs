//! Character-level Levenshtein distance, independent of the line engine.

/// Levenshtein distance between `a` and `b`, counted in `char`s.
///
/// ```
/// assert_eq!(linediff::edit_distance("kitten", "sitting"), 3);
/// assert_eq!(linediff::edit_distance("abc", ""), 3);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_distance_tokens(&a, &b)
}

/// Levenshtein distance over arbitrary tokens.
///
/// Only two rows of the `(|a|+1) x (|b|+1)` table are kept, sized by the
/// shorter input.
pub fn edit_distance_tokens<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    // prev[j] = dp[i-1][j], curr[j] = dp[i][j]
    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0; short.len() + 1];

    for i in 1..=long.len() {
        curr[0] = i;
        for j in 1..=short.len() {
            curr[j] = if long[i - 1] == short[j - 1] {
                prev[j - 1]
            } else {
                1 + prev[j].min(curr[j - 1]).min(prev[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}
