use super::common::{anchored_diff, Anchor};
use super::{check_limit, DiffAlgorithm};
use crate::config::Algorithm;
use crate::result::{DiffResult, Line};
use crate::Error;
use std::collections::HashMap;

/// Patience diff: anchor on lines that occur exactly once on both sides.
///
/// The result never crosses an anchor, which reads better on code, but the
/// reported distance is not guaranteed minimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatienceDiffer {
    max_distance: Option<usize>,
}

impl PatienceDiffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_distance(limit: usize) -> Self {
        Self {
            max_distance: Some(limit),
        }
    }
}

impl DiffAlgorithm for PatienceDiffer {
    fn diff(&self, source: &[Line], target: &[Line]) -> Result<DiffResult, Error> {
        check_limit(patience_diff(source, target), self.max_distance)
    }
}

/// Patience diff between two line sequences, without a distance cap.
pub fn patience_diff(source: &[Line], target: &[Line]) -> DiffResult {
    let script = anchored_diff(source, target, unique_anchors);
    DiffResult::assemble(Algorithm::Patience, script, source, target)
}

#[derive(Default)]
struct Occurrence {
    source_count: usize,
    source_index: usize,
    target_count: usize,
    target_index: usize,
}

/// Lines unique to both sides, reduced to the longest chain that is
/// increasing in both source and target position.
fn unique_anchors(source: &[Line], target: &[Line]) -> Vec<Anchor> {
    let mut occurrences: HashMap<&Line, Occurrence> = HashMap::new();
    for (i, line) in source.iter().enumerate() {
        let entry = occurrences.entry(line).or_default();
        entry.source_count += 1;
        entry.source_index = i;
    }
    for (j, line) in target.iter().enumerate() {
        if let Some(entry) = occurrences.get_mut(line) {
            entry.target_count += 1;
            entry.target_index = j;
        }
    }

    let mut pairs: Vec<(usize, usize)> = occurrences
        .values()
        .filter(|o| o.source_count == 1 && o.target_count == 1)
        .map(|o| (o.source_index, o.target_index))
        .collect();
    pairs.sort_unstable();

    longest_increasing(&pairs)
        .into_iter()
        .map(|(source, target)| Anchor {
            source,
            target,
            len: 1,
        })
        .collect()
}

/// Longest subsequence of `pairs` (sorted by source index) whose target
/// indices strictly increase, found by patience sorting.
fn longest_increasing(pairs: &[(usize, usize)]) -> Vec<(usize, usize)> {
    // piles[p] = index into `pairs` of the top card of pile p
    let mut piles: Vec<usize> = Vec::new();
    let mut back: Vec<Option<usize>> = vec![None; pairs.len()];

    for (i, &(_, target)) in pairs.iter().enumerate() {
        let pile = piles.partition_point(|&top| pairs[top].1 < target);
        if pile > 0 {
            back[i] = Some(piles[pile - 1]);
        }
        if pile == piles.len() {
            piles.push(i);
        } else {
            piles[pile] = i;
        }
    }

    let mut chain = Vec::with_capacity(piles.len());
    let mut cursor = piles.last().copied();
    while let Some(i) = cursor {
        chain.push(pairs[i]);
        cursor = back[i];
    }
    chain.reverse();
    chain
}
