use super::common::{anchored_diff, Anchor};
use super::{check_limit, DiffAlgorithm};
use crate::config::Algorithm;
use crate::result::{DiffResult, Line};
use crate::Error;
use std::collections::HashMap;

/// Lines repeated more often than this in the source region are never
/// anchors, matching git's histogram diff.
const MAX_CHAIN_LEN: usize = 64;

/// Histogram diff: anchor on the least frequent lines shared by both sides.
///
/// Like patience diff the reported distance is an upper bound, not the minimum.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistogramDiffer {
    max_distance: Option<usize>,
}

impl HistogramDiffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_distance(limit: usize) -> Self {
        Self {
            max_distance: Some(limit),
        }
    }
}

impl DiffAlgorithm for HistogramDiffer {
    fn diff(&self, source: &[Line], target: &[Line]) -> Result<DiffResult, Error> {
        check_limit(histogram_diff(source, target), self.max_distance)
    }
}

/// Histogram diff between two line sequences, without a distance cap.
pub fn histogram_diff(source: &[Line], target: &[Line]) -> DiffResult {
    let script = anchored_diff(source, target, rarest_anchor);
    DiffResult::assemble(Algorithm::Histogram, script, source, target)
}

/// Pick one anchor: the run of equal lines around an occurrence of the
/// rarest common line. Ties prefer the longer run, then the earlier target
/// position.
fn rarest_anchor(source: &[Line], target: &[Line]) -> Vec<Anchor> {
    let mut positions: HashMap<&Line, Vec<usize>> = HashMap::new();
    for (i, line) in source.iter().enumerate() {
        positions.entry(line).or_default().push(i);
    }
    let mut target_counts: HashMap<&Line, usize> = HashMap::new();
    for line in target {
        if positions.contains_key(line) {
            *target_counts.entry(line).or_default() += 1;
        }
    }

    let mut best: Option<(usize, Anchor)> = None;
    for (t, line) in target.iter().enumerate() {
        let Some(occurrences) = positions.get(line) else {
            continue;
        };
        if occurrences.len() > MAX_CHAIN_LEN {
            continue;
        }
        let frequency = occurrences.len() + target_counts.get(line).copied().unwrap_or_default();
        if best.is_some_and(|(best_frequency, _)| frequency > best_frequency) {
            continue;
        }

        for &s in occurrences {
            let anchor = extend_match(source, target, s, t);
            let better = match best {
                None => true,
                Some((best_frequency, current)) => {
                    frequency < best_frequency || anchor.len > current.len
                }
            };
            if better {
                best = Some((frequency, anchor));
            }
        }
    }

    best.map(|(_, anchor)| vec![anchor]).unwrap_or_default()
}

/// Grow a single matching pair into the maximal run of equal lines around it.
fn extend_match(source: &[Line], target: &[Line], s: usize, t: usize) -> Anchor {
    let mut before = 0;
    while before < s && before < t && source[s - before - 1] == target[t - before - 1] {
        before += 1;
    }
    let mut after = 0;
    while s + after < source.len()
        && t + after < target.len()
        && source[s + after] == target[t + after]
    {
        after += 1;
    }
    Anchor {
        source: s - before,
        target: t - before,
        len: before + after,
    }
}
