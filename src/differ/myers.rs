use super::DiffAlgorithm;
use crate::config::Algorithm;
use crate::result::{DiffResult, EditOperation, Line};
use crate::Error;
use tracing::debug;

/// The Myers differ: greedy O((N+M)D) search for the shortest edit script.
///
/// Set a cap with [`MyersDiffer::with_max_distance`] to fail fast on inputs
/// that are too dissimilar.
#[derive(Debug, Clone, Copy, Default)]
pub struct MyersDiffer {
    max_distance: Option<usize>,
}

impl MyersDiffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give up with [`Error::LimitExceeded`] once `d` would exceed `limit`.
    pub fn with_max_distance(limit: usize) -> Self {
        Self {
            max_distance: Some(limit),
        }
    }
}

impl DiffAlgorithm for MyersDiffer {
    fn diff(&self, source: &[Line], target: &[Line]) -> Result<DiffResult, Error> {
        let trace = search(source, target, self.max_distance).ok_or(Error::LimitExceeded {
            limit: self.max_distance.unwrap_or_default(),
        })?;
        let script = trace.backtrack(source, target);
        debug_assert_eq!(
            script.iter().filter(|op| op.is_change()).count(),
            trace.distance
        );
        Ok(DiffResult::assemble(Algorithm::Myers, script, source, target))
    }
}

/// Myers diff between two line sequences, without a distance cap.
///
/// ```
/// use linediff::{lines, myers_diff, EditOperation};
///
/// let result = myers_diff(&lines(["a", "b", "c"]), &lines(["a", "x", "c"]));
/// assert_eq!(result.distance, 2);
/// assert_eq!(result.edit_script[1], EditOperation::Delete("b".into()));
/// assert_eq!(result.edit_script[2], EditOperation::Insert("x".into()));
/// ```
pub fn myers_diff(source: &[Line], target: &[Line]) -> DiffResult {
    DiffResult::assemble(
        Algorithm::Myers,
        shortest_edit_script(source, target),
        source,
        target,
    )
}

/// Minimal edit script between `source` and `target`.
pub(crate) fn shortest_edit_script(source: &[Line], target: &[Line]) -> Vec<EditOperation> {
    match search(source, target, None) {
        Some(trace) => trace.backtrack(source, target),
        None => unreachable!("an uncapped search always reaches (N, M)"),
    }
}

/// Furthest-reaching x per diagonal for every completed step of the search.
///
/// Step `d` covers diagonals `-d, -d+2, ..., d` and lives at
/// `arena[d(d+1)/2 ..][..d+1]`; the final step is not recorded since the
/// backtrace only reads the step preceding each move.
#[derive(Debug, Default)]
struct Trace {
    arena: Vec<usize>,
    distance: usize,
}

impl Trace {
    fn record(&mut self, d: usize, v: &[usize], offset: isize) {
        let d = d as isize;
        self.arena
            .extend((-d..=d).step_by(2).map(|k| v[(k + offset) as usize]));
    }

    fn furthest(&self, d: usize, k: isize) -> usize {
        let base = d * (d + 1) / 2;
        self.arena[base + ((k + d as isize) / 2) as usize]
    }

    /// Walk from `(N, M)` back to `(0, 0)` and return the script in forward order.
    fn backtrack(&self, source: &[Line], target: &[Line]) -> Vec<EditOperation> {
        let mut script = Vec::with_capacity(source.len().max(target.len()) + self.distance);
        let mut x = source.len();
        let mut y = target.len();

        for d in (1..=self.distance).rev() {
            let k = x as isize - y as isize;
            let d_signed = d as isize;
            let prev = d - 1;

            let down = k == -d_signed
                || (k != d_signed && self.furthest(prev, k - 1) < self.furthest(prev, k + 1));
            let prev_k = if down { k + 1 } else { k - 1 };
            let prev_x = self.furthest(prev, prev_k);
            let prev_y = (prev_x as isize - prev_k) as usize;

            // End of the move, start of the snake.
            let (mid_x, mid_y) = if down {
                (prev_x, prev_y + 1)
            } else {
                (prev_x + 1, prev_y)
            };
            while x > mid_x && y > mid_y {
                x -= 1;
                y -= 1;
                script.push(EditOperation::Keep(source[x].clone()));
            }

            if down {
                script.push(EditOperation::Insert(target[prev_y].clone()));
            } else {
                script.push(EditOperation::Delete(source[prev_x].clone()));
            }
            x = prev_x;
            y = prev_y;
        }

        debug_assert_eq!(x, y);
        while x > 0 {
            x -= 1;
            script.push(EditOperation::Keep(source[x].clone()));
        }

        script.reverse();
        script
    }
}

/// Forward pass over the edit graph. Returns `None` when `limit` is exceeded.
fn search(source: &[Line], target: &[Line], limit: Option<usize>) -> Option<Trace> {
    let n = source.len();
    let m = target.len();
    let max = n + m;
    let offset = max as isize;
    let mut v = vec![0usize; 2 * max + 2];
    let mut trace = Trace::default();

    for d in 0..=max {
        if let Some(limit) = limit {
            if d > limit {
                debug!(limit, n, m, "myers search exceeded distance limit");
                return None;
            }
        }

        let d_signed = d as isize;
        for k in (-d_signed..=d_signed).step_by(2) {
            let idx = |k: isize| (k + offset) as usize;

            // Ties go to the delete move: insert only when the k+1 side is strictly further.
            let mut x = if d == 0 {
                0
            } else if k == -d_signed || (k != d_signed && v[idx(k - 1)] < v[idx(k + 1)]) {
                v[idx(k + 1)]
            } else {
                v[idx(k - 1)] + 1
            };
            let mut y = (x as isize - k) as usize;

            while x < n && y < m && source[x] == target[y] {
                x += 1;
                y += 1;
            }
            v[idx(k)] = x;

            if x >= n && y >= m {
                debug!(d, n, m, "myers search reached the end of the edit graph");
                trace.distance = d;
                return Some(trace);
            }
        }

        trace.record(d, &v, offset);
    }

    None
}
