use super::myers::shortest_edit_script;
use crate::result::{EditOperation, Line};
use std::ops::Range;
use tracing::trace;

/// A run of `len` equal lines starting at `source` / `target`, relative to the
/// slices handed to the anchor callback of [`anchored_diff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Anchor {
    pub source: usize,
    pub target: usize,
    pub len: usize,
}

enum Task {
    Region {
        source: Range<usize>,
        target: Range<usize>,
    },
    /// Source lines to emit unchanged.
    Keep(Range<usize>),
}

/// Length of the common prefix of two slices
pub(crate) fn common_prefix(source: &[Line], target: &[Line]) -> usize {
    source
        .iter()
        .zip(target)
        .take_while(|(a, b)| a == b)
        .count()
}

/// Length of the common suffix of two slices
pub(crate) fn common_suffix(source: &[Line], target: &[Line]) -> usize {
    source
        .iter()
        .rev()
        .zip(target.iter().rev())
        .take_while(|(a, b)| a == b)
        .count()
}

fn keep(script: &mut Vec<EditOperation>, lines: &[Line]) {
    script.extend(lines.iter().cloned().map(EditOperation::Keep));
}

/// Diff by repeatedly splitting regions on anchors.
///
/// Each region sheds its common prefix and suffix, then `find_anchors`
/// proposes anchors inside the middle. Anchors must be sorted and must not
/// cross. A middle without anchors goes to Myers. Pending work lives on an
/// explicit stack; a task is only popped once everything before it has been
/// emitted.
pub(crate) fn anchored_diff<F>(
    source: &[Line],
    target: &[Line],
    mut find_anchors: F,
) -> Vec<EditOperation>
where
    F: FnMut(&[Line], &[Line]) -> Vec<Anchor>,
{
    let mut script = Vec::with_capacity(source.len().max(target.len()));
    let mut stack = vec![Task::Region {
        source: 0..source.len(),
        target: 0..target.len(),
    }];

    while let Some(task) = stack.pop() {
        let (s, t) = match task {
            Task::Keep(range) => {
                keep(&mut script, &source[range]);
                continue;
            }
            Task::Region { source: s, target: t } => (s, t),
        };

        let prefix = common_prefix(&source[s.clone()], &target[t.clone()]);
        let suffix = common_suffix(
            &source[s.start + prefix..s.end],
            &target[t.start + prefix..t.end],
        );
        let mid_s = s.start + prefix..s.end - suffix;
        let mid_t = t.start + prefix..t.end - suffix;

        keep(&mut script, &source[s.start..mid_s.start]);

        let anchors = if mid_s.is_empty() || mid_t.is_empty() {
            Vec::new()
        } else {
            find_anchors(&source[mid_s.clone()], &target[mid_t.clone()])
        };
        trace!(
            source = ?mid_s,
            target = ?mid_t,
            anchors = anchors.len(),
            "diffing region"
        );

        if anchors.is_empty() {
            script.extend(shortest_edit_script(
                &source[mid_s.clone()],
                &target[mid_t.clone()],
            ));
            keep(&mut script, &source[mid_s.end..s.end]);
            continue;
        }

        // Pushed in reverse so they pop in order.
        stack.push(Task::Keep(mid_s.end..s.end));
        let mut next_s = mid_s.end;
        let mut next_t = mid_t.end;
        for anchor in anchors.iter().rev() {
            let anchor_s = mid_s.start + anchor.source;
            let anchor_t = mid_t.start + anchor.target;
            stack.push(Task::Region {
                source: anchor_s + anchor.len..next_s,
                target: anchor_t + anchor.len..next_t,
            });
            stack.push(Task::Keep(anchor_s..anchor_s + anchor.len));
            next_s = anchor_s;
            next_t = anchor_t;
        }
        stack.push(Task::Region {
            source: mid_s.start..next_s,
            target: mid_t.start..next_t,
        });
    }

    script
}
