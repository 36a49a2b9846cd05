use crate::result::EditOperation;
use std::fmt;

/// A contiguous block of changes with surrounding context.
///
/// Starts are 0-based offsets into the source and target sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    pub source_start: usize,
    pub source_len: usize,
    pub target_start: usize,
    pub target_len: usize,
    pub operations: Vec<EditOperation>,
}

impl Hunk {
    fn new(source_start: usize, target_start: usize, operations: Vec<EditOperation>) -> Self {
        Self {
            source_start,
            source_len: operations.iter().filter(|op| op.in_source()).count(),
            target_start,
            target_len: operations.iter().filter(|op| op.in_target()).count(),
            operations,
        }
    }
}

/// Unified-diff header position: 1-based, or the insertion point for an empty side.
fn header_start(start: usize, len: usize) -> usize {
    if len == 0 {
        start
    } else {
        start + 1
    }
}

impl fmt::Display for Hunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "@@ -{},{} +{},{} @@",
            header_start(self.source_start, self.source_len),
            self.source_len,
            header_start(self.target_start, self.target_len),
            self.target_len
        )?;

        for op in &self.operations {
            writeln!(f, "{op}")?;
        }

        Ok(())
    }
}

/// 0-based (source, target) position before each operation.
pub(crate) fn positions(script: &[EditOperation]) -> Vec<(usize, usize)> {
    let mut positions = Vec::with_capacity(script.len());
    let (mut source_pos, mut target_pos) = (0, 0);
    for op in script {
        positions.push((source_pos, target_pos));
        if op.in_source() {
            source_pos += 1;
        }
        if op.in_target() {
            target_pos += 1;
        }
    }
    positions
}

/// Split an edit script into hunks with `context` unchanged operations on
/// each side. Changes separated by at most `2 * context` unchanged
/// operations share a hunk.
pub fn group_hunks(script: &[EditOperation], context: usize) -> Vec<Hunk> {
    let positions = positions(script);

    let changes: Vec<usize> = script
        .iter()
        .enumerate()
        .filter(|(_, op)| op.is_change())
        .map(|(i, _)| i)
        .collect();
    let Some((&first, rest)) = changes.split_first() else {
        return Vec::new();
    };

    let mut hunks = Vec::new();
    let mut flush = |first: usize, last: usize| {
        let start = first.saturating_sub(context);
        let end = (last + context + 1).min(script.len());
        let (source_start, target_start) = positions[start];
        hunks.push(Hunk::new(
            source_start,
            target_start,
            script[start..end].to_vec(),
        ));
    };

    let (mut group_first, mut group_last) = (first, first);
    for &change in rest {
        if change - group_last - 1 > 2 * context {
            flush(group_first, group_last);
            group_first = change;
        }
        group_last = change;
    }
    flush(group_first, group_last);

    hunks
}
