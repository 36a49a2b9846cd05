use crate::config::Algorithm;
use crate::hunk::{group_hunks, positions, Hunk};
use crate::similarity::similarity;
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// A single comparison unit after preprocessing. Equality is by content only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Line(String);

impl Line {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for Line {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Line {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Line {
    fn from(content: &str) -> Self {
        Self(content.to_string())
    }
}

impl From<String> for Line {
    fn from(content: String) -> Self {
        Self(content)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build a line sequence from anything yielding string slices.
pub fn lines<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<Line> {
    items.into_iter().map(Line::from).collect()
}

/// One step of an edit script. Read in order, the operations turn the source
/// sequence into the target sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EditOperation {
    Keep(Line),
    Delete(Line),
    Insert(Line),
}

impl EditOperation {
    pub(crate) fn to_char(&self) -> char {
        match self {
            EditOperation::Insert(_) => '+',
            EditOperation::Delete(_) => '-',
            EditOperation::Keep(_) => ' ',
        }
    }

    pub fn line(&self) -> &Line {
        match self {
            EditOperation::Keep(line) => line,
            EditOperation::Delete(line) => line,
            EditOperation::Insert(line) => line,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, EditOperation::Keep(_))
    }

    /// Whether the operation consumes a line of the source sequence.
    pub(crate) fn in_source(&self) -> bool {
        !matches!(self, EditOperation::Insert(_))
    }

    /// Whether the operation produces a line of the target sequence.
    pub(crate) fn in_target(&self) -> bool {
        !matches!(self, EditOperation::Delete(_))
    }
}

impl fmt::Display for EditOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.to_char(), self.line())
    }
}

/// A line of the edit script with its 1-based line number.
///
/// Inserted lines are numbered in the target; kept and deleted lines in the
/// source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    pub line_number: usize,
    pub line: Line,
}

/// Counts of each operation kind in an edit script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffSummary {
    pub additions: usize,
    pub deletions: usize,
    pub unchanged: usize,
}

impl DiffSummary {
    pub fn from_script(script: &[EditOperation]) -> Self {
        script.iter().fold(Self::default(), |mut summary, op| {
            match op {
                EditOperation::Insert(_) => summary.additions += 1,
                EditOperation::Delete(_) => summary.deletions += 1,
                EditOperation::Keep(_) => summary.unchanged += 1,
            }
            summary
        })
    }

    pub fn changes(&self) -> usize {
        self.additions + self.deletions
    }
}

impl fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} additions, {} deletions, {} unchanged",
            self.additions, self.deletions, self.unchanged
        )
    }
}

/// The outcome of one diff call.
///
/// `distance` is the number of `Insert` plus `Delete` operations in
/// `edit_script`. It is the true minimum only when [`DiffResult::is_minimal`]
/// returns `true` (Myers); Patience and Histogram report an upper bound.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffResult {
    pub edit_script: Vec<EditOperation>,
    pub distance: usize,
    pub similarity: f64,
    pub algorithm: Algorithm,
}

impl DiffResult {
    /// Package an edit script produced by `algorithm` for `source` and `target`.
    pub fn assemble(
        algorithm: Algorithm,
        edit_script: Vec<EditOperation>,
        source: &[Line],
        target: &[Line],
    ) -> Self {
        let distance = edit_script.iter().filter(|op| op.is_change()).count();
        Self {
            edit_script,
            distance,
            similarity: similarity(source, target),
            algorithm,
        }
    }

    pub fn is_minimal(&self) -> bool {
        self.algorithm.is_minimal()
    }

    pub fn is_identical(&self) -> bool {
        self.distance == 0
    }

    pub fn summary(&self) -> DiffSummary {
        DiffSummary::from_script(&self.edit_script)
    }

    pub fn hunks(&self, context_lines: usize) -> Vec<Hunk> {
        group_hunks(&self.edit_script, context_lines)
    }

    /// Inserted lines, numbered in the target.
    pub fn additions(&self) -> Vec<DiffLine> {
        self.numbered(|op| matches!(op, EditOperation::Insert(_)))
    }

    /// Deleted lines, numbered in the source.
    pub fn deletions(&self) -> Vec<DiffLine> {
        self.numbered(|op| matches!(op, EditOperation::Delete(_)))
    }

    /// Kept lines, numbered in the source.
    pub fn unchanged(&self) -> Vec<DiffLine> {
        self.numbered(|op| matches!(op, EditOperation::Keep(_)))
    }

    fn numbered(&self, select: impl Fn(&EditOperation) -> bool) -> Vec<DiffLine> {
        self.edit_script
            .iter()
            .zip(positions(&self.edit_script))
            .filter(|(op, _)| select(*op))
            .map(|(op, (source_pos, target_pos))| {
                let index = if op.in_source() { source_pos } else { target_pos };
                DiffLine {
                    line_number: index + 1,
                    line: op.line().clone(),
                }
            })
            .collect()
    }

    /// The source sequence as recorded by the script.
    pub fn source_lines(&self) -> Vec<Line> {
        self.edit_script
            .iter()
            .filter(|op| op.in_source())
            .map(|op| op.line().clone())
            .collect()
    }

    /// The target sequence as recorded by the script.
    pub fn target_lines(&self) -> Vec<Line> {
        self.edit_script
            .iter()
            .filter(|op| op.in_target())
            .map(|op| op.line().clone())
            .collect()
    }
}
