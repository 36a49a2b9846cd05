use crate::result::{EditOperation, Line};
use crate::Error;

/// Replays an edit script over a line sequence.
#[derive(Debug, Clone)]
pub struct Patcher<'a> {
    script: &'a [EditOperation],
}

impl<'a> Patcher<'a> {
    pub fn new(script: &'a [EditOperation]) -> Self {
        Self { script }
    }

    /// Applies the script to `lines`.
    ///
    /// # Arguments
    ///
    /// * `lines` - The source sequence, or the target sequence when `reverse` is set.
    /// * `reverse` - If `true`, Insert and Delete swap roles and the source is rebuilt.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Line>)` - The transformed sequence.
    /// * `Err(Error::ScriptMismatch)` - If `lines` is not the sequence the script was made for.
    pub fn apply(&self, lines: &[Line], reverse: bool) -> Result<Vec<Line>, Error> {
        let mut output = Vec::with_capacity(lines.len());
        let mut cursor = 0;

        for op in self.script {
            let op = if reverse { op.reversed() } else { op.clone() };
            match op {
                EditOperation::Keep(expected) => {
                    Self::expect_line(lines, cursor, &expected)?;
                    output.push(expected);
                    cursor += 1;
                }
                EditOperation::Delete(expected) => {
                    Self::expect_line(lines, cursor, &expected)?;
                    cursor += 1;
                }
                EditOperation::Insert(line) => output.push(line),
            }
        }

        if cursor != lines.len() {
            return Err(Error::ScriptMismatch {
                index: cursor,
                expected: "end of input".to_string(),
                found: lines[cursor].to_string(),
            });
        }

        Ok(output)
    }

    fn expect_line(lines: &[Line], index: usize, expected: &Line) -> Result<(), Error> {
        match lines.get(index) {
            Some(found) if found == expected => Ok(()),
            found => Err(Error::ScriptMismatch {
                index,
                expected: expected.to_string(),
                found: found.map_or_else(|| "end of input".to_string(), Line::to_string),
            }),
        }
    }
}

impl EditOperation {
    /// The operation as seen when going from target back to source.
    pub fn reversed(&self) -> Self {
        match self {
            EditOperation::Keep(line) => EditOperation::Keep(line.clone()),
            EditOperation::Delete(line) => EditOperation::Insert(line.clone()),
            EditOperation::Insert(line) => EditOperation::Delete(line.clone()),
        }
    }
}
