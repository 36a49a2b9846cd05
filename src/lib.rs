//! Line-oriented diffing: Myers shortest edit scripts, Patience and Histogram
//! heuristics, Levenshtein distance and a multiset similarity score.
//!
//! ```
//! use linediff::{DiffConfiguration, Differ, EditOperation};
//!
//! let result = Differ::new(DiffConfiguration::default())
//!     .diff("a\nb\nc", "a\nx\nc")
//!     .unwrap();
//! assert_eq!(result.distance, 2);
//! assert_eq!(result.edit_script[1], EditOperation::Delete("b".into()));
//! ```

use thiserror::Error;

mod config;
pub mod differ;
mod distance;
mod hunk;
mod patcher;
mod preprocess;
mod result;
mod similarity;

pub use config::{Algorithm, DiffConfiguration, Granularity};
// Re-export the differ implementations for convenience
pub use differ::{
    histogram_diff, myers_diff, patience_diff, DiffAlgorithm, Differ, HistogramDiffer,
    MyersDiffer, PatienceDiffer,
};
pub use distance::{edit_distance, edit_distance_tokens};
pub use hunk::{group_hunks, Hunk};
pub use patcher::Patcher;
pub use preprocess::prepare;
pub use result::{lines, DiffLine, DiffResult, DiffSummary, EditOperation, Line};
pub use similarity::{matched_count, similarity};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid {field} '{value}'")]
    InvalidConfiguration { field: &'static str, value: String },

    #[error("Edit distance exceeds the limit of {limit}")]
    LimitExceeded { limit: usize },

    #[error("Edit script does not match input at line {index}: expected '{expected}', found '{found}'")]
    ScriptMismatch {
        index: usize,
        expected: String,
        found: String,
    },
}
