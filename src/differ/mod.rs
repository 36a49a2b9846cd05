mod common;
mod histogram;
mod myers;
mod patience;

use crate::config::{Algorithm, DiffConfiguration};
use crate::preprocess::{normalize, prepare};
use crate::result::{DiffResult, Line};
use crate::{edit_distance, Error};
use tracing::debug;

pub use histogram::{histogram_diff, HistogramDiffer};
pub use myers::{myers_diff, MyersDiffer};
pub use patience::{patience_diff, PatienceDiffer};

/// Trait for different diffing algorithms
pub trait DiffAlgorithm {
    /// Diff two preprocessed line sequences.
    ///
    /// # Errors
    ///
    /// * [`Error::LimitExceeded`] if a distance cap is set and exceeded.
    fn diff(&self, source: &[Line], target: &[Line]) -> Result<DiffResult, Error>;
}

/// Reject a finished result whose distance is above `limit`.
pub(crate) fn check_limit(result: DiffResult, limit: Option<usize>) -> Result<DiffResult, Error> {
    match limit {
        Some(limit) if result.distance > limit => {
            debug!(
                limit,
                distance = result.distance,
                algorithm = %result.algorithm,
                "diff exceeded distance limit"
            );
            Err(Error::LimitExceeded { limit })
        }
        _ => Ok(result),
    }
}

/// The base Differ struct that orchestrates the diffing process
///
/// ```
/// use linediff::{Algorithm, DiffConfiguration, Differ};
///
/// let differ = Differ::new(DiffConfiguration::default().algorithm(Algorithm::Histogram));
/// let result = differ.diff("a\nb\nc", "a\nB\nc").unwrap();
/// assert_eq!(result.summary().unchanged, 2);
/// assert!(!result.is_minimal());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Differ {
    config: DiffConfiguration,
}

impl Differ {
    pub fn new(config: DiffConfiguration) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiffConfiguration {
        &self.config
    }

    /// Preprocess both texts and diff the resulting sequences.
    pub fn diff(&self, source: &str, target: &str) -> Result<DiffResult, Error> {
        let source = prepare(source, &self.config);
        let target = prepare(target, &self.config);
        self.diff_lines(&source, &target)
    }

    /// Diff sequences that are already split (and normalised) by the caller.
    pub fn diff_lines(&self, source: &[Line], target: &[Line]) -> Result<DiffResult, Error> {
        let limit = self.config.max_distance;
        debug!(
            algorithm = %self.config.algorithm,
            source_len = source.len(),
            target_len = target.len(),
            ?limit,
            "computing diff"
        );

        match self.config.algorithm {
            Algorithm::Myers => match limit {
                Some(limit) => MyersDiffer::with_max_distance(limit).diff(source, target),
                None => MyersDiffer::new().diff(source, target),
            },
            Algorithm::Patience => match limit {
                Some(limit) => PatienceDiffer::with_max_distance(limit).diff(source, target),
                None => PatienceDiffer::new().diff(source, target),
            },
            Algorithm::Histogram => match limit {
                Some(limit) => HistogramDiffer::with_max_distance(limit).diff(source, target),
                None => HistogramDiffer::new().diff(source, target),
            },
        }
    }

    /// Character-level Levenshtein distance after the configured case and
    /// whitespace normalisation.
    pub fn edit_distance(&self, a: &str, b: &str) -> usize {
        edit_distance(&normalize(a, &self.config), &normalize(b, &self.config))
    }
}
