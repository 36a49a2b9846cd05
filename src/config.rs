use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Enum to specify which diffing algorithm to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Myers' greedy shortest-edit-script search. Always minimal.
    #[default]
    Myers,
    /// Anchors on lines that are unique in both inputs.
    Patience,
    /// Anchors on the least frequent common lines.
    Histogram,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Myers => "myers",
            Algorithm::Patience => "patience",
            Algorithm::Histogram => "histogram",
        }
    }

    /// Only Myers guarantees that the reported distance is the true minimum.
    pub fn is_minimal(&self) -> bool {
        matches!(self, Algorithm::Myers)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "myers" => Ok(Algorithm::Myers),
            "patience" => Ok(Algorithm::Patience),
            "histogram" => Ok(Algorithm::Histogram),
            _ => Err(Error::InvalidConfiguration {
                field: "algorithm",
                value: s.to_string(),
            }),
        }
    }
}

/// The unit of comparison produced by the preprocessor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Granularity {
    #[default]
    Line,
    Character,
}

impl Granularity {
    pub fn name(&self) -> &'static str {
        match self {
            Granularity::Line => "line",
            Granularity::Character => "character",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Granularity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" => Ok(Granularity::Line),
            "character" | "char" => Ok(Granularity::Character),
            _ => Err(Error::InvalidConfiguration {
                field: "granularity",
                value: s.to_string(),
            }),
        }
    }
}

/// Options for a single diff invocation.
///
/// Built with consuming setters and never mutated by the engine:
///
/// ```
/// use linediff::{Algorithm, DiffConfiguration};
///
/// let config = DiffConfiguration::default()
///     .algorithm(Algorithm::Patience)
///     .ignore_spaces(true)
///     .context_lines(1);
/// assert_eq!(config.algorithm, Algorithm::Patience);
/// assert!(config.case_sensitive);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffConfiguration {
    pub algorithm: Algorithm,
    pub granularity: Granularity,
    /// Number of unchanged operations kept around each hunk.
    pub context_lines: usize,
    /// Strip spaces and tabs before comparing.
    pub ignore_spaces: bool,
    pub case_sensitive: bool,
    /// Abort with [`Error::LimitExceeded`] once the edit distance would exceed this.
    pub max_distance: Option<usize>,
}

impl Default for DiffConfiguration {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Myers,
            granularity: Granularity::Line,
            context_lines: 3, // Default number of context lines
            ignore_spaces: false,
            case_sensitive: true,
            max_distance: None,
        }
    }
}

impl DiffConfiguration {
    /// Create a configuration using the named algorithm.
    pub fn with_algorithm_name(name: &str) -> Result<Self, Error> {
        Ok(Self::default().algorithm(name.parse()?))
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Set the number of context lines to include in each hunk.
    pub fn context_lines(mut self, lines: usize) -> Self {
        self.context_lines = lines;
        self
    }

    pub fn ignore_spaces(mut self, ignore: bool) -> Self {
        self.ignore_spaces = ignore;
        self
    }

    pub fn case_sensitive(mut self, sensitive: bool) -> Self {
        self.case_sensitive = sensitive;
        self
    }

    pub fn max_distance(mut self, limit: Option<usize>) -> Self {
        self.max_distance = limit;
        self
    }
}
