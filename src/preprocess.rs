use crate::config::{DiffConfiguration, Granularity};
use crate::result::Line;

/// Turn raw text into the comparison units the engine works on.
///
/// Lines are split on `'\n'` only, and a trailing empty line after a final
/// newline is kept. Normalisation is destructive: the returned lines hold the
/// lowercased / space-stripped content that comparisons use.
pub fn prepare(text: &str, config: &DiffConfiguration) -> Vec<Line> {
    match config.granularity {
        Granularity::Line => text
            .split('\n')
            .map(|raw| Line::from(normalize(raw, config)))
            .collect(),
        Granularity::Character => normalize(text, config)
            .chars()
            .map(|c| Line::from(c.to_string()))
            .collect(),
    }
}

/// Apply case folding, then whitespace stripping.
pub(crate) fn normalize(raw: &str, config: &DiffConfiguration) -> String {
    let folded = if config.case_sensitive {
        raw.to_string()
    } else {
        raw.to_lowercase()
    };

    if config.ignore_spaces {
        folded.chars().filter(|c| !matches!(c, ' ' | '\t')).collect()
    } else {
        folded
    }
}
