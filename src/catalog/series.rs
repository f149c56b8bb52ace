//! Series Extraction
//!
//! Derives a short series tag ("S19J", "L7", "KS5") from the start of a
//! model string. Patterns are tried in order and the first match wins.

use crate::catalog::classification::ModelPattern;
use once_cell::sync::Lazy;

/// Series patterns in priority order
pub const SERIES_PATTERNS: &[&str] = &[
    r"([A-Z]\d+[A-Z]?)", // S19j, L7, M30S
    r"([A-Z]+\d+)",      // KS5, DG1, JPRO2
];

static COMPILED_SERIES_PATTERNS: Lazy<Vec<ModelPattern>> = Lazy::new(|| {
    SERIES_PATTERNS
        .iter()
        .map(|p| ModelPattern::new(p).expect("built-in series pattern must compile"))
        .collect()
});

/// Uppercased series tag, or an empty string when no pattern matches.
///
/// Matching runs on the model exactly as listed, so leading whitespace
/// prevents a match.
pub fn extract_series(model: &str) -> String {
    if model.is_empty() {
        return String::new();
    }

    COMPILED_SERIES_PATTERNS
        .iter()
        .find_map(|pattern| pattern.capture(model))
        .map(|series| series.to_uppercase())
        .unwrap_or_default()
}
