//! Classification Rule Tables
//!
//! Process-wide rule data: the manufacturer allow-list, the accessory
//! exclusion keywords, and the model-family prefix patterns.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Manufacturers that only sell mining hardware (exact match)
pub const MINER_MANUFACTURERS: &[&str] = &[
    "Bitmain",
    "MicroBT",
    "Canaan",
    "Jasminer",
    "Goldshell",
    "ElphapeX",
    "Avalon",
    "Innosilicon",
    "iPollo",
    "YAMI",
];

/// Model substrings marking power supplies, cables, boards and accessories
pub const NON_MINER_KEYWORDS: &[&str] = &[
    "APW",
    "Шумбокс",
    "кабель",
    "cable",
    "плата",
    "board",
    "блок питания",
    "power supply",
];

/// Model-family prefixes, matched case-insensitively from the start
pub const MINER_MODEL_PATTERNS: &[&str] = &[
    r"^S\d+",   // S19, S21, S19j, S19k
    r"^L\d+",   // L7, L9
    r"^M\d+",   // M30S, M50, M60
    r"^T\d+",   // T21
    r"^Z\d+",   // Z15
    r"^E\d+",   // E9
    r"^D\d+",   // D9
    r"^X\d+",   // X16, X4
    r"^P\d+",   // P221
    r"^KS\d+",  // KS3M, KS5P
    r"^JPRO",
    r"^DG",     // DG, DG1, DG1+
    r"^Avalon",
    r"^MiniDoge",
];

static BUILTIN_MODEL_PATTERNS: Lazy<Vec<ModelPattern>> = Lazy::new(|| {
    MINER_MODEL_PATTERNS
        .iter()
        .map(|p| ModelPattern::new(p).expect("built-in model pattern must compile"))
        .collect()
});

/// Compiled built-in model patterns, in evaluation order
pub fn builtin_model_patterns() -> &'static [ModelPattern] {
    &BUILTIN_MODEL_PATTERNS
}

// =============================================================================
// Model Pattern
// =============================================================================

/// Case-insensitive pattern anchored at the start of a model string
#[derive(Debug, Clone)]
pub struct ModelPattern {
    source: String,
    regex: Regex,
}

impl ModelPattern {
    /// Compile a pattern; it is anchored even if the source lacks `^`
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(&format!("^(?:{})", pattern))
            .case_insensitive(true)
            .build()
            .map_err(|e| Error::Configuration(format!("Invalid model pattern {:?}: {}", pattern, e)))?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Pattern as written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the model starts with this pattern
    pub fn is_match(&self, model: &str) -> bool {
        self.regex.is_match(model)
    }

    /// First capture group, or the whole match when the pattern has none
    pub fn capture<'a>(&self, model: &'a str) -> Option<&'a str> {
        let caps = self.regex.captures(model)?;
        caps.get(1).or_else(|| caps.get(0)).map(|m| m.as_str())
    }
}
