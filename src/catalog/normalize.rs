//! Model Normalization
//!
//! Canonical form of a model string, used as the duplicate grouping key.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Trim, uppercase and collapse whitespace runs to a single space.
///
/// Idempotent: normalizing an already normalized model returns it unchanged.
pub fn normalize_model(model: &str) -> String {
    if model.is_empty() {
        return String::new();
    }
    let upper = model.trim().to_uppercase();
    WHITESPACE_RUN.replace_all(&upper, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_model(" s19  Pro "), "S19 PRO");
        assert_eq!(normalize_model("S19 PRO"), "S19 PRO");
        assert_eq!(normalize_model("m30s++\t104T"), "M30S++ 104T");
        assert_eq!(normalize_model("шумбокс"), "ШУМБОКС");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize_model(""), "");
        assert_eq!(normalize_model(" \t\n "), "");
    }

    #[test]
    fn test_idempotent() {
        for model in ["  Antminer   s21 XP ", "KS5P", "S19j\u{00a0}Pro", "Whatsminer M60S+"] {
            let once = normalize_model(model);
            assert_eq!(normalize_model(&once), once);
        }
    }
}
