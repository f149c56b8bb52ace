//! Miner Classifier
//!
//! Decides whether a catalog product is mining hardware. Rules are
//! evaluated in a fixed order and the first rule that matches decides:
//! accessory keywords veto everything, then the manufacturer allow-list,
//! then model-family prefixes.

use super::rules::{
    builtin_model_patterns, ModelPattern, MINER_MANUFACTURERS, MINER_MODEL_PATTERNS,
    NON_MINER_KEYWORDS,
};
use crate::domain::Product;
use crate::error::Result;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use tracing::debug;

// =============================================================================
// Classification Result
// =============================================================================

/// Rule that produced a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassificationRule {
    /// Model contains an accessory keyword
    ExcludedKeyword,
    /// Manufacturer is on the allow-list
    KnownManufacturer,
    /// Model starts with a known model family
    ModelPattern,
    /// Nothing matched
    NoMatch,
}

impl ClassificationRule {
    /// Rules in evaluation order
    pub const ORDER: [ClassificationRule; 3] = [
        ClassificationRule::ExcludedKeyword,
        ClassificationRule::KnownManufacturer,
        ClassificationRule::ModelPattern,
    ];

    /// Verdict a product receives when this rule decides
    pub fn verdict(&self) -> bool {
        matches!(
            self,
            ClassificationRule::KnownManufacturer | ClassificationRule::ModelPattern
        )
    }
}

impl std::fmt::Display for ClassificationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassificationRule::ExcludedKeyword => write!(f, "excluded-keyword"),
            ClassificationRule::KnownManufacturer => write!(f, "known-manufacturer"),
            ClassificationRule::ModelPattern => write!(f, "model-pattern"),
            ClassificationRule::NoMatch => write!(f, "no-match"),
        }
    }
}

/// Classification outcome for a product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Product is mining hardware
    pub is_miner: bool,
    /// Rule that decided
    pub rule: ClassificationRule,
    /// Keyword, manufacturer or pattern that matched
    pub matched: Option<String>,
}

// =============================================================================
// Classifier Configuration
// =============================================================================

/// Rule tables for the classifier
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Manufacturer names (exact, case-sensitive)
    pub manufacturers: Vec<String>,

    /// Accessory keywords (case-insensitive substring of the model)
    pub excluded_keywords: Vec<String>,

    /// Model-family patterns (case-insensitive, anchored at the start)
    pub model_patterns: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            manufacturers: MINER_MANUFACTURERS.iter().map(|s| s.to_string()).collect(),
            excluded_keywords: NON_MINER_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            model_patterns: MINER_MODEL_PATTERNS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// =============================================================================
// Miner Classifier
// =============================================================================

static DEFAULT_CLASSIFIER: Lazy<MinerClassifier> = Lazy::new(MinerClassifier::new);

/// Classify a product with the built-in rule tables
pub fn is_miner(product: &Product) -> bool {
    DEFAULT_CLASSIFIER.is_miner(product)
}

/// Splits catalog products into miners and everything else
#[derive(Debug, Clone)]
pub struct MinerClassifier {
    manufacturers: HashSet<String>,
    /// Stored uppercased
    excluded_keywords: Vec<String>,
    model_patterns: Vec<ModelPattern>,
}

impl MinerClassifier {
    /// Create a classifier with the built-in rule tables
    pub fn new() -> Self {
        let config = ClassifierConfig::default();
        Self {
            manufacturers: config.manufacturers.into_iter().collect(),
            excluded_keywords: upper_all(&config.excluded_keywords),
            model_patterns: builtin_model_patterns().to_vec(),
        }
    }

    /// Create a classifier with custom rule tables
    pub fn with_config(config: ClassifierConfig) -> Result<Self> {
        let model_patterns = config
            .model_patterns
            .iter()
            .map(|p| ModelPattern::new(p))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            manufacturers: config.manufacturers.into_iter().collect(),
            excluded_keywords: upper_all(&config.excluded_keywords),
            model_patterns,
        })
    }

    /// Classify a product
    pub fn classify(&self, product: &Product) -> Classification {
        for rule in ClassificationRule::ORDER {
            if let Some(matched) = self.find_match(rule, product) {
                debug!(
                    model = product.model(),
                    rule = %rule,
                    matched = %matched,
                    "Product classified"
                );
                return Classification {
                    is_miner: rule.verdict(),
                    rule,
                    matched: Some(matched),
                };
            }
        }

        debug!(model = product.model(), "No classification rule matched");
        Classification {
            is_miner: false,
            rule: ClassificationRule::NoMatch,
            matched: None,
        }
    }

    /// Whether the product is mining hardware
    pub fn is_miner(&self, product: &Product) -> bool {
        self.classify(product).is_miner
    }

    /// Split products into (miners, non-miners), keeping input order in each
    pub fn partition<'a>(&self, products: &'a [Product]) -> (Vec<&'a Product>, Vec<&'a Product>) {
        products.iter().partition(|p| self.is_miner(p))
    }

    fn find_match(&self, rule: ClassificationRule, product: &Product) -> Option<String> {
        match rule {
            ClassificationRule::ExcludedKeyword => {
                let model = product.model().to_uppercase();
                self.excluded_keywords
                    .iter()
                    .find(|kw| model.contains(kw.as_str()))
                    .cloned()
            }
            ClassificationRule::KnownManufacturer => {
                let manufacturer = product.manufacturer().trim();
                self.manufacturers
                    .contains(manufacturer)
                    .then(|| manufacturer.to_string())
            }
            ClassificationRule::ModelPattern => {
                let model = product.model();
                self.model_patterns
                    .iter()
                    .find(|p| p.is_match(model))
                    .map(|p| p.as_str().to_string())
            }
            ClassificationRule::NoMatch => None,
        }
    }
}

impl Default for MinerClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn upper_all(values: &[String]) -> Vec<String> {
    values.iter().map(|v| v.to_uppercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_product(model: &str, manufacturer: &str) -> Product {
        Product::new(json!({
            "id": 1,
            "model": model,
            "manufacturer": manufacturer,
        }))
    }

    #[test]
    fn test_exclusion_vetoes_manufacturer() {
        let classifier = MinerClassifier::new();
        let result = classifier.classify(&make_product("APW12 Power Supply", "Bitmain"));

        assert!(!result.is_miner);
        assert_eq!(result.rule, ClassificationRule::ExcludedKeyword);
        assert_eq!(result.matched.as_deref(), Some("APW"));
    }

    #[test]
    fn test_exclusion_is_case_insensitive() {
        let classifier = MinerClassifier::new();

        assert!(!classifier.is_miner(&make_product("S19 control BOARD", "Bitmain")));
        assert!(!classifier.is_miner(&make_product("Блок питания для S21", "")));
        assert!(!classifier.is_miner(&make_product("шумбокс S19", "")));
    }

    #[test]
    fn test_known_manufacturer() {
        let classifier = MinerClassifier::new();
        let result = classifier.classify(&make_product("WhatsMiner", "MicroBT"));

        assert!(result.is_miner);
        assert_eq!(result.rule, ClassificationRule::KnownManufacturer);
    }

    #[test]
    fn test_manufacturer_is_trimmed_but_case_sensitive() {
        let classifier = MinerClassifier::new();

        assert!(classifier.is_miner(&make_product("Hydro unit", "  Canaan ")));
        assert!(!classifier.is_miner(&make_product("Hydro unit", "canaan")));
    }

    #[test]
    fn test_model_pattern() {
        let classifier = MinerClassifier::new();
        let result = classifier.classify(&make_product("S19j Pro", ""));

        assert!(result.is_miner);
        assert_eq!(result.rule, ClassificationRule::ModelPattern);
        assert_eq!(result.matched.as_deref(), Some(r"^S\d+"));

        assert!(classifier.is_miner(&make_product("ks5p", "")));
        assert!(classifier.is_miner(&make_product("AvalonMiner 1246", "")));
        assert!(classifier.is_miner(&make_product("DGHOME1", "")));
    }

    #[test]
    fn test_pattern_must_match_prefix() {
        let classifier = MinerClassifier::new();
        assert!(!classifier.is_miner(&make_product("Antminer S19", "")));
    }

    #[test]
    fn test_unmatched() {
        let classifier = MinerClassifier::new();
        let result = classifier.classify(&make_product("PowerEdge R740", "Dell"));

        assert!(!result.is_miner);
        assert_eq!(result.rule, ClassificationRule::NoMatch);
        assert!(result.matched.is_none());
    }

    #[test]
    fn test_missing_fields() {
        let product = Product::new(json!({ "id": 3 }));
        assert!(!is_miner(&product));

        let product = Product::new(json!({ "id": 3, "model": null, "manufacturer": "Bitmain" }));
        assert!(is_miner(&product));
    }

    #[test]
    fn test_custom_config() {
        let config = ClassifierConfig {
            manufacturers: vec!["Acme".into()],
            excluded_keywords: vec!["fan".into()],
            model_patterns: vec![r"Q\d+".into()],
        };
        let classifier = MinerClassifier::with_config(config).unwrap();

        assert!(classifier.is_miner(&make_product("Q7", "")));
        assert!(classifier.is_miner(&make_product("Thing", "Acme")));
        assert!(!classifier.is_miner(&make_product("Q7 Fan", "Acme")));
        assert!(!classifier.is_miner(&make_product("S19", "Bitmain")));
    }

    #[test]
    fn test_partition_preserves_order() {
        let classifier = MinerClassifier::new();
        let products = vec![
            make_product("S19", ""),
            make_product("APW17", "Bitmain"),
            make_product("L7", ""),
            make_product("R740", "Dell"),
        ];

        let (miners, others) = classifier.partition(&products);
        let models = |ps: &[&Product]| ps.iter().map(|p| p.model().to_string()).collect::<Vec<_>>();

        assert_eq!(models(&miners), vec!["S19", "L7"]);
        assert_eq!(models(&others), vec!["APW17", "R740"]);
    }

    #[test]
    fn test_rule_labels() {
        assert_eq!(ClassificationRule::ExcludedKeyword.to_string(), "excluded-keyword");
        assert_eq!(ClassificationRule::KnownManufacturer.to_string(), "known-manufacturer");
        assert_eq!(ClassificationRule::ModelPattern.to_string(), "model-pattern");
        assert_eq!(ClassificationRule::NoMatch.to_string(), "no-match");
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(ClassificationRule::ORDER[0], ClassificationRule::ExcludedKeyword);
        assert!(!ClassificationRule::ExcludedKeyword.verdict());
        assert!(ClassificationRule::KnownManufacturer.verdict());
        assert!(ClassificationRule::ModelPattern.verdict());
        assert!(!ClassificationRule::NoMatch.verdict());
    }
}
