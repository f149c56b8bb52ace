//! Catalog Records
//!
//! Product records as read from the catalog export, and the derived records
//! that make up the analysis report.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// =============================================================================
// Product
// =============================================================================

/// A single catalog record.
///
/// The raw JSON value is kept as-is so that records can be echoed back into
/// the report without losing or reordering fields. Accessors treat missing,
/// `null`, and non-string text fields as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product(Value);

impl Product {
    /// Wrap a raw catalog record
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    /// Raw JSON for this record
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Product identifier, `null` when absent
    pub fn id(&self) -> Value {
        self.raw_field("id")
    }

    /// Model as stored in the record, `null` when absent
    pub fn raw_model(&self) -> Value {
        self.raw_field("model")
    }

    /// Manufacturer as stored in the record, `null` when absent
    pub fn raw_manufacturer(&self) -> Value {
        self.raw_field("manufacturer")
    }

    /// Model text, empty when absent or not a string
    pub fn model(&self) -> &str {
        self.text_field("model")
    }

    /// Manufacturer text, empty when absent or not a string
    pub fn manufacturer(&self) -> &str {
        self.text_field("manufacturer")
    }

    /// Detail record reference; `null` counts as absent
    pub fn miner_detail_id(&self) -> Option<&Value> {
        self.0.get("minerDetailId").filter(|v| !v.is_null())
    }

    /// Whether a detail record is already linked to this product
    pub fn has_miner_detail(&self) -> bool {
        self.miner_detail_id().is_some()
    }

    /// Text fields that hold something other than a string or `null`
    pub fn malformed_fields(&self) -> Vec<&'static str> {
        ["model", "manufacturer"]
            .into_iter()
            .filter(|key| {
                matches!(self.0.get(*key), Some(v) if !v.is_null() && !v.is_string())
            })
            .collect()
    }

    fn raw_field(&self, key: &str) -> Value {
        self.0.get(key).cloned().unwrap_or(Value::Null)
    }

    fn text_field(&self, key: &str) -> &str {
        self.0.get(key).and_then(Value::as_str).unwrap_or("")
    }
}

impl From<Value> for Product {
    fn from(raw: Value) -> Self {
        Self::new(raw)
    }
}

// =============================================================================
// Report Records
// =============================================================================

/// A product classified as mining hardware
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedMinerEntry {
    /// Identifier of the source product
    pub product_id: Value,
    /// Model as listed
    pub model: Value,
    /// Manufacturer as listed
    pub manufacturer: Value,
    /// Coarse series tag, empty when none could be derived
    pub series: String,
    /// No detail record is linked yet
    pub needs_initialization: bool,
    /// A detail record is already linked
    pub has_miner_detail: bool,
    /// Reserved for manual annotation
    pub notes: String,
}

impl ClassifiedMinerEntry {
    /// Build an entry for a miner product with a precomputed series tag
    pub fn from_product(product: &Product, series: String) -> Self {
        let has_miner_detail = product.has_miner_detail();
        Self {
            product_id: product.id(),
            model: product.raw_model(),
            manufacturer: product.raw_manufacturer(),
            series,
            needs_initialization: !has_miner_detail,
            has_miner_detail,
            notes: String::new(),
        }
    }
}

/// One listing inside a duplicate group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateMember {
    pub id: Value,
    pub model: Value,
}

impl From<&Product> for DuplicateMember {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id(),
            model: product.raw_model(),
        }
    }
}

// =============================================================================
// Analysis Report
// =============================================================================

/// Split of miner entries by detail-record state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitializationCounts {
    /// Miners without a detail record
    pub pending: usize,
    /// Miners already linked to a detail record
    pub linked: usize,
}

/// Result of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub total_products: usize,
    pub miners_count: usize,
    pub non_miners_count: usize,
    pub duplicates_count: usize,
    pub miners: Vec<ClassifiedMinerEntry>,
    pub non_miners: Vec<Product>,
    /// Normalized model -> listings sharing it, in first-seen order
    pub duplicates: IndexMap<String, Vec<DuplicateMember>>,
}

impl AnalysisReport {
    /// Miner counts per series, largest first, ties broken by name.
    ///
    /// Miners without a series are counted under an empty string.
    pub fn series_breakdown(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for entry in &self.miners {
            *counts.entry(entry.series.as_str()).or_default() += 1;
        }

        let mut breakdown: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(series, count)| (series.to_string(), count))
            .collect();
        breakdown.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        breakdown
    }

    /// How many miners still need a detail record
    pub fn initialization_counts(&self) -> InitializationCounts {
        let pending = self
            .miners
            .iter()
            .filter(|entry| entry.needs_initialization)
            .count();
        InitializationCounts {
            pending,
            linked: self.miners.len() - pending,
        }
    }
}
