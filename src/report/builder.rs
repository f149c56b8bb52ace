//! Report Builder
//!
//! Runs the catalog pipeline over a loaded product list: classify, group
//! duplicate miners, tag series, and assemble the analysis report.

use crate::catalog::{extract_series, find_duplicates, MinerClassifier};
use crate::domain::{AnalysisReport, ClassifiedMinerEntry, DuplicateMember, Product};
use indexmap::IndexMap;
use tracing::{info, warn};

/// Assembles [`AnalysisReport`]s
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    classifier: MinerClassifier,
}

impl ReportBuilder {
    /// Create a builder with the built-in classifier
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder around a custom classifier
    pub fn with_classifier(classifier: MinerClassifier) -> Self {
        Self { classifier }
    }

    /// Build the report for a product list
    pub fn build(&self, products: &[Product]) -> AnalysisReport {
        for (idx, product) in products.iter().enumerate() {
            let malformed = product.malformed_fields();
            if !malformed.is_empty() {
                warn!(
                    index = idx,
                    fields = ?malformed,
                    "Non-text fields treated as empty"
                );
            }
        }

        let (miners, non_miners) = self.classifier.partition(products);
        info!(
            total = products.len(),
            miners = miners.len(),
            non_miners = non_miners.len(),
            "Products classified"
        );

        let duplicates: IndexMap<String, Vec<DuplicateMember>> =
            find_duplicates(miners.iter().copied())
                .into_iter()
                .map(|(model, members)| {
                    let members = members.into_iter().map(DuplicateMember::from).collect();
                    (model, members)
                })
                .collect();
        info!(groups = duplicates.len(), "Duplicate miner listings grouped");

        let entries: Vec<ClassifiedMinerEntry> = miners
            .iter()
            .map(|product| {
                ClassifiedMinerEntry::from_product(product, extract_series(product.model()))
            })
            .collect();

        AnalysisReport {
            total_products: products.len(),
            miners_count: miners.len(),
            non_miners_count: non_miners.len(),
            duplicates_count: duplicates.len(),
            miners: entries,
            non_miners: non_miners.into_iter().cloned().collect(),
            duplicates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn catalog() -> Vec<Product> {
        vec![
            json!({ "id": 1, "model": "S19 Pro", "manufacturer": "Bitmain", "minerDetailId": 10 }),
            json!({ "id": 2, "model": "APW12 Power Supply", "manufacturer": "Bitmain" }),
            json!({ "id": 3, "model": "s19  pro", "manufacturer": null }),
            json!({ "id": 4, "model": "WhatsMiner", "manufacturer": "MicroBT", "minerDetailId": null }),
            json!({ "id": 5, "model": "PowerEdge R740", "manufacturer": "Dell", "price": 1200 }),
            json!({ "id": 6, "manufacturer": "Goldshell" }),
            json!({ "id": 7, "model": "L7 9050M" }),
        ]
        .into_iter()
        .map(Product::new)
        .collect()
    }

    fn ids(values: impl Iterator<Item = Value>) -> Vec<Value> {
        values.collect()
    }

    #[test]
    fn test_counts_partition_input() {
        let products = catalog();
        let report = ReportBuilder::new().build(&products);

        assert_eq!(report.total_products, 7);
        assert_eq!(report.miners_count, 5);
        assert_eq!(report.non_miners_count, 2);
        assert_eq!(report.miners_count + report.non_miners_count, report.total_products);
        assert_eq!(report.miners.len(), report.miners_count);
        assert_eq!(report.non_miners.len(), report.non_miners_count);

        assert_eq!(
            ids(report.miners.iter().map(|m| m.product_id.clone())),
            vec![json!(1), json!(3), json!(4), json!(6), json!(7)]
        );
        assert_eq!(
            ids(report.non_miners.iter().map(Product::id)),
            vec![json!(2), json!(5)]
        );
    }

    #[test]
    fn test_non_miners_are_verbatim() {
        let products = catalog();
        let report = ReportBuilder::new().build(&products);

        assert_eq!(report.non_miners[1], products[4]);
        assert_eq!(report.non_miners[1].as_value()["price"], json!(1200));
    }

    #[test]
    fn test_duplicates_over_miners_only() {
        let products = catalog();
        let report = ReportBuilder::new().build(&products);

        assert_eq!(report.duplicates_count, 1);
        assert_eq!(
            report.duplicates["S19 PRO"],
            vec![
                DuplicateMember { id: json!(1), model: json!("S19 Pro") },
                DuplicateMember { id: json!(3), model: json!("s19  pro") },
            ]
        );
    }

    #[test]
    fn test_miner_entries() {
        let products = catalog();
        let report = ReportBuilder::new().build(&products);

        let first = &report.miners[0];
        assert_eq!(first.series, "S19");
        assert!(first.has_miner_detail);
        assert!(!first.needs_initialization);

        let whatsminer = &report.miners[2];
        assert_eq!(whatsminer.series, "");
        assert!(whatsminer.needs_initialization);

        let no_model = &report.miners[3];
        assert_eq!(no_model.model, Value::Null);
        assert_eq!(no_model.series, "");

        for entry in &report.miners {
            assert_eq!(entry.needs_initialization, !entry.has_miner_detail);
            assert!(entry.notes.is_empty());
        }
    }

    #[test]
    fn test_deterministic() {
        let products = catalog();
        let builder = ReportBuilder::new();

        let first = serde_json::to_string(&builder.build(&products)).unwrap();
        let second = serde_json::to_string(&builder.build(&products)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_catalog() {
        let report = ReportBuilder::new().build(&[]);

        assert_eq!(report.total_products, 0);
        assert!(report.miners.is_empty());
        assert!(report.duplicates.is_empty());
    }
}
