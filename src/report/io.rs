//! Catalog and Report Files
//!
//! Reads the catalog export and writes the analysis report as
//! pretty-printed JSON with non-ASCII text kept literal.

use crate::domain::{AnalysisReport, Product};
use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Parse a catalog document; only the top-level `products` list is read
pub fn parse_products(json: &str) -> Result<Vec<Product>> {
    let document: Value = serde_json::from_str(json)?;

    let products = document.get("products").ok_or(Error::MissingProducts)?;
    let items = products.as_array().ok_or_else(|| {
        Error::InvalidProducts(format!("expected a list, found {}", json_kind(products)))
    })?;

    Ok(items.iter().cloned().map(Product::new).collect())
}

/// Load the catalog from a file
pub fn load_products(path: &Path) -> Result<Vec<Product>> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;

    let products = parse_products(&contents)?;
    info!(path = %path.display(), count = products.len(), "Catalog loaded");
    Ok(products)
}

/// Serialize a report the way it is written to disk
pub fn render_report(report: &AnalysisReport) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(report)?)
}

/// Write a report to a file.
///
/// The report is fully serialized before the file is created.
pub fn save_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    let bytes = render_report(report)?;
    debug!(bytes = bytes.len(), "Report serialized");

    fs::write(path, &bytes).map_err(|e| Error::OutputWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    info!(path = %path.display(), "Report written");
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
